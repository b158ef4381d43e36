//! Pulse effect
//!
//! Brightness follows a half-sine envelope over the configured duration,
//! rising from dark to full at the midpoint and back down. Once the
//! duration has elapsed the color is held at full brightness.

use core::f32::consts::PI;

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, finite};
use crate::color::{Rgb, WHITE, scale_color_f32};
use crate::error::ParameterError;
use crate::math8::{as_secs_f32, from_secs_f32};

const DEFAULT_DURATION_SECS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseEffect {
    pub color: Rgb,
    /// Envelope length in seconds
    pub duration: f32,
}

impl Default for PulseEffect {
    fn default() -> Self {
        Self {
            color: WHITE,
            duration: DEFAULT_DURATION_SECS,
        }
    }
}

impl PulseEffect {
    /// Envelope level (0.0-1.0) at `elapsed`
    pub fn level(&self, elapsed: Duration) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let progress = as_secs_f32(elapsed) / self.duration;
        if progress >= 1.0 {
            return 1.0;
        }
        libm::sinf(PI * progress.max(0.0))
    }
}

impl Effect for PulseEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        finite("duration", self.duration)
    }

    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        Some(from_secs_f32(self.duration))
    }

    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        leds.fill(scale_color_f32(self.color, self.level(ctx.elapsed)));
    }
}
