//! Fade effect
//!
//! Linear crossfade from the pixels the section showed when the effect
//! started to a target color.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, finite};
use crate::color::{BLACK, Rgb, blend_colors};
use crate::error::ParameterError;
use crate::math8::{from_secs_f32, progress8};

const DEFAULT_DURATION_SECS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeEffect {
    /// Target color
    pub color: Rgb,
    /// Fade time in seconds
    pub duration: f32,
}

impl Default for FadeEffect {
    fn default() -> Self {
        Self {
            color: BLACK,
            duration: DEFAULT_DURATION_SECS,
        }
    }
}

impl Effect for FadeEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        finite("duration", self.duration)
    }

    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        Some(from_secs_f32(self.duration))
    }

    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let amount = progress8(ctx.elapsed, from_secs_f32(self.duration));
        for (led, source) in leds.iter_mut().zip(ctx.backdrop) {
            *led = blend_colors(*source, self.color, amount);
        }
    }
}
