//! Breathing effect
//!
//! `count` smooth brightness swells, each `period` seconds long, ending dark.

use core::f32::consts::PI;

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, finite};
use crate::color::{Rgb, WHITE, scale_color_f32};
use crate::error::ParameterError;
use crate::math8::{as_secs_f32, from_secs_f32};

const DEFAULT_PERIOD_SECS: f32 = 5.0;
const DEFAULT_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathEffect {
    pub color: Rgb,
    /// Length of one breath in seconds
    pub period: f32,
    /// Number of breaths
    pub count: u32,
}

impl Default for BreathEffect {
    fn default() -> Self {
        Self {
            color: WHITE,
            period: DEFAULT_PERIOD_SECS,
            count: DEFAULT_COUNT,
        }
    }
}

impl BreathEffect {
    /// Brightness (0.0-1.0) at `elapsed`
    #[allow(clippy::cast_precision_loss)]
    pub fn level(&self, elapsed: Duration) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let t = as_secs_f32(elapsed);
        if t >= self.period * self.count as f32 {
            return 0.0;
        }
        let cycles = t / self.period;
        let phase = cycles - libm::floorf(cycles);
        (1.0 - libm::cosf(2.0 * PI * phase)) / 2.0
    }
}

impl Effect for BreathEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        finite("period", self.period)
    }

    #[allow(clippy::cast_precision_loss)]
    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        Some(from_secs_f32(self.period * self.count as f32))
    }

    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        leds.fill(scale_color_f32(self.color, self.level(ctx.elapsed)));
    }
}
