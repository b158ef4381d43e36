//! Wipe effect
//!
//! Lights the section pixel by pixel from one end to the other over the
//! pixels it showed before.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, positive};
use crate::color::{Rgb, WHITE};
use crate::error::ParameterError;
use crate::math8::{as_secs_f32, from_secs_f32};

const DEFAULT_SPEED: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipeDirection {
    /// From the first pixel of the section towards the last
    #[default]
    Forward,
    /// From the last pixel of the section towards the first
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WipeEffect {
    pub color: Rgb,
    pub direction: WipeDirection,
    /// Pixels per second
    pub speed: f32,
}

impl Default for WipeEffect {
    fn default() -> Self {
        Self {
            color: WHITE,
            direction: WipeDirection::Forward,
            speed: DEFAULT_SPEED,
        }
    }
}

impl WipeEffect {
    /// Number of lit pixels at `elapsed`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lit_count(&self, elapsed: Duration, pixel_count: usize) -> usize {
        if self.is_complete(elapsed, pixel_count) {
            return pixel_count;
        }
        let lit = libm::floorf(as_secs_f32(elapsed) * self.speed);
        if lit <= 0.0 {
            return 0;
        }
        (lit as usize).min(pixel_count)
    }
}

impl Effect for WipeEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        positive("speed", self.speed)
    }

    #[allow(clippy::cast_precision_loss)]
    fn run_time(&self, pixel_count: usize) -> Option<Duration> {
        Some(from_secs_f32(pixel_count as f32 / self.speed))
    }

    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len();
        let lit = self.lit_count(ctx.elapsed, len);
        for (i, (led, source)) in leds.iter_mut().zip(ctx.backdrop).enumerate() {
            let is_lit = match self.direction {
                WipeDirection::Forward => i < lit,
                WipeDirection::Backward => i >= len - lit,
            };
            *led = if is_lit { self.color } else { *source };
        }
    }
}
