//! Flicker effect
//!
//! Per-pixel brightness drops randomly below nominal by up to `intensity`.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, finite, unit};
use crate::color::{Rgb, WHITE, scale_color_f32};
use crate::error::ParameterError;
use crate::math8::{from_secs_f32, hash_unit};

const DEFAULT_INTENSITY: f32 = 0.5;
const DEFAULT_DURATION_SECS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlickerEffect {
    pub color: Rgb,
    /// Jitter magnitude (0.0-1.0)
    pub intensity: f32,
    /// Run time in seconds
    pub duration: f32,
}

impl Default for FlickerEffect {
    fn default() -> Self {
        Self {
            color: WHITE,
            intensity: DEFAULT_INTENSITY,
            duration: DEFAULT_DURATION_SECS,
        }
    }
}

impl Effect for FlickerEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        unit("intensity", self.intensity)?;
        finite("duration", self.duration)
    }

    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        Some(from_secs_f32(self.duration))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let frame = ctx.elapsed.as_millis();
        for (i, led) in leds.iter_mut().enumerate() {
            let jitter = hash_unit(ctx.seed, frame, i as u32);
            *led = scale_color_f32(self.color, 1.0 - self.intensity * jitter);
        }
    }
}
