//! Sparkle effect
//!
//! Every frame a random subset of pixels lights up, the rest stay dark.
//! The subset is derived from the instance seed and the frame time, so a
//! frame re-rendered at the same time is identical.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, finite, unit};
use crate::color::{BLACK, Rgb, WHITE};
use crate::error::ParameterError;
use crate::math8::{from_secs_f32, hash_unit};

const DEFAULT_DENSITY: f32 = 0.05;
const DEFAULT_DURATION_SECS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkleEffect {
    pub color: Rgb,
    /// Expected fraction of lit pixels per frame
    pub density: f32,
    /// Run time in seconds
    pub duration: f32,
}

impl Default for SparkleEffect {
    fn default() -> Self {
        Self {
            color: WHITE,
            density: DEFAULT_DENSITY,
            duration: DEFAULT_DURATION_SECS,
        }
    }
}

impl Effect for SparkleEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        unit("density", self.density)?;
        finite("duration", self.duration)
    }

    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        Some(from_secs_f32(self.duration))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let frame = ctx.elapsed.as_millis();
        for (i, led) in leds.iter_mut().enumerate() {
            let roll = hash_unit(ctx.seed, frame, i as u32);
            *led = if roll < self.density {
                self.color
            } else {
                BLACK
            };
        }
    }
}
