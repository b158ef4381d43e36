//! Rainbow cycling effect
//!
//! One full turn of the hue wheel is spread across the section and scrolls
//! with time.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, finite};
use crate::color::{Rgb, fill_hue_sweep};
use crate::error::ParameterError;
use crate::math8::from_secs_f32;

/// Time for the pattern to scroll through the whole hue wheel
const CYCLE_MS: u64 = 5_000;
const DEFAULT_DURATION_SECS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainbowEffect {
    /// Run time in seconds, `None` cycles until stopped
    pub duration: Option<f32>,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            duration: Some(DEFAULT_DURATION_SECS),
        }
    }
}

impl RainbowEffect {
    /// Rainbow that keeps cycling until stopped
    pub const fn endless() -> Self {
        Self { duration: None }
    }

    /// Hue of the first pixel at `elapsed`
    #[allow(clippy::cast_possible_truncation)]
    pub fn base_hue(elapsed: Duration) -> u8 {
        let progress_ms = elapsed.as_millis() % CYCLE_MS;
        ((progress_ms * 256) / CYCLE_MS) as u8
    }
}

impl Effect for RainbowEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        match self.duration {
            Some(duration) => finite("duration", duration),
            None => Ok(()),
        }
    }

    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        self.duration.map(from_secs_f32)
    }

    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        fill_hue_sweep(leds, Self::base_hue(ctx.elapsed), 255, 255);
    }
}
