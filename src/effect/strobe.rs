//! Strobe effect: square wave on/off at `frequency` Hz

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, finite, positive};
use crate::color::{BLACK, Rgb, WHITE};
use crate::error::ParameterError;
use crate::math8::{as_secs_f32, from_secs_f32};

const DEFAULT_FREQUENCY_HZ: f32 = 10.0;
const DEFAULT_DURATION_SECS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrobeEffect {
    pub color: Rgb,
    /// Flashes per second
    pub frequency: f32,
    /// Run time in seconds
    pub duration: f32,
}

impl Default for StrobeEffect {
    fn default() -> Self {
        Self {
            color: WHITE,
            frequency: DEFAULT_FREQUENCY_HZ,
            duration: DEFAULT_DURATION_SECS,
        }
    }
}

impl StrobeEffect {
    /// Check if the strobe is in its lit half-period at `elapsed`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn is_on(&self, elapsed: Duration) -> bool {
        let half_periods = libm::floorf(as_secs_f32(elapsed) * self.frequency * 2.0);
        (half_periods as u64) % 2 == 0
    }
}

impl Effect for StrobeEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        positive("frequency", self.frequency)?;
        finite("duration", self.duration)
    }

    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        Some(from_secs_f32(self.duration))
    }

    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        leds.fill(if self.is_on(ctx.elapsed) {
            self.color
        } else {
            BLACK
        });
    }
}
