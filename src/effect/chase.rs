//! Chase effect
//!
//! Single lit pixels separated by `spacing` dark pixels travel along the
//! section. One traversal moves the pattern by the section length.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext, positive};
use crate::color::{BLACK, Rgb, WHITE};
use crate::error::ParameterError;
use crate::math8::{as_secs_f32, from_secs_f32};

const DEFAULT_SPACING: usize = 3;
const DEFAULT_SPEED: f32 = 10.0;
const DEFAULT_COUNT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseEffect {
    pub color: Rgb,
    /// Dark pixels between two lit ones
    pub spacing: usize,
    /// Pixels per second
    pub speed: f32,
    /// Number of full traversals
    pub count: u32,
}

impl Default for ChaseEffect {
    fn default() -> Self {
        Self {
            color: WHITE,
            spacing: DEFAULT_SPACING,
            speed: DEFAULT_SPEED,
            count: DEFAULT_COUNT,
        }
    }
}

impl ChaseEffect {
    /// Distance in pixels the pattern has moved at `elapsed`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset(&self, elapsed: Duration) -> usize {
        let moved = libm::floorf(as_secs_f32(elapsed) * self.speed);
        if moved <= 0.0 { 0 } else { moved as usize }
    }

    /// Check if the pixel at `index` is lit at `offset`
    pub const fn is_lit(&self, index: usize, offset: usize) -> bool {
        let period = self.spacing.saturating_add(1);
        index % period == offset % period
    }
}

impl Effect for ChaseEffect {
    fn validate(&self) -> Result<(), ParameterError> {
        positive("speed", self.speed)
    }

    #[allow(clippy::cast_precision_loss)]
    fn run_time(&self, pixel_count: usize) -> Option<Duration> {
        let distance = pixel_count as f32 * self.count as f32;
        Some(from_secs_f32(distance / self.speed))
    }

    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let offset = self.offset(ctx.elapsed);
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if self.is_lit(i, offset) {
                self.color
            } else {
                BLACK
            };
        }
    }
}
