//! Solid color fill
//!
//! Backs the `on` and `color` kinds. Persists until stopped.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use super::{Effect, RenderContext};
use crate::color::{Rgb, WHITE};

/// Fills all LEDs of the section with one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidEffect {
    pub color: Rgb,
}

impl SolidEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Default for SolidEffect {
    fn default() -> Self {
        Self::new(WHITE)
    }
}

impl Effect for SolidEffect {
    fn run_time(&self, _pixel_count: usize) -> Option<Duration> {
        None
    }

    fn render(&self, _ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        leds.fill(self.color);
    }
}
