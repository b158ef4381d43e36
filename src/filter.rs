//! Output filters
//!
//! Filters post-process the outgoing frame only. The pixel buffer keeps the
//! unscaled colors so effects reading the pre-effect pixels see true values.

use crate::color::Rgb;
use crate::math8::scale8;

pub(crate) trait Filter {
    /// Apply the filter to an outgoing frame
    fn apply(&self, frame: &mut [Rgb]);
}

/// Global strip brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Check whether the filter leaves colors untouched
    pub const fn is_identity(&self) -> bool {
        self.brightness == u8::MAX
    }
}

impl Default for BrightnessFilter {
    fn default() -> Self {
        Self::new(u8::MAX)
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        if self.is_identity() {
            return;
        }
        for pixel in frame {
            pixel.r = scale8(pixel.r, self.brightness);
            pixel.g = scale8(pixel.g, self.brightness);
            pixel.b = scale8(pixel.b, self.brightness);
        }
    }
}
