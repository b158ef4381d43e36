//! Whole-strip pixel buffer

use crate::bounds::{SectionRange, bounded};
use crate::color::{BLACK, Rgb};

/// Frame of the whole physical strip
///
/// `MAX_LEDS` is the storage capacity; the active length is fixed at
/// construction from the hardware configuration.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    pixels: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a dark buffer of `len` pixels, clamped to `MAX_LEDS`
    pub const fn new(len: usize) -> Self {
        let len = if len > MAX_LEDS { MAX_LEDS } else { len };
        Self {
            pixels: [BLACK; MAX_LEDS],
            len,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Range covering the whole strip
    pub const fn full_range(&self) -> SectionRange {
        SectionRange::new(0, self.len)
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }

    /// Mutable view of one section
    pub fn section_mut(&mut self, range: SectionRange) -> &mut [Rgb] {
        bounded(self.as_mut_slice(), range)
    }

    pub fn fill(&mut self, color: Rgb) {
        self.as_mut_slice().fill(color);
    }
}
