use crate::Rgb;

/// Contiguous pixel range owned by a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionRange {
    pub start: usize,
    pub count: usize,
}

impl SectionRange {
    pub const fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Index one past the last pixel of the range
    pub const fn end(self) -> usize {
        self.start + self.count
    }

    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// Check whether two ranges share at least one pixel
    pub const fn overlaps(self, other: Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Get a slice of the LEDs within the range
///
/// The range is clipped to the slice so a stale range can never write past
/// the end of the frame.
pub(crate) fn bounded(leds: &mut [Rgb], range: SectionRange) -> &mut [Rgb] {
    let end = range.end().min(leds.len());
    let start = range.start.min(end);
    &mut leds[start..end]
}
