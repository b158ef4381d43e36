use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Fill the whole slice with one turn of the hue wheel starting at `base_hue`
///
/// Hue advances in 8.24 fixed point (as `FastLED` gradients do) by a full
/// turn divided by the slice length, so the last pixel lands one step before
/// `base_hue` and consecutive frames scroll without a visible seam.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_hue_sweep(leds: &mut [Rgb], base_hue: u8, sat: u8, val: u8) {
    if leds.is_empty() {
        return;
    }

    let len = u64::try_from(leds.len()).unwrap_or(u64::MAX);
    let step824 = (1u64 << 32) / len;
    let mut hue824 = u64::from(base_hue) << 24;
    for led in leds.iter_mut() {
        *led = hsv2rgb(Hsv {
            hue: (hue824 >> 24) as u8,
            sat,
            val,
        });
        hue824 = hue824.wrapping_add(step824);
    }
}
