pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::Rgb,
    math8::{blend8, scale8, unit8},
};

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel by `scale` (0 = black, 255 = unchanged)
#[inline]
pub fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Scale every channel by a unit factor, clamped to `0.0..=1.0`
#[inline]
pub fn scale_color_f32(color: Rgb, factor: f32) -> Rgb {
    scale_color(color, unit8(factor))
}
