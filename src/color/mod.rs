mod gradient;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use gradient::fill_hue_sweep;
pub use utils::{BLACK, WHITE, blend_colors, hsv2rgb, scale_color, scale_color_f32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
