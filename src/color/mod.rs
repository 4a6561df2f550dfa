mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use palette::{PARTY_COLORS, Palette16, color_from_palette};
pub use utils::{
    add_colors, add_hsv, blend_colors, fade_to_black_by, hsv2rgb, rgb_from_u32, scale_color,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;
