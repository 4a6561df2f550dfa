//! 16-entry color palettes with linear blending between entries

use crate::color::{Rgb, blend_colors, rgb_from_u32, scale_color};

/// Sixteen evenly spaced colors around a 0-255 index circle
pub type Palette16 = [Rgb; 16];

/// Warm purple, red and yellow party palette (`FastLED`'s `PartyColors_p`)
pub const PARTY_COLORS: Palette16 = [
    rgb_from_u32(0x5500AB),
    rgb_from_u32(0x84007C),
    rgb_from_u32(0xB5004B),
    rgb_from_u32(0xE5001B),
    rgb_from_u32(0xE81700),
    rgb_from_u32(0xB84700),
    rgb_from_u32(0xAB7700),
    rgb_from_u32(0xABAB00),
    rgb_from_u32(0xAB5500),
    rgb_from_u32(0xDD2200),
    rgb_from_u32(0xF2000E),
    rgb_from_u32(0xC2003E),
    rgb_from_u32(0x8F0071),
    rgb_from_u32(0x5F00A1),
    rgb_from_u32(0x2F00D0),
    rgb_from_u32(0x0007F9),
];

/// Look up `index` in the palette and scale it by `brightness`
///
/// The high nibble selects the entry, the low nibble blends towards the
/// next one, wrapping from the last entry back to the first.
pub fn color_from_palette(palette: &Palette16, index: u8, brightness: u8) -> Rgb {
    let entry = usize::from(index >> 4);
    let offset = index & 0x0F;

    let mut color = palette[entry];
    if offset != 0 {
        let next = palette[(entry + 1) % palette.len()];
        color = blend_colors(color, next, offset << 4);
    }

    if brightness == 255 {
        return color;
    }
    scale_color(color, brightness)
}
