//! Palette slices for color categories.
//!
//! Each color category shows a contiguous window of the shared palette.
//! Skin and hair windows depend on clan and gender; the rest are shared.
//! Lip and face paint colors come in a dark and a light window, the light one
//! selected with values starting at [`LIGHT_VALUE_BASE`].

use vanity_common::{Clan, CustomizeIndex, CustomizeValue, Gender};
use vanity_sheets::PaletteSource;

use crate::CustomizeOption;

/// First selector value of a light palette window.
///
/// Light windows therefore hold at most 128 swatches.
pub const LIGHT_VALUE_BASE: u8 = 128;

/// Swatch count of skin, hair, highlight, eye and tattoo windows.
pub const LARGE_SWATCH_COUNT: u32 = 192;

/// Swatch count of lip and face paint windows.
pub const SMALL_SWATCH_COUNT: u32 = 96;

pub const HIGHLIGHT_OFFSET: u32 = 256;
pub const EYE_OFFSET: u32 = 0;
pub const TATTOO_OFFSET: u32 = 0;
pub const LIP_DARK_OFFSET: u32 = 512;
pub const LIP_LIGHT_OFFSET: u32 = 1024;
pub const FACE_PAINT_DARK_OFFSET: u32 = 640;
pub const FACE_PAINT_LIGHT_OFFSET: u32 = 1152;

/// Offsets of the skin and hair windows of a clan and gender.
///
/// Every (clan, gender) owns five 256-color blocks starting at block 3; skin
/// is the first of them and hair the second.
pub const fn skin_and_hair_offsets(clan: Clan, gender: Gender) -> (u32, u32) {
    let block = (clan.id() as u32 * 2 + gender.id() as u32) * 5 + 3;
    (block << 8, (block + 1) << 8)
}

/// Build the options of one palette window.
///
/// Produces `count` options with values `0..count` (or starting at
/// [`LIGHT_VALUE_BASE`] when `light`), each showing the color at
/// `base_offset + n` and keyed by that palette index. Palette ranges are the
/// caller's responsibility; `count` is capped so values stay within a byte.
pub fn slice<P>(
    palette: &P,
    category: CustomizeIndex,
    base_offset: u32,
    count: u32,
    light: bool,
) -> Vec<CustomizeOption>
where
    P: PaletteSource + ?Sized,
{
    let first_value = if light { LIGHT_VALUE_BASE } else { 0 };
    let count = count.min(256 - u32::from(first_value));
    (0..count)
        .map(|n| {
            let index = base_offset + n;
            CustomizeOption::new(
                category,
                CustomizeValue(first_value + n as u8),
                palette.color(index).value(),
                Some(index),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanity_sheets::{Palette, RawColor};

    #[test]
    fn test_hair_color_slice() {
        let palette = Palette::new((0..2048).map(|i| RawColor(0xFF00_0000 | i)).collect());
        let options = slice(&palette, CustomizeIndex::HairColor, 872, 192, false);

        assert_eq!(options.len(), 192);
        for (n, option) in options.iter().enumerate() {
            assert_eq!(option.category, CustomizeIndex::HairColor);
            assert_eq!(option.value, CustomizeValue(n as u8));
            assert_eq!(option.key, Some(872 + n as u32));
            assert_eq!(option.icon, 0xFF00_0000 | (872 + n as u32));
        }
    }

    #[test]
    fn test_light_slice_values() {
        let palette = Palette::new(Vec::new());
        let options = slice(&palette, CustomizeIndex::LipColor, LIP_LIGHT_OFFSET, 96, true);

        assert_eq!(options.first().map(|o| o.value), Some(CustomizeValue(128)));
        assert_eq!(options.last().map(|o| o.value), Some(CustomizeValue(223)));
        // Out-of-range reads fall back to the palette's default color.
        assert!(options.iter().all(|o| o.icon == RawColor::TRANSPARENT.value()));
    }

    #[test]
    fn test_oversized_slice_is_capped() {
        let palette = Palette::new(Vec::new());

        let dark = slice(&palette, CustomizeIndex::SkinColor, 0, 300, false);
        assert_eq!(dark.len(), 256);
        assert_eq!(dark.last().map(|o| o.value), Some(CustomizeValue::MAX));

        let light = slice(&palette, CustomizeIndex::FacePaintColor, FACE_PAINT_LIGHT_OFFSET, 200, true);
        assert_eq!(light.len(), 128);
        assert_eq!(light.first().map(|o| o.value), Some(CustomizeValue(128)));
        assert_eq!(light.last().map(|o| o.value), Some(CustomizeValue::MAX));
        assert!(light.windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn test_skin_and_hair_offsets() {
        assert_eq!(skin_and_hair_offsets(Clan::Midlander, Gender::Male), (13 << 8, 14 << 8));
        assert_eq!(skin_and_hair_offsets(Clan::Midlander, Gender::Female), (18 << 8, 19 << 8));
    }
}
