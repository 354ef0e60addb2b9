//! Option extraction from menu rows.
//!
//! Menu rows list cosmetic options as raw feature sheet ids. Extraction
//! resolves each id to its feature and icon, and synthesizes an identity for
//! ids the feature sheet does not know yet.

use vanity_common::{Clan, CustomizeIndex, CustomizeValue, Gender};
use vanity_sheets::{
    FeatureLookup, IconSource, MenuRow, PaletteSource, SlotTable, FACE_PAINT_SLOTS,
    HAIRSTYLE_SLOTS,
};

use crate::option::sort_and_dedup;
use crate::palette::{self, slice};
use crate::CustomizeOption;

/// Whether entries of `category` are dropped when their icon is missing.
pub const fn gates_on_icon(category: CustomizeIndex) -> bool {
    matches!(category, CustomizeIndex::Hairstyle | CustomizeIndex::FacePaint)
}

/// Hair make slot table holding `category`, if it has one.
pub const fn slot_table(category: CustomizeIndex) -> Option<SlotTable> {
    match category {
        CustomizeIndex::Hairstyle => Some(HAIRSTYLE_SLOTS),
        CustomizeIndex::FacePaint => Some(FACE_PAINT_SLOTS),
        _ => None,
    }
}

/// Extract the options of the sub-menu editing `category`.
///
/// Returns an empty list if the row has no such sub-menu.
pub fn extract(
    row: &MenuRow,
    category: CustomizeIndex,
    features: &dyn FeatureLookup,
    icons: &dyn IconSource,
) -> Vec<CustomizeOption> {
    match row.menu(category) {
        Some(menu) => resolve(
            category,
            menu.values().iter().enumerate().map(|(i, &raw)| (i + 1, raw)),
            features,
            icons,
        ),
        None => Vec::new(),
    }
}

/// Extract the options of a fixed-stride slot table in the row's hair make block.
pub fn extract_slots(
    row: &MenuRow,
    category: CustomizeIndex,
    table: SlotTable,
    features: &dyn FeatureLookup,
    icons: &dyn IconSource,
) -> Vec<CustomizeOption> {
    resolve(category, table.entries(row.hair_make()), features, icons)
}

fn resolve(
    category: CustomizeIndex,
    entries: impl Iterator<Item = (usize, u32)>,
    features: &dyn FeatureLookup,
    icons: &dyn IconSource,
) -> Vec<CustomizeOption> {
    let mut options = Vec::new();
    for (position, raw) in entries {
        match features.feature(raw) {
            Some(feature) => {
                if gates_on_icon(category) && !icons.icon_exists(feature.icon) {
                    tracing::trace!(%category, raw, icon = feature.icon, "dropping option without icon");
                    continue;
                }
                options.push(CustomizeOption::new(
                    category,
                    CustomizeValue(feature.feature_id),
                    feature.icon,
                    Some(feature.row_id),
                ));
            }
            None => {
                tracing::trace!(%category, raw, position, "synthesizing option for unknown feature");
                options.push(CustomizeOption::new(
                    category,
                    CustomizeValue(position as u8),
                    0,
                    Some(raw),
                ));
            }
        }
    }
    sort_and_dedup(&mut options);
    options
}

/// Every option list a schema derives from palette and feature data.
///
/// Extraction runs first; classification, availability, hair filtering and
/// the final option lists all read from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedOptions {
    pub skin_colors: Vec<CustomizeOption>,
    pub hair_colors: Vec<CustomizeOption>,
    pub highlight_colors: Vec<CustomizeOption>,
    pub eye_colors_left: Vec<CustomizeOption>,
    pub eye_colors_right: Vec<CustomizeOption>,
    pub tattoo_colors: Vec<CustomizeOption>,
    /// Dark lip colors, or fur patterns for furred clans.
    pub lip_colors_dark: Vec<CustomizeOption>,
    /// Light lip colors; empty for furred clans.
    pub lip_colors_light: Vec<CustomizeOption>,
    pub face_paint_colors_dark: Vec<CustomizeOption>,
    pub face_paint_colors_light: Vec<CustomizeOption>,
    pub faces: Vec<CustomizeOption>,
    /// Hairstyles before face filtering.
    pub hairstyles: Vec<CustomizeOption>,
    pub face_paints: Vec<CustomizeOption>,
    /// Tails, or ears for clans without tails.
    pub tail_shapes: Vec<CustomizeOption>,
}

impl ExtractedOptions {
    /// Extract every list for the row's clan and gender.
    pub fn extract(
        row: &MenuRow,
        palette: &dyn PaletteSource,
        features: &dyn FeatureLookup,
        icons: &dyn IconSource,
    ) -> Self {
        let clan: Clan = row.clan();
        let gender: Gender = row.gender();
        let (skin_offset, hair_offset) = palette::skin_and_hair_offsets(clan, gender);
        let large = palette::LARGE_SWATCH_COUNT;
        let small = palette::SMALL_SWATCH_COUNT;

        let (lip_colors_dark, lip_colors_light) = if clan.is_furred() {
            (extract(row, CustomizeIndex::LipColor, features, icons), Vec::new())
        } else {
            (
                slice(palette, CustomizeIndex::LipColor, palette::LIP_DARK_OFFSET, small, false),
                slice(palette, CustomizeIndex::LipColor, palette::LIP_LIGHT_OFFSET, small, true),
            )
        };

        Self {
            skin_colors: slice(palette, CustomizeIndex::SkinColor, skin_offset, large, false),
            hair_colors: slice(palette, CustomizeIndex::HairColor, hair_offset, large, false),
            highlight_colors: slice(
                palette,
                CustomizeIndex::HighlightsColor,
                palette::HIGHLIGHT_OFFSET,
                large,
                false,
            ),
            eye_colors_left: slice(palette, CustomizeIndex::EyeColorLeft, palette::EYE_OFFSET, large, false),
            eye_colors_right: slice(palette, CustomizeIndex::EyeColorRight, palette::EYE_OFFSET, large, false),
            tattoo_colors: slice(palette, CustomizeIndex::TattooColor, palette::TATTOO_OFFSET, large, false),
            lip_colors_dark,
            lip_colors_light,
            face_paint_colors_dark: slice(
                palette,
                CustomizeIndex::FacePaintColor,
                palette::FACE_PAINT_DARK_OFFSET,
                small,
                false,
            ),
            face_paint_colors_light: slice(
                palette,
                CustomizeIndex::FacePaintColor,
                palette::FACE_PAINT_LIGHT_OFFSET,
                small,
                true,
            ),
            faces: extract(row, CustomizeIndex::Face, features, icons),
            hairstyles: extract_slots(row, CustomizeIndex::Hairstyle, HAIRSTYLE_SLOTS, features, icons),
            face_paints: extract_slots(row, CustomizeIndex::FacePaint, FACE_PAINT_SLOTS, features, icons),
            tail_shapes: extract(row, CustomizeIndex::TailShape, features, icons),
        }
    }

    /// Number of faces; hair and facial feature tables have one more entry.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
