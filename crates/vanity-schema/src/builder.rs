//! Schema assembly.

use std::collections::BTreeMap;

use vanity_common::{Clan, CustomizeArray, CustomizeIndex, CustomizeValue, Gender};
use vanity_sheets::{
    FeatureLookup, IconSource, MenuRow, MenuSheet, NameSource, NpcCatalog, PaletteSource,
};

use crate::availability::compute_availability;
use crate::classify::classify;
use crate::features::{decode_features, LEGACY_TATTOO_ICON};
use crate::hair::hair_by_face;
use crate::{npc, CategoryMap, CustomizationSchema, CustomizeOption, ExtractedOptions};
use crate::{PresentationKind, Result, SchemaError};

/// Highest height and body slider value.
pub const MAX_SLIDER_VALUE: u8 = 100;

/// The game-data sources a schema is built from.
#[derive(Clone, Copy)]
pub struct SchemaSources<'a> {
    pub palette: &'a dyn PaletteSource,
    pub menus: &'a MenuSheet,
    pub features: &'a dyn FeatureLookup,
    pub icons: &'a dyn IconSource,
    pub names: &'a dyn NameSource,
    pub npcs: &'a NpcCatalog,
}

/// Builds [`CustomizationSchema`]s from a set of sources.
#[derive(Clone, Copy)]
pub struct SchemaBuilder<'a> {
    sources: SchemaSources<'a>,
}

impl<'a> SchemaBuilder<'a> {
    /// Create a new builder over `sources`.
    pub fn new(sources: SchemaSources<'a>) -> Self {
        Self { sources }
    }

    /// Build the schema of a clan and gender.
    ///
    /// Fails only if the menu sheet has no row for the pair. Blocks on the
    /// NPC catalog if it is still loading.
    pub fn build(&self, clan: Clan, gender: Gender) -> Result<CustomizationSchema> {
        let sources = self.sources;
        let row = sources
            .menus
            .row(clan, gender)
            .ok_or(SchemaError::MissingMenuRow { clan, gender })?;

        let extracted = ExtractedOptions::extract(row, sources.palette, sources.features, sources.icons);
        let face_count = extracted.face_count();

        let kinds = CategoryMap::from_fn(|category| classify(category, row));
        let available = compute_availability(clan, row, &extracted);

        let facial_features = decode_features(face_count, row);
        let hair = hair_by_face(&extracted.hairstyles, face_count, clan, sources.features);

        let names = CategoryMap::from_fn(|category| display_name(category, row, sources.names));
        let display_groups = display_groups(&available, &kinds);
        let options = category_options(extracted, row, &available);

        let mut schema = CustomizationSchema {
            clan,
            gender,
            options,
            available,
            kinds,
            names,
            hair_by_face: hair,
            facial_features,
            npc_exclusive: Vec::new(),
            display_groups,
        };
        schema.npc_exclusive = npc::scan(sources.npcs, &schema);

        tracing::debug!(
            %clan,
            %gender,
            faces = face_count,
            npc_exclusive = schema.npc_exclusive.len(),
            "built customization schema"
        );
        Ok(schema)
    }

    /// Build the schema matching the identity bytes of an appearance.
    pub fn build_for(&self, customize: &CustomizeArray) -> Result<CustomizationSchema> {
        self.build(customize.clan()?, customize.gender()?)
    }
}

/// Final option list of every category.
fn category_options(
    extracted: ExtractedOptions,
    row: &MenuRow,
    available: &CategoryMap<bool>,
) -> CategoryMap<Vec<CustomizeOption>> {
    use CustomizeIndex as C;

    let ExtractedOptions {
        skin_colors,
        hair_colors,
        highlight_colors,
        eye_colors_left,
        eye_colors_right,
        tattoo_colors,
        mut lip_colors_dark,
        lip_colors_light,
        mut face_paint_colors_dark,
        face_paint_colors_light,
        faces,
        hairstyles,
        face_paints,
        tail_shapes,
    } = extracted;
    lip_colors_dark.extend(lip_colors_light);
    face_paint_colors_dark.extend(face_paint_colors_light);

    let mut options = CategoryMap::from_fn(|category| derived_options(category, row, available[category]));
    options[C::SkinColor] = skin_colors;
    options[C::HairColor] = hair_colors;
    options[C::HighlightsColor] = highlight_colors;
    options[C::EyeColorLeft] = eye_colors_left;
    options[C::EyeColorRight] = eye_colors_right;
    options[C::TattooColor] = tattoo_colors;
    options[C::LipColor] = lip_colors_dark;
    options[C::FacePaintColor] = face_paint_colors_dark;
    options[C::Face] = faces;
    options[C::Hairstyle] = hairstyles;
    options[C::FacePaint] = face_paints;
    options[C::TailShape] = tail_shapes;
    options
}

/// Options of categories not backed by palette or feature data.
fn derived_options(category: CustomizeIndex, row: &MenuRow, available: bool) -> Vec<CustomizeOption> {
    use CustomizeIndex as C;

    match category {
        C::Height => (0..=MAX_SLIDER_VALUE).map(|v| CustomizeOption::plain(category, v)).collect(),
        C::MuscleMass | C::BustSize if available => {
            (0..=MAX_SLIDER_VALUE).map(|v| CustomizeOption::plain(category, v)).collect()
        }
        C::Eyebrows | C::EyeShape | C::Nose | C::Jaw | C::Mouth => (0..row.menu_size(category))
            .map(|v| CustomizeOption::plain(category, v))
            .collect(),
        C::LegacyTattoo => vec![
            CustomizeOption::new(category, CustomizeValue::ZERO, LEGACY_TATTOO_ICON, None),
            CustomizeOption::new(category, CustomizeValue::MAX, LEGACY_TATTOO_ICON, None),
        ],
        _ if category.is_flag() => vec![
            CustomizeOption::new(category, CustomizeValue::ZERO, 0, None),
            CustomizeOption::new(category, CustomizeValue::MAX, 0, None),
        ],
        _ => Vec::new(),
    }
}

/// Display name of a category.
///
/// Toggles and eye colors always use their default names; other categories
/// take the localized name of their sub-menu when the row has one.
pub fn display_name(category: CustomizeIndex, row: &MenuRow, names: &dyn NameSource) -> String {
    use CustomizeIndex as C;

    let fixed = category.facial_feature_slot().is_some()
        || matches!(
            category,
            C::Highlights | C::SmallIris | C::Lipstick | C::FacePaintReversed | C::EyeColorLeft | C::EyeColorRight
        );
    if fixed {
        return category.default_name().to_owned();
    }

    row.menu(category)
        .and_then(|menu| names.menu_name(menu.menu_id))
        .unwrap_or(category.default_name())
        .to_owned()
}

/// Categories in the order they are presented.
///
/// Ordinal order, except that tattoo color moves before the eye colors and
/// the left eye precedes the right one.
pub fn display_order() -> [CustomizeIndex; CustomizeIndex::COUNT] {
    let mut order = CustomizeIndex::all();
    order[CustomizeIndex::TattooColor.ordinal()] = CustomizeIndex::EyeColorLeft;
    order[CustomizeIndex::EyeColorLeft.ordinal()] = CustomizeIndex::EyeColorRight;
    order[CustomizeIndex::EyeColorRight.ordinal()] = CustomizeIndex::TattooColor;
    order
}

/// Group available categories by kind, in display order.
///
/// Race and gender are never grouped. Every kind gets an entry.
pub fn display_groups(
    available: &CategoryMap<bool>,
    kinds: &CategoryMap<PresentationKind>,
) -> BTreeMap<PresentationKind, Vec<CustomizeIndex>> {
    let mut groups: BTreeMap<_, _> = PresentationKind::all().into_iter().map(|k| (k, Vec::new())).collect();
    for category in display_order().into_iter().skip(2) {
        if available[category] {
            groups.entry(kinds[category]).or_default().push(category);
        }
    }
    groups
}
