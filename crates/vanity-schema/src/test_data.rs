//! In-memory sheets shared by the unit tests.

use vanity_common::{Clan, CustomizeArray, CustomizeIndex, CustomizeValue, Gender};
use vanity_sheets::{
    CustomizeFeature, FeatureTable, IconSet, MenuRow, MenuSheet, NameTable, NpcAppearance,
    NpcCatalog, PaletteSource, RawColor, SubMenu,
};

use crate::SchemaSources;

/// Pairs with a menu row.
pub(crate) const PAIRS: [(Clan, Gender); 2] = [(Clan::Midlander, Gender::Male), (Clan::Hellion, Gender::Male)];

/// Face icons of the Midlander row.
pub(crate) const FACE_ICONS: [u32; 4] = [1101, 1102, 1103, 1104];

/// Hairstyle entry the feature sheet does not know.
pub(crate) const UNKNOWN_HAIRSTYLE: u32 = 299;

/// Palette whose color at `i` is `0xFF000000 | i`.
pub(crate) struct GradientPalette;

impl PaletteSource for GradientPalette {
    fn color(&self, index: u32) -> RawColor {
        RawColor(0xFF00_0000 | index)
    }
}

pub(crate) struct TestSheets {
    pub palette: GradientPalette,
    pub menus: MenuSheet,
    pub features: FeatureTable,
    pub icons: IconSet,
    pub names: NameTable,
    pub npcs: NpcCatalog,
}

impl TestSheets {
    pub fn sources(&self) -> SchemaSources<'_> {
        SchemaSources {
            palette: &self.palette,
            menus: &self.menus,
            features: &self.features,
            icons: &self.icons,
            names: &self.names,
            npcs: &self.npcs,
        }
    }
}

fn body_menus(row: MenuRow) -> MenuRow {
    row.with_menu(SubMenu::sized(21, CustomizeIndex::Eyebrows, 1, 3))
        .with_menu(SubMenu::sized(23, CustomizeIndex::EyeShape, 1, 3))
        .with_menu(SubMenu::sized(25, CustomizeIndex::Nose, 1, 4))
        .with_menu(SubMenu::sized(26, CustomizeIndex::Jaw, 1, 3))
        .with_menu(SubMenu::sized(27, CustomizeIndex::Mouth, 1, 3))
        .with_menu(SubMenu::sized(8, CustomizeIndex::SkinColor, 2, 192))
        .with_menu(SubMenu::sized(10, CustomizeIndex::HairColor, 2, 192))
        .with_menu(SubMenu::sized(20, CustomizeIndex::TattooColor, 2, 192))
        .with_menu(SubMenu::sized(7, CustomizeIndex::Highlights, 6, 2))
}

fn midlander_row() -> MenuRow {
    let mut row = body_menus(MenuRow::new(Clan::Midlander, Gender::Male))
        .with_menu(SubMenu::new(5, CustomizeIndex::Face, 1, vec![101, 102, 103, 104]))
        .with_menu(SubMenu::sized(29, CustomizeIndex::LipColor, 3, 96))
        .with_menu(SubMenu::sized(30, CustomizeIndex::MuscleMass, 5, 101));
    // 203 resolves but its icon is missing.
    row.set_hairstyles(&[201, 202, UNKNOWN_HAIRSTYLE, 203]);
    for face in 1..=4u32 {
        let base = face * 100;
        row.set_facial_feature_icons(face as usize, std::array::from_fn(|i| base + i as u32));
    }
    row
}

fn hellion_row() -> MenuRow {
    let mut row = body_menus(MenuRow::new(Clan::Hellion, Gender::Male))
        .with_menu(SubMenu::new(5, CustomizeIndex::Face, 1, vec![111, 112, 113, 114]))
        .with_menu(SubMenu::new(29, CustomizeIndex::LipColor, 1, vec![401, 402]))
        .with_menu(SubMenu::new(31, CustomizeIndex::TailShape, 1, vec![501, 502, 503]));
    row.set_hairstyles(&[211, 212, 213, 214]);
    row.set_face_paints(&[301]);
    row
}

fn features() -> FeatureTable {
    let mut features = Vec::new();
    for (n, row_id) in (101..=104).enumerate() {
        features.push(CustomizeFeature::new(row_id, n as u8 + 1, FACE_ICONS[n]));
    }
    for (n, row_id) in (111..=114).enumerate() {
        features.push(CustomizeFeature::new(row_id, n as u8 + 1, 1111 + n as u32));
    }
    features.extend([
        CustomizeFeature::new(201, 1, 2201),
        CustomizeFeature::new(202, 2, 2202),
        CustomizeFeature::new(203, 4, 2203),
        // Hellion hairstyles; tags are face + 4.
        CustomizeFeature::new(211, 1, 2211),
        CustomizeFeature::new(212, 2, 2212).with_face_tag(5),
        CustomizeFeature::new(213, 3, 2213).with_face_tag(6),
        CustomizeFeature::new(214, 4, 2214),
        CustomizeFeature::new(301, 1, 3301),
        CustomizeFeature::new(401, 1, 4401),
        CustomizeFeature::new(402, 2, 4402),
        CustomizeFeature::new(501, 1, 5501),
        CustomizeFeature::new(502, 2, 5502),
        CustomizeFeature::new(503, 3, 5503),
    ]);
    features.into_iter().collect()
}

fn icons() -> IconSet {
    FACE_ICONS
        .into_iter()
        .chain([2201, 2202, 2211, 2212, 2213, 2214, 3301])
        .collect()
}

pub(crate) fn npc(id: u32, clan: Clan, gender: Gender, body_type: u8, values: &[(CustomizeIndex, u8)]) -> NpcAppearance {
    let mut customize = CustomizeArray::default();
    customize.set(CustomizeIndex::Clan, CustomizeValue(clan.id()));
    customize.set(CustomizeIndex::Gender, CustomizeValue(gender.id()));
    customize.set(CustomizeIndex::BodyType, CustomizeValue(body_type));
    for &(category, value) in values {
        customize.set(category, CustomizeValue(value));
    }
    NpcAppearance::new(id, customize)
}

pub(crate) fn npcs() -> Vec<NpcAppearance> {
    use CustomizeIndex as C;
    vec![
        npc(
            1,
            Clan::Midlander,
            Gender::Male,
            1,
            &[(C::Face, 2), (C::Hairstyle, 9), (C::SkinColor, 5), (C::LipColor, 100)],
        ),
        // Wrong body type and wrong gender; never scanned for Midlander males.
        npc(2, Clan::Midlander, Gender::Male, 3, &[(C::Face, 1), (C::Hairstyle, 50)]),
        npc(3, Clan::Midlander, Gender::Female, 1, &[(C::Face, 1), (C::Hairstyle, 60)]),
        // Hairstyle 2 is tagged for face 1 only.
        npc(4, Clan::Hellion, Gender::Male, 1, &[(C::Face, 3), (C::Hairstyle, 2), (C::TailShape, 7)]),
        npc(5, Clan::Hellion, Gender::Male, 1, &[(C::Face, 1), (C::Hairstyle, 2), (C::LipColor, 1)]),
    ]
}

pub(crate) fn sheets() -> TestSheets {
    TestSheets {
        palette: GradientPalette,
        menus: MenuSheet::from_rows([midlander_row(), hellion_row()]).unwrap(),
        features: features(),
        icons: icons(),
        names: [(25u32, "Nose Type")].into_iter().collect(),
        npcs: NpcCatalog::from_entries(npcs()),
    }
}
