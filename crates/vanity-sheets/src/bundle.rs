//! JSON dumps of all sheets.
//!
//! A [`SheetBundle`] is a plain, human-editable snapshot of every input the
//! schema builder reads. Tools export one from the running game and load it
//! offline with [`SheetBundle::load`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use vanity_common::{Clan, Gender};

use crate::{
    CustomizeFeature, FeatureTable, IconSet, MenuRow, MenuSheet, NameTable, NpcAppearance,
    Palette, RawColor, Result, SubMenu, FEATURES_PER_FACE,
};

/// One menu row in dump form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRowRecord {
    pub clan: Clan,
    pub gender: Gender,
    #[serde(default)]
    pub menus: Vec<SubMenu>,
    /// Facial feature icons, one entry per face starting at face 1.
    #[serde(default)]
    pub facial_features: Vec<[u32; FEATURES_PER_FACE]>,
    /// Raw hairstyle slots in slot order.
    #[serde(default)]
    pub hairstyles: Vec<u32>,
    /// Raw face paint slots in slot order.
    #[serde(default)]
    pub face_paints: Vec<u32>,
}

impl MenuRowRecord {
    /// Convert into a menu row.
    pub fn into_row(self) -> MenuRow {
        let mut row = MenuRow::new(self.clan, self.gender);
        for menu in self.menus {
            row.push_menu(menu);
        }
        for (i, icons) in self.facial_features.into_iter().enumerate() {
            row.set_facial_feature_icons(i + 1, icons);
        }
        row.set_hairstyles(&self.hairstyles);
        row.set_face_paints(&self.face_paints);
        row
    }
}

/// A snapshot of every sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetBundle {
    /// Packed RGBA palette colors.
    #[serde(default)]
    pub palette: Vec<u32>,
    #[serde(default)]
    pub menus: Vec<MenuRowRecord>,
    #[serde(default)]
    pub features: Vec<CustomizeFeature>,
    /// Ids of icons that exist.
    #[serde(default)]
    pub icons: Vec<u32>,
    /// Menu titles by menu id.
    #[serde(default)]
    pub names: BTreeMap<u32, String>,
    #[serde(default)]
    pub npcs: Vec<NpcAppearance>,
}

/// The sheets of a bundle, ready to use.
#[derive(Debug, Clone)]
pub struct Sheets {
    pub palette: Palette,
    pub menus: MenuSheet,
    pub features: FeatureTable,
    pub icons: IconSet,
    pub names: NameTable,
    pub npcs: Vec<NpcAppearance>,
}

impl SheetBundle {
    /// Parse a bundle from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a bundle from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Convert the dump into in-memory sheets.
    pub fn into_sheets(self) -> Result<Sheets> {
        Ok(Sheets {
            palette: Palette::new(self.palette.into_iter().map(RawColor).collect()),
            menus: MenuSheet::from_rows(self.menus.into_iter().map(MenuRowRecord::into_row))?,
            features: self.features.into_iter().collect(),
            icons: self.icons.into_iter().collect(),
            names: self.names.into_iter().collect(),
            npcs: self.npcs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeatureLookup, IconSource, NameSource, PaletteSource, HAIRSTYLE_SLOTS};
    use vanity_common::CustomizeIndex;

    const DUMP: &str = r#"{
        "palette": [4278190335, 4278255360],
        "menus": [{
            "clan": "Hellion",
            "gender": "Male",
            "menus": [{ "menu_id": 7, "category": "Face", "kind": 1, "size": 2, "params": [501, 502] }],
            "facial_features": [[1, 2, 3, 4, 5, 6, 7]],
            "hairstyles": [601, 602]
        }],
        "features": [{ "row_id": 501, "feature_id": 1, "icon": 9001 }],
        "icons": [9001],
        "names": { "7": "Face" }
    }"#;

    #[test]
    fn test_load_bundle() {
        let sheets = SheetBundle::from_json(DUMP).unwrap().into_sheets().unwrap();

        assert_eq!(sheets.palette.color(1), RawColor(4278255360));
        assert!(sheets.icons.icon_exists(9001));
        assert_eq!(sheets.names.menu_name(7), Some("Face"));
        assert_eq!(sheets.features.feature(501).map(|f| f.feature_id), Some(1));
        assert!(sheets.npcs.is_empty());

        let row = sheets.menus.row(Clan::Hellion, Gender::Male).unwrap();
        assert_eq!(row.menu_size(CustomizeIndex::Face), 2);
        assert_eq!(row.facial_feature_icons(1)[6], 7);
        assert_eq!(
            HAIRSTYLE_SLOTS.entries(row.hair_make()).collect::<Vec<_>>(),
            vec![(1, 601), (2, 602)]
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(SheetBundle::from_json("{ \"palette\": 3 }").is_err());
    }
}
