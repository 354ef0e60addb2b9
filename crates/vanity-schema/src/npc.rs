//! NPC-exclusive appearance values.

use std::collections::BTreeSet;

use vanity_common::{CustomizeIndex, CustomizeValue};
use vanity_sheets::NpcCatalog;

use crate::CustomizationSchema;

/// Categories inspected on every NPC.
pub const NPC_SCAN_CATEGORIES: [CustomizeIndex; 5] = [
    CustomizeIndex::Face,
    CustomizeIndex::Hairstyle,
    CustomizeIndex::LipColor,
    CustomizeIndex::SkinColor,
    CustomizeIndex::TailShape,
];

/// Body type of regular adult characters; other bodies are not scanned.
pub const DEFAULT_BODY_TYPE: u8 = 1;

/// Collect values NPCs of the schema's clan and gender use but players cannot pick.
///
/// Blocks until the catalog is loaded. Maximum height is always included.
/// Hairstyles are checked against the NPC's own face.
pub fn scan(catalog: &NpcCatalog, schema: &CustomizationSchema) -> Vec<(CustomizeIndex, CustomizeValue)> {
    let entries = catalog.wait();
    let mut found = BTreeSet::from([(CustomizeIndex::Height, CustomizeValue::MAX)]);

    let npcs = entries
        .iter()
        .filter(|npc| npc.is(schema.clan(), schema.gender()) && npc.body_type() == DEFAULT_BODY_TYPE);
    for npc in npcs {
        let face = npc.get(CustomizeIndex::Face);
        for category in NPC_SCAN_CATEGORIES {
            let value = npc.get(category);
            if value.is_zero() || schema.find_value(category, value, face).is_some() {
                continue;
            }
            if found.insert((category, value)) {
                tracing::trace!(npc = npc.id, %category, %value, "NPC-exclusive value");
            }
        }
    }

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanity_common::{Clan, Gender};

    use crate::{test_data, SchemaBuilder};

    fn exclusive(clan: Clan, gender: Gender) -> Vec<(CustomizeIndex, CustomizeValue)> {
        let data = test_data::sheets();
        SchemaBuilder::new(data.sources())
            .build(clan, gender)
            .unwrap()
            .npc_exclusive()
            .to_vec()
    }

    #[test]
    fn test_scan_filters_identity_and_body_type() {
        let found = exclusive(Clan::Midlander, Gender::Male);
        assert_eq!(
            found,
            vec![
                (CustomizeIndex::Height, CustomizeValue::MAX),
                (CustomizeIndex::Hairstyle, CustomizeValue(9)),
                (CustomizeIndex::LipColor, CustomizeValue(100)),
            ]
        );
    }

    #[test]
    fn test_scan_checks_hair_against_npc_face() {
        let found = exclusive(Clan::Hellion, Gender::Male);
        assert_eq!(
            found,
            vec![
                (CustomizeIndex::Height, CustomizeValue::MAX),
                (CustomizeIndex::Hairstyle, CustomizeValue(2)),
                (CustomizeIndex::TailShape, CustomizeValue(7)),
            ]
        );
    }

    #[test]
    fn test_empty_catalog_keeps_height() {
        let data = test_data::sheets();
        let catalog = NpcCatalog::from_entries(Vec::new());
        let schema = SchemaBuilder::new(data.sources())
            .build(Clan::Midlander, Gender::Male)
            .unwrap();

        assert_eq!(scan(&catalog, &schema), vec![(CustomizeIndex::Height, CustomizeValue::MAX)]);
    }

    #[test]
    fn test_abandoned_load_does_not_block() {
        let data = test_data::sheets();
        let schema = SchemaBuilder::new(data.sources())
            .build(Clan::Midlander, Gender::Male)
            .unwrap();

        let catalog = NpcCatalog::spawn(|| panic!("sheet missing"));
        assert_eq!(scan(&catalog, &schema).len(), 1);
    }
}
