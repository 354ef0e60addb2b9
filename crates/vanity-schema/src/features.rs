//! Facial feature toggles per face.

use vanity_common::CustomizeIndex;
use vanity_sheets::MenuRow;

use crate::FeaturePair;

/// Icon shown for the legacy tattoo on every face.
pub const LEGACY_TATTOO_ICON: u32 = 137_083;

/// Facial feature toggles indexed by slot (0-7) and then by face.
pub type FacialFeatureTable = [Vec<FeaturePair>; CustomizeIndex::FACIAL_FEATURES.len()];

/// Decode the toggles of faces `1..=face_count`.
///
/// Each slot gets `face_count + 1` pairs; face 0 is an unset placeholder.
/// Slots 0-6 take their icon (and key) from the row's raw per-face values,
/// slot 7 is the legacy tattoo.
pub fn decode_features(face_count: usize, row: &MenuRow) -> FacialFeatureTable {
    std::array::from_fn(|slot| {
        let category = CustomizeIndex::FACIAL_FEATURES[slot];
        std::iter::once(FeaturePair::unset(category))
            .chain((1..=face_count).map(|face| {
                if category == CustomizeIndex::LegacyTattoo {
                    FeaturePair::toggle(category, LEGACY_TATTOO_ICON, None)
                } else {
                    let raw = row.facial_feature_icons(face)[slot];
                    FeaturePair::toggle(category, raw, Some(raw))
                }
            }))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanity_common::{Clan, CustomizeValue, Gender};

    #[test]
    fn test_decode_features() {
        let mut row = MenuRow::new(Clan::SeekerOfTheSun, Gender::Female);
        row.set_facial_feature_icons(1, [11, 12, 13, 14, 15, 16, 17]);
        row.set_facial_feature_icons(2, [21, 22, 23, 24, 25, 26, 27]);

        let table = decode_features(2, &row);
        for pairs in &table {
            assert_eq!(pairs.len(), 3);
        }

        let pair = table[2][2];
        assert_eq!(pair.off.category, CustomizeIndex::FacialFeature3);
        assert_eq!(pair.off.value, CustomizeValue::ZERO);
        assert_eq!(pair.on.value, CustomizeValue::MAX);
        assert_eq!(pair.on.icon, 23);
        assert_eq!(pair.on.key, Some(23));

        assert_eq!(table[0][0], FeaturePair::unset(CustomizeIndex::FacialFeature1));
    }

    #[test]
    fn test_legacy_tattoo_uses_fixed_icon() {
        let row = MenuRow::new(Clan::Midlander, Gender::Male);
        let table = decode_features(4, &row);
        let tattoo = &table[7];

        assert_eq!(tattoo.len(), 5);
        assert!(!tattoo[0].on.has_icon());
        for pair in &tattoo[1..] {
            assert_eq!(pair.off.icon, LEGACY_TATTOO_ICON);
            assert_eq!(pair.on.icon, LEGACY_TATTOO_ICON);
            assert_eq!(pair.on.category, CustomizeIndex::LegacyTattoo);
        }
    }

    #[test]
    fn test_no_faces() {
        let table = decode_features(0, &MenuRow::new(Clan::Midlander, Gender::Male));
        assert!(table.iter().all(|pairs| pairs.len() == 1));
    }
}
