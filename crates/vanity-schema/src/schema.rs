//! The built customization schema of one clan and gender.

use std::collections::BTreeMap;

use vanity_common::{Clan, CustomizeArray, CustomizeIndex, CustomizeValue, Gender};

use crate::features::FacialFeatureTable;
use crate::{CategoryMap, CustomizeOption, FeaturePair, PresentationKind};

/// Every appearance option of one clan and gender.
///
/// Built once by [`SchemaBuilder`](crate::SchemaBuilder) and immutable
/// afterwards. Option lists are sorted by value without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CustomizationSchema {
    pub(crate) clan: Clan,
    pub(crate) gender: Gender,
    pub(crate) options: CategoryMap<Vec<CustomizeOption>>,
    pub(crate) available: CategoryMap<bool>,
    pub(crate) kinds: CategoryMap<PresentationKind>,
    pub(crate) names: CategoryMap<String>,
    pub(crate) hair_by_face: Vec<Vec<CustomizeOption>>,
    pub(crate) facial_features: FacialFeatureTable,
    pub(crate) npc_exclusive: Vec<(CustomizeIndex, CustomizeValue)>,
    pub(crate) display_groups: BTreeMap<PresentationKind, Vec<CustomizeIndex>>,
}

impl CustomizationSchema {
    /// Get the clan.
    pub fn clan(&self) -> Clan {
        self.clan
    }

    /// Get the gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Options of a category.
    ///
    /// Hairstyles are the unfiltered list; see [`hair_for_face`](Self::hair_for_face).
    pub fn options(&self, category: CustomizeIndex) -> &[CustomizeOption] {
        &self.options[category]
    }

    /// Check if the category can be edited at all for this clan and gender.
    pub fn is_available(&self, category: CustomizeIndex) -> bool {
        self.available[category]
    }

    /// How the category is presented.
    pub fn kind(&self, category: CustomizeIndex) -> PresentationKind {
        self.kinds[category]
    }

    /// Display name of a category.
    pub fn name(&self, category: CustomizeIndex) -> &str {
        &self.names[category]
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.options[CustomizeIndex::Face].len()
    }

    /// Hairstyles usable with `face`.
    ///
    /// Faces past the last one fall back to the unfiltered list.
    pub fn hair_for_face(&self, face: CustomizeValue) -> &[CustomizeOption] {
        self.hair_by_face
            .get(usize::from(face.value()))
            .or_else(|| self.hair_by_face.first())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Toggle of facial feature `slot` (0-7) on `face`.
    ///
    /// Faces past the last one fall back to the unset toggle; returns `None`
    /// only for a slot outside 0-7.
    pub fn facial_feature(&self, slot: usize, face: CustomizeValue) -> Option<FeaturePair> {
        let pairs = self.facial_features.get(slot)?;
        pairs
            .get(usize::from(face.value()))
            .or_else(|| pairs.first())
            .copied()
    }

    fn list(&self, category: CustomizeIndex, face: CustomizeValue) -> &[CustomizeOption] {
        match category {
            CustomizeIndex::Hairstyle => self.hair_for_face(face),
            _ => &self.options[category],
        }
    }

    /// Number of options of `category` on `face`.
    pub fn count(&self, category: CustomizeIndex, face: CustomizeValue) -> usize {
        self.list(category, face).len()
    }

    /// The option at position `index` of `category` on `face`.
    ///
    /// For facial features position 0 is the off state and 1 the on state of
    /// the face's own toggle, so icons follow the face.
    pub fn option_at(
        &self,
        category: CustomizeIndex,
        index: usize,
        face: CustomizeValue,
    ) -> Option<CustomizeOption> {
        if let Some(slot) = category.facial_feature_slot() {
            let pair = self.facial_feature(slot, face)?;
            return match index {
                0 => Some(pair.off),
                1 => Some(pair.on),
                _ => None,
            };
        }
        self.list(category, face).get(index).copied()
    }

    /// Position of the option with `value` in `category` on `face`.
    pub fn find_value(
        &self,
        category: CustomizeIndex,
        value: CustomizeValue,
        face: CustomizeValue,
    ) -> Option<usize> {
        self.list(category, face)
            .binary_search_by_key(&value, |o| o.value)
            .ok()
    }

    /// Values seen on NPCs that no regular option offers, sorted.
    pub fn npc_exclusive(&self) -> &[(CustomizeIndex, CustomizeValue)] {
        &self.npc_exclusive
    }

    /// Check if `value` of `category` is only seen on NPCs.
    pub fn is_npc_exclusive(&self, category: CustomizeIndex, value: CustomizeValue) -> bool {
        self.npc_exclusive.binary_search(&(category, value)).is_ok()
    }

    /// Check if `value` is a valid selection of `category` on `face`.
    ///
    /// Identity categories are always valid. Unavailable categories only
    /// accept zero. NPC-exclusive values pass when `allow_npc` is set.
    pub fn is_valid_value(
        &self,
        category: CustomizeIndex,
        value: CustomizeValue,
        face: CustomizeValue,
        allow_npc: bool,
    ) -> bool {
        if is_identity(category) {
            return true;
        }
        if !self.is_available(category) {
            return value.is_zero() || (allow_npc && self.is_npc_exclusive(category, value));
        }
        if category.is_flag() {
            return value == CustomizeValue::ZERO || value == CustomizeValue::MAX;
        }
        self.find_value(category, value, face).is_some()
            || (allow_npc && self.is_npc_exclusive(category, value))
    }

    /// Categories of `customize` holding values this schema rejects.
    pub fn invalid_categories(&self, customize: &CustomizeArray, allow_npc: bool) -> Vec<CustomizeIndex> {
        let face = customize.face();
        CustomizeIndex::all()
            .into_iter()
            .filter(|&category| !self.is_valid_value(category, customize.get(category), face, allow_npc))
            .collect()
    }

    /// Available categories presented as `kind`, in display order.
    pub fn display_group(&self, kind: PresentationKind) -> &[CustomizeIndex] {
        self.display_groups.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// All display groups; every kind has an entry.
    pub fn display_groups(&self) -> &BTreeMap<PresentationKind, Vec<CustomizeIndex>> {
        &self.display_groups
    }
}

/// Categories selecting who the character is rather than how they look.
pub const fn is_identity(category: CustomizeIndex) -> bool {
    matches!(
        category,
        CustomizeIndex::Race | CustomizeIndex::Gender | CustomizeIndex::Clan | CustomizeIndex::BodyType
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_data, SchemaBuilder};

    fn schema(clan: Clan) -> CustomizationSchema {
        let data = test_data::sheets();
        SchemaBuilder::new(data.sources()).build(clan, Gender::Male).unwrap()
    }

    fn values(options: &[CustomizeOption]) -> Vec<u8> {
        options.iter().map(|o| o.value.value()).collect()
    }

    #[test]
    fn test_hair_for_face() {
        let furred = schema(Clan::Hellion);
        assert_eq!(values(furred.hair_for_face(CustomizeValue(0))), vec![1, 2, 3, 4]);
        assert_eq!(values(furred.hair_for_face(CustomizeValue(1))), vec![1, 2, 4]);
        assert_eq!(values(furred.hair_for_face(CustomizeValue(2))), vec![1, 3, 4]);
        assert_eq!(values(furred.hair_for_face(CustomizeValue(4))), vec![1, 4]);
        // Past the last face.
        assert_eq!(values(furred.hair_for_face(CustomizeValue(9))), vec![1, 2, 3, 4]);

        let plain = schema(Clan::Midlander);
        assert_eq!(plain.hair_for_face(CustomizeValue(3)), plain.options(CustomizeIndex::Hairstyle));
    }

    #[test]
    fn test_count_and_find_value_are_face_aware() {
        let furred = schema(Clan::Hellion);
        assert_eq!(furred.count(CustomizeIndex::Hairstyle, CustomizeValue(3)), 2);
        assert_eq!(furred.find_value(CustomizeIndex::Hairstyle, CustomizeValue(4), CustomizeValue(3)), Some(1));
        assert_eq!(furred.find_value(CustomizeIndex::Hairstyle, CustomizeValue(2), CustomizeValue(3)), None);
        assert_eq!(furred.find_value(CustomizeIndex::TailShape, CustomizeValue(3), CustomizeValue(3)), Some(2));
    }

    #[test]
    fn test_facial_feature_and_option_at() {
        let schema = schema(Clan::Midlander);

        let pair = schema.facial_feature(1, CustomizeValue(3)).unwrap();
        assert_eq!(pair.on.icon, 301);
        assert_eq!(pair.on.category, CustomizeIndex::FacialFeature2);
        assert_eq!(schema.facial_feature(0, CustomizeValue(40)), schema.facial_feature(0, CustomizeValue(0)));
        assert!(schema.facial_feature(8, CustomizeValue(1)).is_none());

        let on = schema.option_at(CustomizeIndex::FacialFeature2, 1, CustomizeValue(3)).unwrap();
        assert_eq!(on, pair.on);
        assert!(schema.option_at(CustomizeIndex::FacialFeature2, 2, CustomizeValue(3)).is_none());

        let nose = schema.option_at(CustomizeIndex::Nose, 3, CustomizeValue(1)).unwrap();
        assert_eq!(nose.value, CustomizeValue(3));
        assert!(schema.option_at(CustomizeIndex::Nose, 4, CustomizeValue(1)).is_none());
    }

    #[test]
    fn test_is_valid_value() {
        let schema = schema(Clan::Midlander);
        let face = CustomizeValue(2);

        assert!(schema.is_valid_value(CustomizeIndex::Hairstyle, CustomizeValue(3), face, false));
        assert!(!schema.is_valid_value(CustomizeIndex::Hairstyle, CustomizeValue(9), face, false));
        assert!(schema.is_valid_value(CustomizeIndex::Hairstyle, CustomizeValue(9), face, true));
        assert!(schema.is_npc_exclusive(CustomizeIndex::LipColor, CustomizeValue(100)));

        // Unavailable categories only take zero.
        assert!(schema.is_valid_value(CustomizeIndex::FacePaint, CustomizeValue(0), face, false));
        assert!(!schema.is_valid_value(CustomizeIndex::FacePaint, CustomizeValue(1), face, false));

        assert!(schema.is_valid_value(CustomizeIndex::Highlights, CustomizeValue::MAX, face, false));
        assert!(schema.is_valid_value(CustomizeIndex::Race, CustomizeValue(200), face, false));
        assert!(!schema.is_valid_value(CustomizeIndex::Height, CustomizeValue::MAX, face, false));
        assert!(schema.is_valid_value(CustomizeIndex::Height, CustomizeValue::MAX, face, true));
    }

    #[test]
    fn test_invalid_categories() {
        let schema = schema(Clan::Midlander);
        let mut customize = CustomizeArray::default();
        customize.set(CustomizeIndex::Clan, CustomizeValue(Clan::Midlander.id()));
        customize.set(CustomizeIndex::Face, CustomizeValue(1));
        customize.set(CustomizeIndex::Hairstyle, CustomizeValue(2));
        customize.set(CustomizeIndex::Height, CustomizeValue(50));
        assert!(schema.invalid_categories(&customize, false).is_empty());

        customize.set(CustomizeIndex::Hairstyle, CustomizeValue(9));
        customize.set(CustomizeIndex::Nose, CustomizeValue(7));
        assert_eq!(
            schema.invalid_categories(&customize, false),
            vec![CustomizeIndex::Hairstyle, CustomizeIndex::Nose]
        );
        assert_eq!(schema.invalid_categories(&customize, true), vec![CustomizeIndex::Nose]);
    }
}
