//! Options, presentation kinds and per-category storage.

use std::ops::{Index, IndexMut};

use vanity_common::{CustomizeIndex, CustomizeValue};

/// One selectable entry of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CustomizeOption {
    /// Category this option belongs to.
    pub category: CustomizeIndex,
    /// Selector written into the appearance array.
    pub value: CustomizeValue,
    /// Icon id, or the packed RGBA color of a palette swatch; 0 means none.
    pub icon: u32,
    /// Stable secondary key into the source sheet (feature row, palette index, ...).
    pub key: Option<u32>,
}

impl CustomizeOption {
    /// Create an option.
    pub const fn new(
        category: CustomizeIndex,
        value: CustomizeValue,
        icon: u32,
        key: Option<u32>,
    ) -> Self {
        Self {
            category,
            value,
            icon,
            key,
        }
    }

    /// Create an option with no icon and no key.
    pub const fn plain(category: CustomizeIndex, value: u8) -> Self {
        Self::new(category, CustomizeValue(value), 0, None)
    }

    /// Check if this option has an icon.
    pub const fn has_icon(&self) -> bool {
        self.icon != 0
    }
}

/// The off/on options of one facial feature toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeaturePair {
    pub off: CustomizeOption,
    pub on: CustomizeOption,
}

impl FeaturePair {
    /// A toggle whose both states share one icon and key.
    pub const fn toggle(category: CustomizeIndex, icon: u32, key: Option<u32>) -> Self {
        Self {
            off: CustomizeOption::new(category, CustomizeValue::ZERO, icon, key),
            on: CustomizeOption::new(category, CustomizeValue::MAX, icon, key),
        }
    }

    /// The placeholder toggle used when no face is selected.
    pub const fn unset(category: CustomizeIndex) -> Self {
        Self::toggle(category, 0, None)
    }
}

/// The widget a category is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PresentationKind {
    /// Multi-column list, usually of icons.
    List,
    /// List that must not wrap into columns.
    SingleColumnList,
    ColorPicker,
    Checkbox,
    /// Checkbox showing the option's icon.
    IconCheckbox,
    /// Not presented.
    None,
}

impl PresentationKind {
    /// Number of kinds.
    pub const COUNT: usize = 6;

    /// Get all kinds.
    pub const fn all() -> [PresentationKind; Self::COUNT] {
        [
            PresentationKind::List,
            PresentationKind::SingleColumnList,
            PresentationKind::ColorPicker,
            PresentationKind::Checkbox,
            PresentationKind::IconCheckbox,
            PresentationKind::None,
        ]
    }

    /// Map a sub-menu kind byte.
    ///
    /// | Byte | Menu |
    /// |------|------|
    /// | 0, 1, 5 | list, icon list, slider |
    /// | 2, 3 | color, double color |
    /// | 4 | multi-toggle |
    /// | 6 | toggle |
    /// | 7 | hidden |
    pub const fn from_menu_byte(kind: u8) -> Self {
        match kind {
            2 | 3 => PresentationKind::ColorPicker,
            4 => PresentationKind::IconCheckbox,
            6 => PresentationKind::Checkbox,
            7 => PresentationKind::None,
            _ => PresentationKind::List,
        }
    }

    /// Get the name of this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            PresentationKind::List => "List",
            PresentationKind::SingleColumnList => "SingleColumnList",
            PresentationKind::ColorPicker => "ColorPicker",
            PresentationKind::Checkbox => "Checkbox",
            PresentationKind::IconCheckbox => "IconCheckbox",
            PresentationKind::None => "None",
        }
    }
}

impl std::fmt::Display for PresentationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Exactly one `T` per [`CustomizeIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct CategoryMap<T>(Vec<T>);

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` for every category in ordinal order.
    pub fn from_fn(f: impl FnMut(CustomizeIndex) -> T) -> Self {
        Self(CustomizeIndex::all().into_iter().map(f).collect())
    }

    /// Iterate `(category, value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (CustomizeIndex, &T)> {
        CustomizeIndex::all().into_iter().zip(self.0.iter())
    }

    /// Number of entries; always [`CustomizeIndex::COUNT`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; every category has an entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Index<CustomizeIndex> for CategoryMap<T> {
    type Output = T;

    fn index(&self, index: CustomizeIndex) -> &T {
        &self.0[index.ordinal()]
    }
}

impl<T> IndexMut<CustomizeIndex> for CategoryMap<T> {
    fn index_mut(&mut self, index: CustomizeIndex) -> &mut T {
        &mut self.0[index.ordinal()]
    }
}

/// Sort options by value and drop later duplicates of the same value.
pub(crate) fn sort_and_dedup(options: &mut Vec<CustomizeOption>) {
    options.sort_by_key(|o| o.value);
    options.dedup_by_key(|o| o.value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_has_every_category() {
        let map = CategoryMap::from_fn(|c| c.ordinal());
        assert_eq!(map.len(), CustomizeIndex::COUNT);
        for (category, ordinal) in map.iter() {
            assert_eq!(category.ordinal(), *ordinal);
        }
        assert_eq!(map[CustomizeIndex::FacePaintColor], CustomizeIndex::COUNT - 1);
    }

    #[test]
    fn test_sort_and_dedup_keeps_first_seen() {
        let category = CustomizeIndex::Face;
        let mut options = vec![
            CustomizeOption::new(category, CustomizeValue(3), 30, Some(1)),
            CustomizeOption::new(category, CustomizeValue(1), 10, Some(2)),
            CustomizeOption::new(category, CustomizeValue(3), 31, Some(3)),
        ];
        sort_and_dedup(&mut options);

        let keys: Vec<_> = options.iter().map(|o| o.key).collect();
        assert_eq!(keys, vec![Some(2), Some(1)]);
    }

    #[test]
    fn test_menu_byte_mapping() {
        assert_eq!(PresentationKind::from_menu_byte(1), PresentationKind::List);
        assert_eq!(PresentationKind::from_menu_byte(3), PresentationKind::ColorPicker);
        assert_eq!(PresentationKind::from_menu_byte(6), PresentationKind::Checkbox);
        assert_eq!(PresentationKind::from_menu_byte(200), PresentationKind::List);
    }
}
