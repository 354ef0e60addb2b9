//! Localized menu titles.

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Resolves menu text ids to display names.
pub trait NameSource: Send + Sync {
    /// Get the name for a menu id.
    fn menu_name(&self, menu_id: u32) -> Option<&str>;
}

/// Menu titles held in memory.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: FxHashMap<u32, String>,
}

impl NameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a name.
    pub fn insert(&mut self, menu_id: u32, name: impl Into<String>) {
        self.names.insert(menu_id, name.into());
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(id, name)| (id, name.into())).collect(),
        }
    }
}

impl NameSource for NameTable {
    fn menu_name(&self, menu_id: u32) -> Option<&str> {
        // Blank entries exist for menus whose text was never localized.
        self.names
            .get(&menu_id)
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_missing() {
        let names: NameTable = [(1u32, "Ear Size"), (2, "  ")].into_iter().collect();
        assert_eq!(names.menu_name(1), Some("Ear Size"));
        assert_eq!(names.menu_name(2), None);
        assert_eq!(names.menu_name(3), None);
    }
}
