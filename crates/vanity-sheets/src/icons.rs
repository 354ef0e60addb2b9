//! Icon availability.
//!
//! Some feature rows point at icons whose art is not shipped yet. Pickers
//! must not offer those, so extraction asks an [`IconSource`] first.

use hashbrown::HashSet as FastHashSet;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

type FxHashSet<T> = FastHashSet<T, BuildHasherDefault<FxHasher>>;

/// Answers whether an icon asset exists.
pub trait IconSource: Send + Sync {
    /// Check if `icon` exists.
    fn icon_exists(&self, icon: u32) -> bool;
}

/// A known set of existing icons.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: FxHashSet<u32>,
}

impl IconSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an icon as existing.
    pub fn insert(&mut self, icon: u32) {
        self.icons.insert(icon);
    }

    /// Number of known icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Check if no icons are known.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl FromIterator<u32> for IconSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            icons: iter.into_iter().collect(),
        }
    }
}

impl IconSource for IconSet {
    fn icon_exists(&self, icon: u32) -> bool {
        // Icon 0 is the "no icon" marker and never exists.
        icon != 0 && self.icons.contains(&icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set() {
        let icons: IconSet = [10, 20].into_iter().collect();
        assert!(icons.icon_exists(10));
        assert!(!icons.icon_exists(11));
        assert!(!icons.icon_exists(0));
    }
}
