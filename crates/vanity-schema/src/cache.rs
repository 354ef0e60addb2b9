//! Lazily built schemas for every clan and gender.

use std::sync::{Arc, OnceLock};

use vanity_common::{Clan, Gender};

use crate::{CustomizationSchema, Result, SchemaBuilder};

/// One lazily built schema slot per clan and gender.
///
/// Owned by the caller; share it behind an `Arc` to use it across threads.
#[derive(Debug)]
pub struct SchemaCache {
    slots: Vec<OnceLock<Arc<CustomizationSchema>>>,
}

impl Default for SchemaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaCache {
    /// Create an empty cache with a slot for every clan and gender.
    pub fn new() -> Self {
        Self {
            slots: (0..Clan::COUNT * 2).map(|_| OnceLock::new()).collect(),
        }
    }

    fn slot(&self, clan: Clan, gender: Gender) -> &OnceLock<Arc<CustomizationSchema>> {
        let index = usize::from(clan.id() - 1) * 2 + usize::from(gender.id());
        &self.slots[index]
    }

    /// Get the schema if it was already built.
    pub fn get(&self, clan: Clan, gender: Gender) -> Option<Arc<CustomizationSchema>> {
        self.slot(clan, gender).get().cloned()
    }

    /// Get the schema, building it with `builder` on first use.
    ///
    /// Build errors are returned and not cached. If two threads race, both
    /// build and the first stored schema wins.
    pub fn get_or_build(
        &self,
        clan: Clan,
        gender: Gender,
        builder: &SchemaBuilder<'_>,
    ) -> Result<Arc<CustomizationSchema>> {
        let slot = self.slot(clan, gender);
        if let Some(schema) = slot.get() {
            return Ok(Arc::clone(schema));
        }
        let schema = Arc::new(builder.build(clan, gender)?);
        Ok(Arc::clone(slot.get_or_init(|| schema)))
    }

    /// Number of schemas built so far.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
