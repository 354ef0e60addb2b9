//! Non-player character appearances.
//!
//! The catalog is precomputed from the game's NPC sheets and is usually
//! loaded on a background thread at startup. Consumers that need it call
//! [`NpcCatalog::wait`], which blocks only the calling thread until the load
//! has been published.

use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use vanity_common::{
    Clan, CustomizeArray, CustomizeIndex, CustomizeValue, Gender, SheetReader,
    CUSTOMIZE_ARRAY_SIZE,
};

use crate::{Error, Result};

/// On-disk NPC appearance record.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct RawNpcRecord {
    pub id: u32,
    pub customize: [u8; CUSTOMIZE_ARRAY_SIZE],
    pub reserved: [u8; 2],
}

/// Size of one NPC record in bytes.
pub const NPC_RECORD_SIZE: usize = std::mem::size_of::<RawNpcRecord>();

/// The appearance of one NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcAppearance {
    /// NPC row id.
    pub id: u32,
    /// The NPC's appearance array.
    pub customize: CustomizeArray,
}

impl NpcAppearance {
    /// Create an appearance.
    pub const fn new(id: u32, customize: CustomizeArray) -> Self {
        Self { id, customize }
    }

    /// Read one category.
    pub fn get(&self, index: CustomizeIndex) -> CustomizeValue {
        self.customize.get(index)
    }

    /// Check if this NPC belongs to `clan` and `gender`.
    pub fn is(&self, clan: Clan, gender: Gender) -> bool {
        self.customize.clan().ok() == Some(clan) && self.customize.gender().ok() == Some(gender)
    }

    /// Body type byte (1 is the default adult body).
    pub fn body_type(&self) -> u8 {
        self.get(CustomizeIndex::BodyType).value()
    }

    /// Parse back-to-back NPC records.
    pub fn parse_records(data: &[u8]) -> Result<Vec<Self>> {
        if data.len() % NPC_RECORD_SIZE != 0 {
            return Err(Error::InvalidSize {
                sheet: "npc",
                record_size: NPC_RECORD_SIZE,
                actual: data.len(),
            });
        }

        let mut reader = SheetReader::new(data);
        let mut entries = Vec::with_capacity(data.len() / NPC_RECORD_SIZE);
        while !reader.is_empty() {
            let record = reader.read_struct::<RawNpcRecord>()?;
            entries.push(Self::new(record.id, CustomizeArray::from_bytes(record.customize)));
        }
        Ok(entries)
    }
}

#[derive(Debug, Default)]
struct LoadGate {
    entries: Mutex<Option<Arc<[NpcAppearance]>>>,
    loaded: Condvar,
}

impl LoadGate {
    fn publish(&self, entries: Arc<[NpcAppearance]>) {
        let mut slot = self.entries.lock();
        if slot.is_none() {
            *slot = Some(entries);
        }
        self.loaded.notify_all();
    }
}

/// The NPC appearance catalog behind a one-shot readiness gate.
///
/// Cloning is cheap; clones share the same load.
#[derive(Debug, Clone)]
pub struct NpcCatalog {
    gate: Arc<LoadGate>,
}

impl NpcCatalog {
    /// Create a catalog that is already loaded.
    pub fn from_entries(entries: Vec<NpcAppearance>) -> Self {
        let gate = LoadGate::default();
        gate.publish(entries.into());
        Self {
            gate: Arc::new(gate),
        }
    }

    /// Create an unloaded catalog and the handle that completes it.
    pub fn pending() -> (Self, NpcCatalogLoader) {
        let gate = Arc::new(LoadGate::default());
        let loader = NpcCatalogLoader {
            gate: Arc::clone(&gate),
            finished: false,
        };
        (Self { gate }, loader)
    }

    /// Load the catalog on a background thread.
    pub fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> Vec<NpcAppearance> + Send + 'static,
    {
        let (catalog, loader) = Self::pending();
        std::thread::spawn(move || {
            let entries = load();
            tracing::info!(count = entries.len(), "NPC catalog loaded");
            loader.finish(entries);
        });
        catalog
    }

    /// Check if the load has been published.
    pub fn is_loaded(&self) -> bool {
        self.gate.entries.lock().is_some()
    }

    /// Block until the catalog is loaded and return its entries.
    pub fn wait(&self) -> Arc<[NpcAppearance]> {
        let mut slot = self.gate.entries.lock();
        loop {
            if let Some(entries) = slot.as_ref() {
                return Arc::clone(entries);
            }
            self.gate.loaded.wait(&mut slot);
        }
    }
}

/// Completes a pending [`NpcCatalog`].
///
/// Dropping the loader without calling [`finish`](Self::finish), for example
/// because the load panicked, publishes an empty catalog so waiters resume.
#[derive(Debug)]
pub struct NpcCatalogLoader {
    gate: Arc<LoadGate>,
    finished: bool,
}

impl NpcCatalogLoader {
    /// Publish the loaded entries and wake all waiters.
    pub fn finish(mut self, entries: Vec<NpcAppearance>) {
        self.finished = true;
        self.gate.publish(entries.into());
    }
}

impl Drop for NpcCatalogLoader {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("NPC catalog load abandoned, publishing an empty catalog");
            self.gate.publish(Arc::from(Vec::new()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn appearance(id: u32, clan: Clan, gender: Gender, face: u8) -> NpcAppearance {
        let mut customize = CustomizeArray::default();
        customize.set(CustomizeIndex::Clan, CustomizeValue(clan.id()));
        customize.set(CustomizeIndex::Gender, CustomizeValue(gender.id()));
        customize.set(CustomizeIndex::BodyType, CustomizeValue(1));
        customize.set(CustomizeIndex::Face, CustomizeValue(face));
        NpcAppearance::new(id, customize)
    }

    #[test]
    fn test_parse_records() {
        let npc = appearance(1_000_123, Clan::Raen, Gender::Female, 3);
        let record = RawNpcRecord {
            id: npc.id,
            customize: *npc.customize.bytes(),
            reserved: [0; 2],
        };

        let parsed = NpcAppearance::parse_records(record.as_bytes()).unwrap();
        assert_eq!(parsed, vec![npc]);
        assert!(parsed[0].is(Clan::Raen, Gender::Female));
        assert!(!parsed[0].is(Clan::Xaela, Gender::Female));
        assert_eq!(parsed[0].body_type(), 1);
        assert!(NpcAppearance::parse_records(&[0u8; NPC_RECORD_SIZE - 1]).is_err());
    }

    #[test]
    fn test_wait_blocks_until_finished() {
        let (catalog, loader) = NpcCatalog::pending();
        assert!(!catalog.is_loaded());

        let waiter = {
            let catalog = catalog.clone();
            std::thread::spawn(move || catalog.wait().len())
        };

        std::thread::sleep(Duration::from_millis(20));
        loader.finish(vec![appearance(1, Clan::Midlander, Gender::Male, 1)]);

        assert_eq!(waiter.join().unwrap(), 1);
        assert!(catalog.is_loaded());
    }

    #[test]
    fn test_spawned_load() {
        let catalog = NpcCatalog::spawn(|| vec![appearance(7, Clan::Lost, Gender::Male, 2)]);
        let entries = catalog.wait();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 7);
    }

    #[test]
    fn test_panicking_load_publishes_empty_catalog() {
        let catalog = NpcCatalog::spawn(|| panic!("sheet missing"));
        assert!(catalog.wait().is_empty());
    }

    #[test]
    fn test_first_publish_wins() {
        let catalog = NpcCatalog::from_entries(vec![appearance(1, Clan::Veena, Gender::Female, 1)]);
        catalog.gate.publish(Arc::from(Vec::new()));
        assert_eq!(catalog.wait().len(), 1);
    }
}
