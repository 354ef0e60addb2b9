//! Cosmetic feature lookup.
//!
//! Hairstyles, face paints, faces, tails and fur patterns are stored in menu
//! rows as raw ids into a cosmetic feature sheet. That sheet maps each id to
//! the stable feature id used in the appearance array and the icon shown in
//! pickers.

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use vanity_common::SheetReader;

use crate::{Error, Result};

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// On-disk feature sheet record.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct RawFeatureRecord {
    pub row_id: u32,
    pub icon: u32,
    pub feature_id: u8,
    pub face_tag: u8,
    pub reserved: u16,
}

/// Size of one feature record in bytes.
pub const FEATURE_RECORD_SIZE: usize = std::mem::size_of::<RawFeatureRecord>();

/// One resolved cosmetic feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomizeFeature {
    /// Row id in the feature sheet; raw menu entries refer to this.
    pub row_id: u32,
    /// Value written into the appearance array.
    pub feature_id: u8,
    /// Picker icon.
    pub icon: u32,
    /// Face compatibility tag; 0 means compatible with every face.
    #[cfg_attr(feature = "serde", serde(default))]
    pub face_tag: u8,
}

impl CustomizeFeature {
    /// Create a feature compatible with every face.
    pub const fn new(row_id: u32, feature_id: u8, icon: u32) -> Self {
        Self {
            row_id,
            feature_id,
            icon,
            face_tag: 0,
        }
    }

    /// Set the face compatibility tag, builder style.
    pub const fn with_face_tag(mut self, face_tag: u8) -> Self {
        self.face_tag = face_tag;
        self
    }
}

impl From<RawFeatureRecord> for CustomizeFeature {
    fn from(raw: RawFeatureRecord) -> Self {
        Self {
            row_id: raw.row_id,
            feature_id: raw.feature_id,
            icon: raw.icon,
            face_tag: raw.face_tag,
        }
    }
}

/// Resolves raw menu entries to cosmetic features.
pub trait FeatureLookup: Send + Sync {
    /// Look up a raw entry.
    fn feature(&self, raw: u32) -> Option<CustomizeFeature>;
}

/// The feature sheet held in memory, keyed by row id.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    rows: FxHashMap<u32, CustomizeFeature>,
}

impl FeatureTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse back-to-back feature records.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() % FEATURE_RECORD_SIZE != 0 {
            return Err(Error::InvalidSize {
                sheet: "feature",
                record_size: FEATURE_RECORD_SIZE,
                actual: data.len(),
            });
        }

        let mut reader = SheetReader::new(data);
        let mut table = Self::new();
        while !reader.is_empty() {
            let record = reader.read_struct::<RawFeatureRecord>()?;
            table.insert(record.into());
        }
        Ok(table)
    }

    /// Add or replace a feature.
    pub fn insert(&mut self, feature: CustomizeFeature) {
        self.rows.insert(feature.row_id, feature);
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<CustomizeFeature> for FeatureTable {
    fn from_iter<I: IntoIterator<Item = CustomizeFeature>>(iter: I) -> Self {
        let mut table = Self::new();
        for feature in iter {
            table.insert(feature);
        }
        table
    }
}

impl FeatureLookup for FeatureTable {
    fn feature(&self, raw: u32) -> Option<CustomizeFeature> {
        self.rows.get(&raw).copied()
    }
}
