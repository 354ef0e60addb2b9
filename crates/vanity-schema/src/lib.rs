//! Character customization schemas.
//!
//! Turns the per-clan/gender game-data sheets from [`vanity_sheets`] into a
//! [`CustomizationSchema`]: for every appearance category the selectable
//! options, whether the category is available at all, how it is presented,
//! its display name and which values only NPCs use.
//!
//! Building runs in stages:
//!
//! 1. Palette slices and feature extraction ([`ExtractedOptions`])
//! 2. Classification and availability
//! 3. Facial feature toggles and face-dependent hairstyles
//! 4. The NPC scan, which waits for the NPC catalog
//! 5. Display grouping
//!
//! Schemas are immutable once built. [`SchemaCache`] holds one per pair.
//!
//! # Example
//!
//! ```no_run
//! use vanity_common::{Clan, CustomizeIndex, Gender};
//! use vanity_schema::{SchemaBuilder, SchemaSources};
//!
//! # fn example(sources: SchemaSources<'_>) -> vanity_schema::Result<()> {
//! let schema = SchemaBuilder::new(sources).build(Clan::Raen, Gender::Female)?;
//! for option in schema.options(CustomizeIndex::Face) {
//!     println!("face {} icon {}", option.value, option.icon);
//! }
//! # Ok(())
//! # }
//! ```

mod availability;
mod builder;
mod cache;
mod classify;
mod error;
mod extract;
mod features;
mod hair;
mod npc;
mod option;
mod palette;
mod schema;

#[cfg(test)]
mod test_data;

pub use availability::compute_availability;
pub use builder::{display_groups, display_name, display_order, SchemaBuilder, SchemaSources, MAX_SLIDER_VALUE};
pub use cache::SchemaCache;
pub use classify::{classify, fixed_kind};
pub use error::{Result, SchemaError};
pub use extract::{extract, extract_slots, gates_on_icon, slot_table, ExtractedOptions};
pub use features::{decode_features, FacialFeatureTable, LEGACY_TATTOO_ICON};
pub use hair::hair_by_face;
pub use npc::{scan as scan_npcs, DEFAULT_BODY_TYPE, NPC_SCAN_CATEGORIES};
pub use option::{CategoryMap, CustomizeOption, FeaturePair, PresentationKind};
pub use palette::{
    skin_and_hair_offsets, slice, EYE_OFFSET, FACE_PAINT_DARK_OFFSET, FACE_PAINT_LIGHT_OFFSET,
    HIGHLIGHT_OFFSET, LARGE_SWATCH_COUNT, LIGHT_VALUE_BASE, LIP_DARK_OFFSET, LIP_LIGHT_OFFSET,
    SMALL_SWATCH_COUNT, TATTOO_OFFSET,
};
pub use schema::{is_identity, CustomizationSchema};
