//! Vanity - character customization schemas built from game data.
//!
//! This crate provides a unified interface to the Vanity crates.
//!
//! # Crates
//!
//! - [`vanity_common`] - Sheet reading, clans and the appearance array
//! - [`vanity_sheets`] - Palette, menu, feature, icon, name and NPC sheets
//! - [`vanity_schema`] - Per-clan/gender customization schemas
//!
//! # Example
//!
//! ```no_run
//! use vanity::prelude::*;
//!
//! let sheets = SheetBundle::load("dump.json")?.into_sheets()?;
//! let npcs = NpcCatalog::from_entries(sheets.npcs);
//! let sources = SchemaSources {
//!     palette: &sheets.palette,
//!     menus: &sheets.menus,
//!     features: &sheets.features,
//!     icons: &sheets.icons,
//!     names: &sheets.names,
//!     npcs: &npcs,
//! };
//!
//! let schema = SchemaBuilder::new(sources).build(Clan::Xaela, Gender::Male)?;
//! println!("Faces: {}", schema.face_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use vanity_common as common;
pub use vanity_schema as schema;
pub use vanity_sheets as sheets;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use vanity_common::{Clan, CustomizeArray, CustomizeIndex, CustomizeValue, Gender};
    pub use vanity_schema::{
        CustomizationSchema, CustomizeOption, PresentationKind, SchemaBuilder, SchemaCache,
        SchemaError, SchemaSources,
    };
    pub use vanity_sheets::{MenuSheet, NpcCatalog, Palette};

    #[cfg(feature = "full")]
    pub use vanity_sheets::{SheetBundle, Sheets};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
