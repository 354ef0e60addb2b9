//! Game-data sheets consumed by the Vanity schema builder.
//!
//! Everything here is read-only input: the shared color [`Palette`], the
//! per-clan/gender [`MenuRow`]s, the cosmetic [`FeatureTable`], the set of
//! existing icons, localized menu names and the [`NpcCatalog`].
//!
//! The schema builder reads these through small traits ([`PaletteSource`],
//! [`FeatureLookup`], [`IconSource`], [`NameSource`]) so a host can serve them
//! from its own caches; the concrete tables here are the in-memory versions.
//!
//! # Example
//!
//! ```
//! use vanity_common::{Clan, CustomizeIndex, Gender};
//! use vanity_sheets::{MenuRow, MenuSheet, SubMenu};
//!
//! let row = MenuRow::new(Clan::Raen, Gender::Female)
//!     .with_menu(SubMenu::sized(2, CustomizeIndex::Nose, 0, 4));
//! let sheet = MenuSheet::from_rows([row])?;
//!
//! let row = sheet.row(Clan::Raen, Gender::Female).unwrap();
//! assert_eq!(row.menu_size(CustomizeIndex::Nose), 4);
//! # Ok::<(), vanity_sheets::Error>(())
//! ```

mod error;
mod feature;
mod icons;
mod menu;
mod names;
mod npc;
mod palette;

#[cfg(feature = "serde")]
mod bundle;

pub use error::{Error, Result};
pub use feature::{CustomizeFeature, FeatureLookup, FeatureTable, RawFeatureRecord, FEATURE_RECORD_SIZE};
pub use icons::{IconSet, IconSource};
pub use menu::{
    MenuRow, MenuSheet, RawSubMenuHeader, SlotTable, SubMenu, FACE_PAINT_SLOTS, FACE_SLOTS,
    FEATURES_PER_FACE, HAIRSTYLE_SLOTS, HAIR_MAKE_SIZE, MENU_SLOTS, PARAM_SLOTS, ROW_SIZE,
    SUBMENU_STRIDE, UNUSED_SLOT,
};
pub use names::{NameSource, NameTable};
pub use npc::{NpcAppearance, NpcCatalog, NpcCatalogLoader, RawNpcRecord, NPC_RECORD_SIZE};
pub use palette::{Palette, PaletteSource, RawColor, COLOR_SIZE};

#[cfg(feature = "serde")]
pub use bundle::{MenuRowRecord, SheetBundle, Sheets};
