//! Per-clan/gender menu metadata rows.
//!
//! Each (clan, gender) pair has one menu row describing the character
//! creation menus offered for it, plus a "hair make" block listing the
//! hairstyles and face paints in fixed-stride slots.
//!
//! # Row Layout
//!
//! | Offset   | Size                | Contents |
//! |----------|---------------------|----------|
//! | `0x0000` | 4                   | race, clan, gender, reserved |
//! | `0x0004` | 28 × 408            | sub-menus (see below) |
//! | `0x2CA4` | 8 × 7 × 4           | facial feature icons per face |
//! | `0x2D84` | `0x268`             | hair make block |
//!
//! A sub-menu is an 8-byte header (`menu_id: u32`, `category: u8`,
//! `kind: u8`, `size: u8`, `default: u8`) followed by 100 `u32` parameters.
//! A category byte of `0xFF` marks an unused sub-menu slot.
//!
//! The hair make block starts with a 16-byte header (race, clan, gender,
//! reserved) followed by the [`HAIRSTYLE_SLOTS`] and [`FACE_PAINT_SLOTS`]
//! tables. Unused slots hold [`UNUSED_SLOT`].

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use vanity_common::{Clan, CustomizeIndex, Gender, SheetReader};

use crate::{Error, Result};

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Number of sub-menu slots in a row.
pub const MENU_SLOTS: usize = 28;

/// Number of parameter values per sub-menu.
pub const PARAM_SLOTS: usize = 100;

/// Byte stride of one sub-menu.
pub const SUBMENU_STRIDE: usize = std::mem::size_of::<RawSubMenuHeader>() + PARAM_SLOTS * 4;

/// Number of faces that carry facial feature icons.
pub const FACE_SLOTS: usize = 8;

/// Number of facial feature toggles per face (excluding the legacy tattoo).
pub const FEATURES_PER_FACE: usize = 7;

/// Size of the hair make block in bytes.
pub const HAIR_MAKE_SIZE: usize = 0x268;

/// Size of one serialized menu row.
pub const ROW_SIZE: usize =
    4 + MENU_SLOTS * SUBMENU_STRIDE + FACE_SLOTS * FEATURES_PER_FACE * 4 + HAIR_MAKE_SIZE;

/// Category byte of an unused sub-menu slot.
const UNUSED_MENU: u8 = 0xFF;

/// Slot value marking an unused hairstyle or face paint slot.
pub const UNUSED_SLOT: u32 = 0xFFFF_FFFF;

/// A fixed-stride table of `u32` slots inside a byte block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTable {
    /// Offset of the first slot.
    pub offset: usize,
    /// Distance between consecutive slots.
    pub stride: usize,
    /// Number of slots.
    pub slots: usize,
}

/// Hairstyle slots of the hair make block.
pub const HAIRSTYLE_SLOTS: SlotTable = SlotTable {
    offset: 0x10,
    stride: 4,
    slots: 100,
};

/// Face paint slots of the hair make block.
pub const FACE_PAINT_SLOTS: SlotTable = SlotTable {
    offset: 0x1A0,
    stride: 4,
    slots: 50,
};

impl SlotTable {
    /// Iterate the used slots as `(position, raw)`, position being 1-based.
    ///
    /// Slots holding [`UNUSED_SLOT`] are skipped; a truncated block ends the
    /// iteration early.
    pub fn entries<'a>(&self, block: &'a [u8]) -> impl Iterator<Item = (usize, u32)> + 'a {
        let table = *self;
        let reader = SheetReader::new(block);
        (0..table.slots)
            .map_while(move |i| {
                reader
                    .u32_at(table.offset + i * table.stride)
                    .ok()
                    .map(|raw| (i + 1, raw))
            })
            .filter(|&(_, raw)| raw != UNUSED_SLOT)
    }

    /// Fill the table with `values`, marking the remaining slots unused.
    ///
    /// Values beyond the slot count are ignored.
    pub fn fill(&self, block: &mut [u8], values: &[u32]) {
        for i in 0..self.slots {
            let raw = values.get(i).copied().unwrap_or(UNUSED_SLOT);
            let start = self.offset + i * self.stride;
            if let Some(slot) = block.get_mut(start..start + 4) {
                slot.copy_from_slice(&raw.to_le_bytes());
            }
        }
    }
}

/// On-disk sub-menu header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct RawSubMenuHeader {
    /// Text id of the menu title.
    pub menu_id: u32,
    /// Category the menu edits, or `0xFF` if unused.
    pub category: u8,
    /// Presentation kind byte.
    pub kind: u8,
    /// Number of meaningful parameters.
    pub size: u8,
    /// Default selection.
    pub default_value: u8,
}

/// One character creation sub-menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubMenu {
    /// Text id of the menu title.
    pub menu_id: u32,
    /// Category the menu edits.
    pub category: CustomizeIndex,
    /// Presentation kind byte.
    pub kind: u8,
    /// Declared number of entries.
    pub size: u8,
    /// Default selection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_value: u8,
    /// Raw parameter values; only the first `size` are meaningful.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<u32>,
}

impl SubMenu {
    /// Create a sub-menu whose declared size is the number of parameters.
    pub fn new(menu_id: u32, category: CustomizeIndex, kind: u8, params: Vec<u32>) -> Self {
        Self {
            menu_id,
            category,
            kind,
            size: params.len().min(PARAM_SLOTS) as u8,
            default_value: 0,
            params,
        }
    }

    /// Create a sub-menu that only declares a size (sliders and plain lists).
    pub fn sized(menu_id: u32, category: CustomizeIndex, kind: u8, size: u8) -> Self {
        Self {
            menu_id,
            category,
            kind,
            size,
            default_value: 0,
            params: Vec::new(),
        }
    }

    /// Get the meaningful raw values.
    pub fn values(&self) -> &[u32] {
        &self.params[..self.params.len().min(self.size as usize)]
    }

    fn read(reader: &mut SheetReader<'_>) -> Result<Option<Self>> {
        let header = reader.read_struct::<RawSubMenuHeader>()?;
        let params = reader.read_u32_array(PARAM_SLOTS)?;

        if header.category == UNUSED_MENU {
            return Ok(None);
        }

        let category = CustomizeIndex::try_from(header.category)?;
        let size = header.size.min(PARAM_SLOTS as u8);
        let mut params = params;
        params.truncate(size as usize);

        Ok(Some(Self {
            menu_id: header.menu_id,
            category,
            kind: header.kind,
            size,
            default_value: header.default_value,
            params,
        }))
    }

    fn write(&self, out: &mut Vec<u8>) {
        let header = RawSubMenuHeader {
            menu_id: self.menu_id,
            category: self.category as u8,
            kind: self.kind,
            size: self.size,
            default_value: self.default_value,
        };
        out.extend_from_slice(header.as_bytes());
        for i in 0..PARAM_SLOTS {
            let raw = self.params.get(i).copied().unwrap_or(0);
            out.extend_from_slice(&raw.to_le_bytes());
        }
    }
}

/// Menu metadata for one (clan, gender) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    clan: Clan,
    gender: Gender,
    menus: Vec<SubMenu>,
    feature_icons: Vec<[u32; FEATURES_PER_FACE]>,
    hair_make: Vec<u8>,
}

impl MenuRow {
    /// Create a row with no menus, no facial feature icons and no hair slots.
    pub fn new(clan: Clan, gender: Gender) -> Self {
        let mut hair_make = vec![0u8; HAIR_MAKE_SIZE];
        hair_make[0] = clan.race() as u8;
        hair_make[1] = clan.id();
        hair_make[2] = gender.id();
        HAIRSTYLE_SLOTS.fill(&mut hair_make, &[]);
        FACE_PAINT_SLOTS.fill(&mut hair_make, &[]);

        Self {
            clan,
            gender,
            menus: Vec::new(),
            feature_icons: vec![[0; FEATURES_PER_FACE]; FACE_SLOTS],
            hair_make,
        }
    }

    /// Add a sub-menu, builder style.
    pub fn with_menu(mut self, menu: SubMenu) -> Self {
        self.push_menu(menu);
        self
    }

    /// Add a sub-menu.
    ///
    /// Rows hold at most [`MENU_SLOTS`] sub-menus; extra ones are dropped.
    pub fn push_menu(&mut self, menu: SubMenu) {
        if self.menus.len() < MENU_SLOTS {
            self.menus.push(menu);
        }
    }

    /// Set the raw facial feature icons of a 1-based face.
    pub fn set_facial_feature_icons(&mut self, face: usize, icons: [u32; FEATURES_PER_FACE]) {
        if let Some(slot) = face.checked_sub(1).and_then(|i| self.feature_icons.get_mut(i)) {
            *slot = icons;
        }
    }

    /// Write the hairstyle slots.
    pub fn set_hairstyles(&mut self, raw: &[u32]) {
        HAIRSTYLE_SLOTS.fill(&mut self.hair_make, raw);
    }

    /// Write the face paint slots.
    pub fn set_face_paints(&mut self, raw: &[u32]) {
        FACE_PAINT_SLOTS.fill(&mut self.hair_make, raw);
    }

    /// Get the clan.
    pub fn clan(&self) -> Clan {
        self.clan
    }

    /// Get the gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Get all sub-menus.
    pub fn menus(&self) -> &[SubMenu] {
        &self.menus
    }

    /// Find the first sub-menu editing `category`.
    pub fn menu(&self, category: CustomizeIndex) -> Option<&SubMenu> {
        self.menus.iter().find(|m| m.category == category)
    }

    /// Declared size of the sub-menu for `category`, or 0 if absent.
    pub fn menu_size(&self, category: CustomizeIndex) -> u8 {
        self.menu(category).map_or(0, |m| m.size)
    }

    /// Raw facial feature icons of a 1-based face; zeros if out of range.
    pub fn facial_feature_icons(&self, face: usize) -> [u32; FEATURES_PER_FACE] {
        face.checked_sub(1)
            .and_then(|i| self.feature_icons.get(i))
            .copied()
            .unwrap_or_default()
    }

    /// Get the raw hair make block.
    pub fn hair_make(&self) -> &[u8] {
        &self.hair_make
    }

    /// Parse a row from its fixed binary layout.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = SheetReader::new(data);

        let _race = reader.read_u8()?;
        let clan = Clan::try_from(reader.read_u8()?)?;
        let gender = Gender::try_from(reader.read_u8()?)?;
        let _reserved = reader.read_u8()?;

        let mut menus = Vec::new();
        for _ in 0..MENU_SLOTS {
            if let Some(menu) = SubMenu::read(&mut reader)? {
                menus.push(menu);
            }
        }

        let mut feature_icons = Vec::with_capacity(FACE_SLOTS);
        for _ in 0..FACE_SLOTS {
            let mut icons = [0u32; FEATURES_PER_FACE];
            for icon in &mut icons {
                *icon = reader.read_u32()?;
            }
            feature_icons.push(icons);
        }

        let hair_make = reader.read_bytes(HAIR_MAKE_SIZE)?.to_vec();

        Ok(Self {
            clan,
            gender,
            menus,
            feature_icons,
            hair_make,
        })
    }

    /// Convert to bytes in the fixed binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(ROW_SIZE);
        bytes.extend_from_slice(&[self.clan.race() as u8, self.clan.id(), self.gender.id(), 0]);

        for menu in &self.menus {
            menu.write(&mut bytes);
        }
        for _ in self.menus.len()..MENU_SLOTS {
            let mut unused = vec![0u8; SUBMENU_STRIDE];
            unused[4] = UNUSED_MENU;
            bytes.extend_from_slice(&unused);
        }

        for icons in &self.feature_icons {
            for icon in icons {
                bytes.extend_from_slice(&icon.to_le_bytes());
            }
        }

        bytes.extend_from_slice(&self.hair_make);
        bytes
    }
}

/// All menu rows, keyed by clan and gender.
#[derive(Debug, Clone, Default)]
pub struct MenuSheet {
    rows: FxHashMap<(Clan, Gender), MenuRow>,
}

impl MenuSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from rows, rejecting duplicates.
    pub fn from_rows(rows: impl IntoIterator<Item = MenuRow>) -> Result<Self> {
        let mut sheet = Self::new();
        for row in rows {
            sheet.insert(row)?;
        }
        Ok(sheet)
    }

    /// Parse a sheet of back-to-back rows.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() % ROW_SIZE != 0 {
            return Err(Error::InvalidSize {
                sheet: "menu",
                record_size: ROW_SIZE,
                actual: data.len(),
            });
        }
        let rows = data
            .chunks_exact(ROW_SIZE)
            .map(MenuRow::parse)
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Add a row.
    pub fn insert(&mut self, row: MenuRow) -> Result<()> {
        let key = (row.clan(), row.gender());
        if self.rows.contains_key(&key) {
            return Err(Error::DuplicateRow {
                clan: key.0,
                gender: key.1,
            });
        }
        self.rows.insert(key, row);
        Ok(())
    }

    /// Get the row for a clan and gender.
    pub fn row(&self, clan: Clan, gender: Gender) -> Option<&MenuRow> {
        self.rows.get(&(clan, gender))
    }

    /// Iterate all rows in no particular order.
    pub fn rows(&self) -> impl Iterator<Item = &MenuRow> {
        self.rows.values()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
