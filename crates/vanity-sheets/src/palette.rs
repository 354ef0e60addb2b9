//! Shared color palette.
//!
//! Every color-type customization (skin, hair, eyes, lips, tattoos, face
//! paint) indexes into one flat table of packed RGBA colors. Each clan and
//! gender owns a few fixed windows of that table.

use crate::{Error, Result};

/// Size of one packed color in bytes.
pub const COLOR_SIZE: usize = 4;

/// A packed RGBA color, red in the lowest byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawColor(pub u32);

impl RawColor {
    /// Fully transparent black, returned for out-of-range reads.
    pub const TRANSPARENT: Self = Self(0);

    /// Create a color from components.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Get the packed value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Get the components as `[r, g, b, a]`.
    pub const fn to_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// Read access to the shared palette.
pub trait PaletteSource: Send + Sync {
    /// Get the color at `index`, or [`RawColor::TRANSPARENT`] if there is none.
    fn color(&self, index: u32) -> RawColor;
}

/// The palette table held in memory.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<RawColor>,
}

impl Palette {
    /// Create a palette from colors.
    pub fn new(colors: Vec<RawColor>) -> Self {
        Self { colors }
    }

    /// Parse a palette from packed little-endian RGBA colors.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() % COLOR_SIZE != 0 {
            return Err(Error::InvalidSize {
                sheet: "palette",
                record_size: COLOR_SIZE,
                actual: data.len(),
            });
        }

        let colors = data
            .chunks_exact(COLOR_SIZE)
            .map(|c| RawColor(u32::from_le_bytes([c[0], c[1], c[2], c[3]])))
            .collect();
        Ok(Self { colors })
    }

    /// Get all colors.
    pub fn colors(&self) -> &[RawColor] {
        &self.colors
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl PaletteSource for Palette {
    fn color(&self, index: u32) -> RawColor {
        self.colors
            .get(index as usize)
            .copied()
            .unwrap_or(RawColor::TRANSPARENT)
    }
}
