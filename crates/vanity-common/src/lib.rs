//! Common utilities for Vanity.
//!
//! This crate provides the foundational types shared by all Vanity crates:
//!
//! - [`SheetReader`] - Fixed-offset column reads over packed sheet rows
//! - [`Race`], [`Clan`], [`Gender`] - Character identity
//! - [`CustomizeIndex`], [`CustomizeValue`] - Appearance categories and their selectors
//! - [`CustomizeArray`] - The bit-packed 26-byte appearance array

mod customize;
mod error;
mod identity;
mod reader;

pub use customize::{CustomizeArray, CustomizeIndex, CustomizeValue, CUSTOMIZE_ARRAY_SIZE};
pub use error::{Error, Result};
pub use identity::{Clan, Gender, Race};
pub use reader::SheetReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
