//! Appearance categories and the packed appearance array.
//!
//! A character's appearance is a 26-byte array. Most categories own a whole
//! byte, but several boolean categories are packed into bits of a shared byte:
//!
//! | Byte | Contents |
//! |------|----------|
//! | 7    | Highlights (bit 7) |
//! | 12   | Facial features 1-7 (bits 0-6), legacy tattoo (bit 7) |
//! | 16   | Eye shape (bits 0-6), small iris (bit 7) |
//! | 19   | Mouth (bits 0-6), lipstick (bit 7) |
//! | 24   | Face paint (bits 0-6), reversed face paint (bit 7) |

use crate::{Clan, Error, Gender, Result};

/// Size of the appearance array in bytes.
pub const CUSTOMIZE_ARRAY_SIZE: usize = 26;

/// An 8-bit selector scoped to one [`CustomizeIndex`].
///
/// `0` and `255` double as the off/on states of flag categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomizeValue(pub u8);

impl CustomizeValue {
    /// The "off" sentinel.
    pub const ZERO: Self = Self(0);
    /// The "on" sentinel.
    pub const MAX: Self = Self(u8::MAX);

    /// Get the raw byte.
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Check if this is the zero sentinel.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for CustomizeValue {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CustomizeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appearance categories, in appearance-array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CustomizeIndex {
    Race = 0,
    Gender,
    BodyType,
    Height,
    Clan,
    Face,
    Hairstyle,
    Highlights,
    SkinColor,
    EyeColorRight,
    HairColor,
    HighlightsColor,
    FacialFeature1,
    FacialFeature2,
    FacialFeature3,
    FacialFeature4,
    FacialFeature5,
    FacialFeature6,
    FacialFeature7,
    LegacyTattoo,
    TattooColor,
    Eyebrows,
    EyeColorLeft,
    EyeShape,
    SmallIris,
    Nose,
    Jaw,
    Mouth,
    Lipstick,
    LipColor,
    MuscleMass,
    TailShape,
    BustSize,
    FacePaint,
    FacePaintReversed,
    FacePaintColor,
}

impl CustomizeIndex {
    /// Number of categories.
    pub const COUNT: usize = 36;

    /// The seven facial feature toggles followed by the legacy tattoo.
    pub const FACIAL_FEATURES: [CustomizeIndex; 8] = [
        CustomizeIndex::FacialFeature1,
        CustomizeIndex::FacialFeature2,
        CustomizeIndex::FacialFeature3,
        CustomizeIndex::FacialFeature4,
        CustomizeIndex::FacialFeature5,
        CustomizeIndex::FacialFeature6,
        CustomizeIndex::FacialFeature7,
        CustomizeIndex::LegacyTattoo,
    ];

    /// Get all categories in ordinal order.
    pub const fn all() -> [CustomizeIndex; Self::COUNT] {
        use CustomizeIndex::*;
        [
            Race,
            Gender,
            BodyType,
            Height,
            Clan,
            Face,
            Hairstyle,
            Highlights,
            SkinColor,
            EyeColorRight,
            HairColor,
            HighlightsColor,
            FacialFeature1,
            FacialFeature2,
            FacialFeature3,
            FacialFeature4,
            FacialFeature5,
            FacialFeature6,
            FacialFeature7,
            LegacyTattoo,
            TattooColor,
            Eyebrows,
            EyeColorLeft,
            EyeShape,
            SmallIris,
            Nose,
            Jaw,
            Mouth,
            Lipstick,
            LipColor,
            MuscleMass,
            TailShape,
            BustSize,
            FacePaint,
            FacePaintReversed,
            FacePaintColor,
        ]
    }

    /// Get the ordinal of this category.
    #[inline]
    pub const fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Byte offset of this category in the appearance array.
    pub const fn byte_offset(&self) -> usize {
        use CustomizeIndex::*;
        match self {
            Race => 0,
            Gender => 1,
            BodyType => 2,
            Height => 3,
            Clan => 4,
            Face => 5,
            Hairstyle => 6,
            Highlights => 7,
            SkinColor => 8,
            EyeColorRight => 9,
            HairColor => 10,
            HighlightsColor => 11,
            FacialFeature1 | FacialFeature2 | FacialFeature3 | FacialFeature4 | FacialFeature5
            | FacialFeature6 | FacialFeature7 | LegacyTattoo => 12,
            TattooColor => 13,
            Eyebrows => 14,
            EyeColorLeft => 15,
            EyeShape | SmallIris => 16,
            Nose => 17,
            Jaw => 18,
            Mouth | Lipstick => 19,
            LipColor => 20,
            MuscleMass => 21,
            TailShape => 22,
            BustSize => 23,
            FacePaint | FacePaintReversed => 24,
            FacePaintColor => 25,
        }
    }

    /// Bit mask of this category within its byte.
    pub const fn mask(&self) -> u8 {
        use CustomizeIndex::*;
        match self {
            FacialFeature1 => 0x01,
            FacialFeature2 => 0x02,
            FacialFeature3 => 0x04,
            FacialFeature4 => 0x08,
            FacialFeature5 => 0x10,
            FacialFeature6 => 0x20,
            FacialFeature7 => 0x40,
            LegacyTattoo | Highlights | SmallIris | Lipstick | FacePaintReversed => 0x80,
            EyeShape | Mouth | FacePaint => 0x7F,
            _ => 0xFF,
        }
    }

    /// Whether this category is an on/off toggle stored as a single bit.
    pub const fn is_flag(&self) -> bool {
        use CustomizeIndex::*;
        matches!(
            self,
            Highlights
                | FacialFeature1
                | FacialFeature2
                | FacialFeature3
                | FacialFeature4
                | FacialFeature5
                | FacialFeature6
                | FacialFeature7
                | LegacyTattoo
                | SmallIris
                | Lipstick
                | FacePaintReversed
        )
    }

    /// Facial feature slot (0-7) of this category, if it is one.
    pub fn facial_feature_slot(&self) -> Option<usize> {
        Self::FACIAL_FEATURES.iter().position(|f| f == self)
    }

    /// Get the identifier-style name of this category.
    pub const fn name(&self) -> &'static str {
        use CustomizeIndex::*;
        match self {
            Race => "Race",
            Gender => "Gender",
            BodyType => "BodyType",
            Height => "Height",
            Clan => "Clan",
            Face => "Face",
            Hairstyle => "Hairstyle",
            Highlights => "Highlights",
            SkinColor => "SkinColor",
            EyeColorRight => "EyeColorRight",
            HairColor => "HairColor",
            HighlightsColor => "HighlightsColor",
            FacialFeature1 => "FacialFeature1",
            FacialFeature2 => "FacialFeature2",
            FacialFeature3 => "FacialFeature3",
            FacialFeature4 => "FacialFeature4",
            FacialFeature5 => "FacialFeature5",
            FacialFeature6 => "FacialFeature6",
            FacialFeature7 => "FacialFeature7",
            LegacyTattoo => "LegacyTattoo",
            TattooColor => "TattooColor",
            Eyebrows => "Eyebrows",
            EyeColorLeft => "EyeColorLeft",
            EyeShape => "EyeShape",
            SmallIris => "SmallIris",
            Nose => "Nose",
            Jaw => "Jaw",
            Mouth => "Mouth",
            Lipstick => "Lipstick",
            LipColor => "LipColor",
            MuscleMass => "MuscleMass",
            TailShape => "TailShape",
            BustSize => "BustSize",
            FacePaint => "FacePaint",
            FacePaintReversed => "FacePaintReversed",
            FacePaintColor => "FacePaintColor",
        }
    }

    /// Display name used when the game data supplies none.
    pub const fn default_name(&self) -> &'static str {
        use CustomizeIndex::*;
        match self {
            Race => "Race",
            Gender => "Gender",
            BodyType => "Body Type",
            Height => "Height",
            Clan => "Clan",
            Face => "Face",
            Hairstyle => "Hairstyle",
            Highlights => "Highlights",
            SkinColor => "Skin Color",
            EyeColorRight => "Right Eye Color",
            HairColor => "Hair Color",
            HighlightsColor => "Highlights Color",
            FacialFeature1 => "Facial Feature #1",
            FacialFeature2 => "Facial Feature #2",
            FacialFeature3 => "Facial Feature #3",
            FacialFeature4 => "Facial Feature #4",
            FacialFeature5 => "Facial Feature #5",
            FacialFeature6 => "Facial Feature #6",
            FacialFeature7 => "Facial Feature #7",
            LegacyTattoo => "Legacy Tattoo",
            TattooColor => "Tattoo Color",
            Eyebrows => "Eyebrows",
            EyeColorLeft => "Left Eye Color",
            EyeShape => "Eye Shape",
            SmallIris => "Small Iris",
            Nose => "Nose",
            Jaw => "Jaw",
            Mouth => "Mouth",
            Lipstick => "Lipstick",
            LipColor => "Lip Color",
            MuscleMass => "Muscle Tone",
            TailShape => "Tail Shape",
            BustSize => "Bust Size",
            FacePaint => "Face Paint",
            FacePaintReversed => "Reverse Face Paint",
            FacePaintColor => "Face Paint Color",
        }
    }
}

impl TryFrom<u8> for CustomizeIndex {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        CustomizeIndex::all()
            .get(value as usize)
            .copied()
            .ok_or(Error::UnknownIndex(value))
    }
}

impl std::fmt::Display for CustomizeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The packed appearance array of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomizeArray(pub [u8; CUSTOMIZE_ARRAY_SIZE]);

impl CustomizeArray {
    /// Create an array from raw bytes.
    pub const fn from_bytes(bytes: [u8; CUSTOMIZE_ARRAY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn bytes(&self) -> &[u8; CUSTOMIZE_ARRAY_SIZE] {
        &self.0
    }

    /// Read one category.
    ///
    /// Flags read back as [`CustomizeValue::ZERO`] or [`CustomizeValue::MAX`].
    pub fn get(&self, index: CustomizeIndex) -> CustomizeValue {
        let masked = self.0[index.byte_offset()] & index.mask();
        if index.is_flag() {
            if masked != 0 {
                CustomizeValue::MAX
            } else {
                CustomizeValue::ZERO
            }
        } else {
            CustomizeValue(masked)
        }
    }

    /// Write one category, leaving bits owned by other categories untouched.
    pub fn set(&mut self, index: CustomizeIndex, value: CustomizeValue) {
        let byte = &mut self.0[index.byte_offset()];
        let mask = index.mask();
        let bits = if index.is_flag() {
            if value.is_zero() {
                0
            } else {
                mask
            }
        } else {
            value.0 & mask
        };
        *byte = (*byte & !mask) | bits;
    }

    /// Get the clan, if the clan byte is valid.
    pub fn clan(&self) -> Result<Clan> {
        Clan::try_from(self.0[CustomizeIndex::Clan.byte_offset()])
    }

    /// Get the gender, if the gender byte is valid.
    pub fn gender(&self) -> Result<Gender> {
        Gender::try_from(self.0[CustomizeIndex::Gender.byte_offset()])
    }

    /// Get the face selector.
    pub fn face(&self) -> CustomizeValue {
        self.get(CustomizeIndex::Face)
    }
}
