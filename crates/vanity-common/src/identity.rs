//! Character identity: race, clan and gender.
//!
//! Every playable race is split into two clans, and each clan has its own
//! customization data per gender. The clan byte is what selects the data rows;
//! the race is derived from it.

use crate::{Error, Result};

/// Playable races.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Race {
    Hyur = 1,
    Elezen = 2,
    Lalafell = 3,
    Miqote = 4,
    Roegadyn = 5,
    AuRa = 6,
    Hrothgar = 7,
    Viera = 8,
}

impl Race {
    /// Get the name of this race.
    pub const fn name(&self) -> &'static str {
        match self {
            Race::Hyur => "Hyur",
            Race::Elezen => "Elezen",
            Race::Lalafell => "Lalafell",
            Race::Miqote => "Miqo'te",
            Race::Roegadyn => "Roegadyn",
            Race::AuRa => "Au Ra",
            Race::Hrothgar => "Hrothgar",
            Race::Viera => "Viera",
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Playable clans, two per race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Clan {
    Midlander = 1,
    Highlander = 2,
    Wildwood = 3,
    Duskwight = 4,
    Plainsfolk = 5,
    Dunesfolk = 6,
    SeekerOfTheSun = 7,
    KeeperOfTheMoon = 8,
    SeaWolf = 9,
    Hellsguard = 10,
    Raen = 11,
    Xaela = 12,
    Hellion = 13,
    Lost = 14,
    Rava = 15,
    Veena = 16,
}

impl Clan {
    /// Number of playable clans.
    pub const COUNT: usize = 16;

    /// Get all clans in id order.
    pub const fn all() -> [Clan; Self::COUNT] {
        [
            Clan::Midlander,
            Clan::Highlander,
            Clan::Wildwood,
            Clan::Duskwight,
            Clan::Plainsfolk,
            Clan::Dunesfolk,
            Clan::SeekerOfTheSun,
            Clan::KeeperOfTheMoon,
            Clan::SeaWolf,
            Clan::Hellsguard,
            Clan::Raen,
            Clan::Xaela,
            Clan::Hellion,
            Clan::Lost,
            Clan::Rava,
            Clan::Veena,
        ]
    }

    /// Get the raw clan byte.
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    /// Get the race this clan belongs to.
    pub const fn race(&self) -> Race {
        match self {
            Clan::Midlander | Clan::Highlander => Race::Hyur,
            Clan::Wildwood | Clan::Duskwight => Race::Elezen,
            Clan::Plainsfolk | Clan::Dunesfolk => Race::Lalafell,
            Clan::SeekerOfTheSun | Clan::KeeperOfTheMoon => Race::Miqote,
            Clan::SeaWolf | Clan::Hellsguard => Race::Roegadyn,
            Clan::Raen | Clan::Xaela => Race::AuRa,
            Clan::Hellion | Clan::Lost => Race::Hrothgar,
            Clan::Rava | Clan::Veena => Race::Viera,
        }
    }

    /// Whether this clan is furred.
    ///
    /// Furred clans have face-dependent hairstyles, fur patterns in place of
    /// lip colors, and no lipstick.
    pub const fn is_furred(&self) -> bool {
        matches!(self.race(), Race::Hrothgar)
    }

    /// Get the name of this clan.
    pub const fn name(&self) -> &'static str {
        match self {
            Clan::Midlander => "Midlander",
            Clan::Highlander => "Highlander",
            Clan::Wildwood => "Wildwood",
            Clan::Duskwight => "Duskwight",
            Clan::Plainsfolk => "Plainsfolk",
            Clan::Dunesfolk => "Dunesfolk",
            Clan::SeekerOfTheSun => "Seeker of the Sun",
            Clan::KeeperOfTheMoon => "Keeper of the Moon",
            Clan::SeaWolf => "Sea Wolf",
            Clan::Hellsguard => "Hellsguard",
            Clan::Raen => "Raen",
            Clan::Xaela => "Xaela",
            Clan::Hellion => "Hellion",
            Clan::Lost => "The Lost",
            Clan::Rava => "Rava",
            Clan::Veena => "Veena",
        }
    }

    /// Parse a clan from its name, ignoring case, spaces and apostrophes.
    pub fn from_name(name: &str) -> Option<Clan> {
        let wanted: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Clan::all().into_iter().find(|clan| {
            let normalized: String = clan
                .name()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect();
            normalized == wanted || normalized.strip_prefix("the") == Some(wanted.as_str())
        })
    }
}

impl TryFrom<u8> for Clan {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1..=16 => Ok(Clan::all()[value as usize - 1]),
            _ => Err(Error::UnknownClan(value)),
        }
    }
}

impl std::fmt::Display for Clan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Character gender as stored in the appearance array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Gender {
    Male = 0,
    Female = 1,
}

impl Gender {
    /// Get both genders.
    pub const fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }

    /// Get the raw gender byte.
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    /// Get the name of this gender.
    pub const fn name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl TryFrom<u8> for Gender {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Gender::Male),
            1 => Ok(Gender::Female),
            _ => Err(Error::UnknownGender(value)),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clan_ids_roundtrip_through_bytes() {
        for clan in Clan::all() {
            assert_eq!(Clan::try_from(clan.id()).unwrap(), clan);
        }
        assert!(Clan::try_from(0).is_err());
        assert!(Clan::try_from(17).is_err());
    }

    #[test]
    fn test_only_hrothgar_is_furred() {
        let furred: Vec<Clan> = Clan::all().into_iter().filter(Clan::is_furred).collect();
        assert_eq!(furred, vec![Clan::Hellion, Clan::Lost]);
    }

    #[test]
    fn test_clan_from_name() {
        assert_eq!(Clan::from_name("seeker of the sun"), Some(Clan::SeekerOfTheSun));
        assert_eq!(Clan::from_name("SeaWolf"), Some(Clan::SeaWolf));
        assert_eq!(Clan::from_name("lost"), Some(Clan::Lost));
        assert_eq!(Clan::from_name("the lost"), Some(Clan::Lost));
        assert_eq!(Clan::from_name("goblin"), None);
    }
}
