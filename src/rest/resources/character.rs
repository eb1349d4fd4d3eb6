//! Character resource implementation.
//!
//! Characters are the persons, creatures and machines appearing in games.
//! Their gender and species travel on the wire as small integers; this module
//! maps them to [`CharacterGender`] and [`CharacterSpecies`].
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::query::{set_fields, set_filter, FilterOperator};
//! use igdb::rest::Resource;
//! use igdb::rest::resources::{Character, CharacterSpecies};
//!
//! let androids = Character::index(
//!     &client,
//!     &[
//!         set_fields(["name", "species"]),
//!         set_filter("species", FilterOperator::Equals, CharacterSpecies::Android.code().to_string()),
//!     ],
//! )
//! .await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, Resource};

/// The gender of a character.
///
/// Integers without a known meaning are kept as `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum CharacterGender {
    /// Wire value `1`.
    Male,
    /// Wire value `2`.
    Female,
    /// Wire value `3`.
    Other,
    /// Any other wire value.
    Unrecognized(u32),
}

impl CharacterGender {
    /// Returns the wire value.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
            Self::Other => 3,
            Self::Unrecognized(code) => code,
        }
    }
}

impl From<u32> for CharacterGender {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::Male,
            2 => Self::Female,
            3 => Self::Other,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<CharacterGender> for u32 {
    fn from(gender: CharacterGender) -> Self {
        gender.code()
    }
}

impl fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("GenderMale"),
            Self::Female => f.write_str("GenderFemale"),
            Self::Other => f.write_str("GenderOther"),
            Self::Unrecognized(code) => write!(f, "CharacterGender({code})"),
        }
    }
}

/// The species of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum CharacterSpecies {
    /// Wire value `1`.
    Human,
    /// Wire value `2`.
    Alien,
    /// Wire value `3`.
    Animal,
    /// Wire value `4`.
    Android,
    /// Wire value `5`.
    Unknown,
    /// Any other wire value.
    Unrecognized(u32),
}

impl CharacterSpecies {
    /// Returns the wire value.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Human => 1,
            Self::Alien => 2,
            Self::Animal => 3,
            Self::Android => 4,
            Self::Unknown => 5,
            Self::Unrecognized(code) => code,
        }
    }
}

impl From<u32> for CharacterSpecies {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::Human,
            2 => Self::Alien,
            3 => Self::Animal,
            4 => Self::Android,
            5 => Self::Unknown,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<CharacterSpecies> for u32 {
    fn from(species: CharacterSpecies) -> Self {
        species.code()
    }
}

impl fmt::Display for CharacterSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("SpeciesHuman"),
            Self::Alien => f.write_str("SpeciesAlien"),
            Self::Animal => f.write_str("SpeciesAnimal"),
            Self::Android => f.write_str("SpeciesAndroid"),
            Self::Unknown => f.write_str("SpeciesUnknown"),
            Self::Unrecognized(code) => write!(f, "CharacterSpecies({code})"),
        }
    }
}

/// A video game character.
///
/// # Fields
///
/// Every field is optional: the API only returns the fields selected with
/// [`set_fields`](crate::query::set_fields). `games`, `people` and `mug_shot`
/// hold IDs of the related records unless expanded with a dotted selector.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Character {
    /// The record ID.
    pub id: Option<u64>,

    /// Alternative names.
    pub akas: Option<Vec<String>>,

    /// Country of origin.
    pub country_name: Option<String>,

    /// When the record was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// Free-text description.
    pub description: Option<String>,

    /// IDs of the games the character appears in.
    pub games: Option<Vec<u64>>,

    /// The character's gender.
    pub gender: Option<CharacterGender>,

    /// ID of the character's mug shot image.
    pub mug_shot: Option<u64>,

    /// The character's name.
    pub name: Option<String>,

    /// IDs of the people who voiced or portrayed the character.
    pub people: Option<Vec<u64>>,

    /// URL-safe unique name.
    pub slug: Option<String>,

    /// The character's species.
    pub species: Option<CharacterSpecies>,

    /// When the record was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// The IGDB website address of the character.
    pub url: Option<String>,
}

impl Resource for Character {
    const NAME: &'static str = "Character";
    const ENDPOINT: Endpoint = Endpoint::new("characters");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_gender_mapping() {
        assert_eq!(CharacterGender::from(1), CharacterGender::Male);
        assert_eq!(CharacterGender::from(2), CharacterGender::Female);
        assert_eq!(CharacterGender::from(3), CharacterGender::Other);
        assert_eq!(CharacterGender::from(0), CharacterGender::Unrecognized(0));

        assert_eq!(CharacterGender::Male.to_string(), "GenderMale");
        assert_eq!(CharacterGender::Female.to_string(), "GenderFemale");
        assert_eq!(CharacterGender::Other.to_string(), "GenderOther");
        assert_eq!(CharacterGender::from(4).to_string(), "CharacterGender(4)");
        assert_eq!(CharacterGender::from(0).to_string(), "CharacterGender(0)");
    }

    #[test]
    fn test_species_mapping() {
        for (code, name) in [
            (1, "SpeciesHuman"),
            (2, "SpeciesAlien"),
            (3, "SpeciesAnimal"),
            (4, "SpeciesAndroid"),
            (5, "SpeciesUnknown"),
        ] {
            let species = CharacterSpecies::from(code);
            assert_eq!(species.to_string(), name);
            assert_eq!(species.code(), code);
        }
        assert_eq!(CharacterSpecies::from(6).to_string(), "CharacterSpecies(6)");
    }

    #[test]
    fn test_character_deserialization() {
        let json = r#"{
            "id": 6241,
            "akas": ["Jumpman"],
            "created_at": 1514332800,
            "gender": 1,
            "games": [1070, 1071],
            "name": "Mario",
            "slug": "mario",
            "species": 9,
            "updated_at": 1514419200
        }"#;

        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.id, Some(6241));
        assert_eq!(character.name.as_deref(), Some("Mario"));
        assert_eq!(character.gender, Some(CharacterGender::Male));
        assert_eq!(character.species, Some(CharacterSpecies::Unrecognized(9)));
        assert_eq!(character.games, Some(vec![1070, 1071]));
        assert_eq!(
            character.created_at,
            Some(Utc.timestamp_opt(1_514_332_800, 0).unwrap())
        );
        assert!(character.description.is_none());
    }

    #[test]
    fn test_missing_timestamps_default_to_none() {
        let character: Character = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(character.created_at.is_none());
        assert!(character.updated_at.is_none());
        assert!(character.gender.is_none());
    }

    #[test]
    fn test_enums_serialize_to_wire_values() {
        assert_eq!(serde_json::to_string(&CharacterGender::Other).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&CharacterSpecies::Unrecognized(42)).unwrap(),
            "42"
        );
    }
}
