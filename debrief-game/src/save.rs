//! Save-game snapshot read by the statistics screen.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogCounters;
use crate::mission::MissionStatistics;
use crate::soldier::Soldier;

/// Errors raised while loading or validating a save snapshot.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown difficulty index {0} (expected 0..=4)")]
    UnknownDifficulty(u8),
    #[error("invalid game date {day}/{month}/{year}")]
    InvalidDate { day: u8, month: u8, year: i32 },
}

/// Campaign difficulty, stored as its index in the save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    #[default]
    Beginner,
    Experienced,
    Veteran,
    Genius,
    Superhuman,
}

impl Difficulty {
    /// String table key naming this difficulty.
    #[must_use]
    pub const fn string_key(self) -> &'static str {
        match self {
            Self::Beginner => "STR_1_BEGINNER",
            Self::Experienced => "STR_2_EXPERIENCED",
            Self::Veteran => "STR_3_VETERAN",
            Self::Genius => "STR_4_GENIUS",
            Self::Superhuman => "STR_5_SUPERHUMAN",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = SaveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Beginner),
            1 => Ok(Self::Experienced),
            2 => Ok(Self::Veteran),
            3 => Ok(Self::Genius),
            4 => Ok(Self::Superhuman),
            other => Err(SaveError::UnknownDifficulty(other)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Beginner => 0,
            Difficulty::Experienced => 1,
            Difficulty::Veteran => 2,
            Difficulty::Genius => 3,
            Difficulty::Superhuman => 4,
        }
    }
}

/// How the campaign finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameEnding {
    /// Still running, or abandoned without a verdict
    #[default]
    None,
    Win,
    Lose,
}

impl GameEnding {
    /// Banner key shown above the date, if the campaign has a verdict.
    #[must_use]
    pub const fn banner_key(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Win => Some(crate::constants::STR_MISSION_WIN),
            Self::Lose => Some(crate::constants::STR_MISSION_LOSS),
        }
    }
}

/// Calendar date of the geoscape clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTime {
    pub day: u8,
    pub month: u8,
    pub year: i32,
}

impl Default for GameTime {
    fn default() -> Self {
        Self {
            day: 1,
            month: 1,
            year: 1999,
        }
    }
}

impl GameTime {
    #[must_use]
    pub const fn new(day: u8, month: u8, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Check the day and month are usable calendar values.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::InvalidDate`] when the month is outside 1..=12 or
    /// the day outside 1..=31.
    pub fn validate(&self) -> Result<(), SaveError> {
        if (1..=12).contains(&self.month) && (1..=31).contains(&self.day) {
            Ok(())
        } else {
            Err(SaveError::InvalidDate {
                day: self.day,
                month: self.month,
                year: self.year,
            })
        }
    }
}

/// A player base with its roster and staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Base {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub soldiers: Vec<Soldier>,
    #[serde(default)]
    pub scientists: u32,
    #[serde(default)]
    pub engineers: u32,
}

/// A funding nation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Country {
    pub kind: String,
    /// Signed a pact with the invaders.
    #[serde(default)]
    pub pact: bool,
}

/// Complete state of one playthrough, as loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SavedGame {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ending: GameEnding,
    #[serde(default)]
    pub time: GameTime,
    #[serde(default)]
    pub research_scores: Vec<i32>,
    #[serde(default)]
    pub incomes: Vec<i64>,
    #[serde(default)]
    pub expenditures: Vec<i64>,
    #[serde(default)]
    pub mission_statistics: Vec<MissionStatistics>,
    #[serde(default)]
    pub bases: Vec<Base>,
    #[serde(default)]
    pub dead_soldiers: Vec<Soldier>,
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub ids: CatalogCounters,
    #[serde(default)]
    pub discovered_research: Vec<String>,
}

impl SavedGame {
    /// Parse and validate a save snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown difficulty,
    /// or carries an impossible date.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let save: Self = serde_json::from_str(json)?;
        save.validate()?;
        Ok(save)
    }

    /// Serialize the snapshot back to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate values the type system cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns an error for an impossible campaign date.
    pub fn validate(&self) -> Result<(), SaveError> {
        self.time.validate()
    }

    /// Living soldiers across every base.
    pub fn active_soldiers(&self) -> impl Iterator<Item = &Soldier> {
        self.bases.iter().flat_map(|base| base.soldiers.iter())
    }

    /// Every soldier ever recruited: the living roster followed by the fallen.
    pub fn all_soldiers(&self) -> impl Iterator<Item = &Soldier> {
        self.active_soldiers().chain(self.dead_soldiers.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_roundtrips_through_index() {
        for index in 0..=4u8 {
            let difficulty = Difficulty::try_from(index).unwrap();
            assert_eq!(u8::from(difficulty), index);
        }
        assert!(matches!(
            Difficulty::try_from(5),
            Err(SaveError::UnknownDifficulty(5))
        ));
    }

    #[test]
    fn unknown_difficulty_is_rejected_on_load() {
        let err = SavedGame::from_json(r#"{"difficulty": 9}"#).unwrap_err();
        assert!(matches!(err, SaveError::Parse(_)));
        assert!(err.to_string().contains("difficulty"), "{err}");
    }

    #[test]
    fn invalid_date_is_rejected_on_load() {
        let err = SavedGame::from_json(r#"{"time": {"day": 3, "month": 13, "year": 2000}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SaveError::InvalidDate {
                day: 3,
                month: 13,
                year: 2000
            }
        ));
    }

    #[test]
    fn empty_object_loads_as_fresh_campaign() {
        let save = SavedGame::from_json("{}").unwrap();
        assert_eq!(save.difficulty, Difficulty::Beginner);
        assert_eq!(save.ending, GameEnding::None);
        assert_eq!(save.time, GameTime::default());
        assert!(save.mission_statistics.is_empty());
    }

    #[test]
    fn all_soldiers_lists_living_before_fallen() {
        let save = SavedGame {
            bases: vec![
                Base {
                    soldiers: vec![Soldier::new(1, "Ana")],
                    ..Base::default()
                },
                Base {
                    soldiers: vec![Soldier::new(2, "Bo")],
                    ..Base::default()
                },
            ],
            dead_soldiers: vec![Soldier::new(3, "Cy")],
            ..SavedGame::default()
        };
        let ids: Vec<u32> = save.all_soldiers().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ending_banner_keys() {
        assert_eq!(GameEnding::Win.banner_key(), Some("STR_MISSION_WIN"));
        assert_eq!(GameEnding::Lose.banner_key(), Some("STR_MISSION_LOSS"));
        assert_eq!(GameEnding::None.banner_key(), None);
    }

    #[test]
    fn json_roundtrip_keeps_difficulty_index() {
        let save = SavedGame {
            difficulty: Difficulty::Genius,
            ..SavedGame::default()
        };
        let json = save.to_json().unwrap();
        assert!(json.contains("\"difficulty\": 3"), "{json}");
        assert_eq!(SavedGame::from_json(&json).unwrap(), save);
    }
}
