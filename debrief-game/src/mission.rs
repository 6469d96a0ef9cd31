//! Completed mission records.
use serde::{Deserialize, Serialize};

use crate::constants::NIGHT_DAYLIGHT_THRESHOLD;
use crate::save::GameTime;

/// Outcome summary of one completed mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MissionStatistics {
    pub id: u32,
    #[serde(default)]
    pub mission_type: String,
    #[serde(default)]
    pub time: GameTime,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub alien_race: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub score: i32,
    /// Shade level of the battlescape, 0 in full daylight.
    #[serde(default)]
    pub daylight: u8,
}

impl MissionStatistics {
    #[must_use]
    pub fn new(id: u32, success: bool, score: i32, daylight: u8) -> Self {
        Self {
            id,
            success,
            score,
            daylight,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_night(&self) -> bool {
        self.daylight > NIGHT_DAYLIGHT_THRESHOLD
    }
}
