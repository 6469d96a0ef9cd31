//! Ruleset data the statistics need from the loaded mod.
use serde::{Deserialize, Serialize};

const DEFAULT_RULESET_DATA: &str = include_str!("../assets/ruleset.json");

/// Subset of the game ruleset consulted by the statistics screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ruleset {
    /// Every craft type the player can own, by catalog key.
    #[serde(default)]
    pub crafts: Vec<String>,
}

impl Ruleset {
    /// Load a ruleset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a ruleset.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Ruleset bundled with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_RULESET_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn with_crafts<I, S>(crafts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            crafts: crafts.into_iter().map(Into::into).collect(),
        }
    }
}
