//! Debrief Statistics Engine
//!
//! Platform-agnostic end-of-campaign statistics for a finished playthrough.
//! This crate aggregates a loaded save into the totals shown on the final
//! statistics screen without UI or platform-specific dependencies.

pub mod catalog;
pub mod constants;
pub mod format;
pub mod i18n;
pub mod mission;
pub mod numbers;
pub mod result;
pub mod ruleset;
pub mod save;
pub mod session;
pub mod soldier;
pub mod statistics;

// Re-export commonly used types
pub use catalog::CatalogCounters;
pub use format::{NumberFormat, format_funding, format_number};
pub use i18n::{KeyEcho, Localizer, StringTable};
pub use mission::MissionStatistics;
pub use result::{StatRow, StatisticsScreen, compute_rows, screen_title, statistic_rows};
pub use ruleset::Ruleset;
pub use save::{Base, Country, Difficulty, GameEnding, GameTime, SaveError, SavedGame};
pub use session::{GameSession, InputAction, Screen};
pub use soldier::{Faction, KillRecord, ServiceDiary, Soldier, SoldierDeath, UnitStatus};
pub use statistics::{CampaignStatistics, merge_weapon_kills, most_effective_weapon};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the ruleset the campaign was played with
    ///
    /// # Errors
    ///
    /// Returns an error if the ruleset cannot be loaded.
    fn load_ruleset(&self) -> Result<Ruleset, Self::Error>;

    /// Load the string table for the player's language
    ///
    /// # Errors
    ///
    /// Returns an error if the string table cannot be loaded or parsed.
    fn load_strings(&self) -> Result<StringTable, Self::Error>;
}

/// Trait for abstracting save lookups
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a saved campaign
    ///
    /// # Errors
    ///
    /// Returns an error if the save exists but cannot be read.
    fn load_game(&self, save_name: &str) -> Result<Option<SavedGame>, Self::Error>;
}

/// Engine that opens finished campaigns on the statistics screen
pub struct StatisticsEngine<L, S>
where
    L: DataLoader,
    S: GameStorage,
{
    data_loader: L,
    storage: S,
}

impl<L, S> StatisticsEngine<L, S>
where
    L: DataLoader,
    S: GameStorage,
{
    /// Create a new engine with the provided data loader and storage
    pub const fn new(data_loader: L, storage: S) -> Self {
        Self {
            data_loader,
            storage,
        }
    }

    /// The loader used for rulesets and string tables
    pub const fn data_loader(&self) -> &L {
        &self.data_loader
    }

    /// Load a campaign into a session ready to show its statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be read.
    pub fn load_session(&self, save_name: &str) -> Result<Option<GameSession>, S::Error> {
        let loaded = self.storage.load_game(save_name)?;
        if loaded.is_none() {
            log::warn!("no saved campaign named {save_name}");
        }
        Ok(loaded.map(GameSession::new))
    }

    /// Build the statistics screen for a saved campaign
    ///
    /// # Errors
    ///
    /// Returns an error if the save, ruleset or string table cannot be loaded.
    pub fn open_statistics(
        &self,
        save_name: &str,
    ) -> Result<Option<StatisticsScreen>, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
        S::Error: Into<anyhow::Error>,
    {
        let Some(save) = self.storage.load_game(save_name).map_err(Into::into)? else {
            log::warn!("no saved campaign named {save_name}");
            return Ok(None);
        };
        let ruleset = self.data_loader.load_ruleset().map_err(Into::into)?;
        let strings = self.data_loader.load_strings().map_err(Into::into)?;
        log::debug!(
            "opening statistics for {save_name} with {} craft types and {} strings",
            ruleset.crafts.len(),
            strings.len()
        );
        Ok(Some(StatisticsScreen::build(&save, &ruleset, &strings)))
    }
}
