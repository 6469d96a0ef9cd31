//! Screen flow around the statistics window.
use crate::i18n::Localizer;
use crate::result::StatisticsScreen;
use crate::ruleset::Ruleset;
use crate::save::SavedGame;

/// Input the statistics window reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Mouse click on the OK button
    Click,
    /// The keyboard confirm key
    KeyConfirm,
    /// Anything else; ignored
    Other,
}

impl InputAction {
    #[must_use]
    pub const fn is_acknowledge(self) -> bool {
        matches!(self, Self::Click | Self::KeyConfirm)
    }
}

/// Screen currently shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Statistics(Box<StatisticsScreen>),
}

/// Owns the loaded campaign while its statistics are on display.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    saved_game: Option<SavedGame>,
    screen: Screen,
}

impl GameSession {
    #[must_use]
    pub fn new(saved_game: SavedGame) -> Self {
        Self {
            saved_game: Some(saved_game),
            screen: Screen::MainMenu,
        }
    }

    #[must_use]
    pub const fn saved_game(&self) -> Option<&SavedGame> {
        self.saved_game.as_ref()
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Open the statistics window for the held campaign.
    ///
    /// Returns `None` and stays put when no campaign is loaded.
    pub fn show_statistics(
        &mut self,
        ruleset: &Ruleset,
        localizer: &dyn Localizer,
    ) -> Option<&StatisticsScreen> {
        let save = self.saved_game.as_ref()?;
        self.screen = Screen::Statistics(Box::new(StatisticsScreen::build(
            save, ruleset, localizer,
        )));
        match &self.screen {
            Screen::Statistics(screen) => Some(screen.as_ref()),
            Screen::MainMenu => None,
        }
    }

    /// Feed one input to the active screen. Returns true if it was consumed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        if !matches!(self.screen, Screen::Statistics(_)) || !action.is_acknowledge() {
            return false;
        }
        self.acknowledge();
        true
    }

    /// Drop the campaign and return to the main menu.
    pub fn acknowledge(&mut self) {
        log::info!("statistics acknowledged; returning to main menu");
        self.saved_game = None;
        self.screen = Screen::MainMenu;
    }
}
