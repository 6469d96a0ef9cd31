//! File-backed implementations of the engine's loading seams.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use debrief_game::{DataLoader, GameStorage, Ruleset, SaveError, SavedGame, StringTable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: SaveError,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the ruleset and string table from optional override files.
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    ruleset: Option<PathBuf>,
    strings: Option<PathBuf>,
}

impl FileLoader {
    pub const fn new(ruleset: Option<PathBuf>, strings: Option<PathBuf>) -> Self {
        Self { ruleset, strings }
    }
}

impl DataLoader for FileLoader {
    type Error = LoadError;

    fn load_ruleset(&self) -> Result<Ruleset, Self::Error> {
        let Some(path) = &self.ruleset else {
            return Ok(Ruleset::load_from_static());
        };
        log::debug!("loading ruleset from {}", path.display());
        Ruleset::from_json(&read(path)?).map_err(|source| LoadError::Json {
            path: path.clone(),
            source,
        })
    }

    fn load_strings(&self) -> Result<StringTable, Self::Error> {
        let english = StringTable::english();
        let Some(path) = &self.strings else {
            return Ok(english);
        };
        log::debug!("loading string table from {}", path.display());
        let lang = path
            .file_stem()
            .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned());
        StringTable::from_json(&lang, &read(path)?)
            .map(|table| table.with_fallback(&english))
            .map_err(|source| LoadError::Json {
                path: path.clone(),
                source,
            })
    }
}

/// Treats save names as paths on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl GameStorage for FileStorage {
    type Error = LoadError;

    fn load_game(&self, save_name: &str) -> Result<Option<SavedGame>, Self::Error> {
        let path = Path::new(save_name);
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        log::info!("loading campaign from {}", path.display());
        SavedGame::from_json(&json)
            .map(Some)
            .map_err(|source| LoadError::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}
