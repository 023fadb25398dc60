use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PREFS_PATH: &str = "prefs.toml";

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("could not access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk layout of the preferences file.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredPrefs {
    selected_category: i32,
}

/// Player preferences persisted between runs.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Prefs {
    pub selected_category: i32,
    path: PathBuf,
}

impl Prefs {
    /// Default preferences that will be saved to `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            selected_category: 0,
            path: path.into(),
        }
    }

    /// Reads preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        let stored = match fs::read_to_string(path) {
            Ok(text) => toml::from_str::<StoredPrefs>(&text)?,
            Err(err) if err.kind() == ErrorKind::NotFound => StoredPrefs::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            selected_category: stored.selected_category,
            path: path.to_path_buf(),
        })
    }

    pub fn save(&self) -> Result<(), PrefsError> {
        let stored = StoredPrefs {
            selected_category: self.selected_category,
        };
        fs::write(&self.path, toml::to_string_pretty(&stored)?)?;
        Ok(())
    }

    /// The stored category index if it addresses one of `count` categories.
    pub fn category_index(&self, count: usize) -> Option<usize> {
        usize::try_from(self.selected_category)
            .ok()
            .filter(|&index| index < count)
    }
}

pub(crate) fn load_prefs(mut commands: Commands) {
    let path = Path::new(PREFS_PATH);
    let prefs = Prefs::load(path).unwrap_or_else(|err| {
        warn!("Ignoring preferences at {}: {err}", path.display());
        Prefs::at(path)
    });
    debug!("Stored category index: {}", prefs.selected_category);
    commands.insert_resource(prefs);
}
