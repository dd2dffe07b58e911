//! Path resolution for moodwell data files

use crate::error::StoreError;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "MOODWELL_HOME";

/// Resolves standard paths for config and store files
#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    /// `$MOODWELL_HOME` if set, otherwise `~/.moodwell`
    pub fn new() -> Result<Self, StoreError> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                home: PathBuf::from(dir),
            });
        }

        let home = dirs::home_dir().ok_or(StoreError::NoHome)?;
        Ok(Self {
            home: home.join(".moodwell"),
        })
    }

    pub fn at(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.home.join("config.json")
    }

    /// Get store.json path
    pub fn store_file(&self) -> PathBuf {
        self.home.join("store.json")
    }
}
