use serde::de::DeserializeOwned;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::badge::{BadgeCatalog, CatalogError};
use crate::challenge::{
    default_challenges, validate_challenges, ChallengeDefinition, ChallengeError,
};
use crate::level::{LadderError, LevelLadder};
use crate::trip::TravelSnapshot;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid badge catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid level ladder: {0}")]
    Ladder(#[from] LadderError),

    #[error("Invalid challenge list: {0}")]
    Challenges(#[from] ChallengeError),
}

/// Application configuration loaded from environment variables.
///
/// Every file path is optional; without one the built-in travel defaults
/// (or an empty snapshot) are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub snapshot_path: Option<PathBuf>,
    pub badges_path: Option<PathBuf>,
    pub levels_path: Option<PathBuf>,
    pub challenges_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            snapshot_path: None,
            badges_path: None,
            levels_path: None,
            challenges_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = match lookup("TRIPQUEST_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: "TRIPQUEST_PORT",
                value,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("TRIPQUEST_HOST").unwrap_or(defaults.host),
            port,
            snapshot_path: lookup("TRIPQUEST_SNAPSHOT").map(PathBuf::from),
            badges_path: lookup("TRIPQUEST_BADGES").map(PathBuf::from),
            levels_path: lookup("TRIPQUEST_LEVELS").map(PathBuf::from),
            challenges_path: lookup("TRIPQUEST_CHALLENGES").map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn load_catalog(&self) -> Result<BadgeCatalog, ConfigError> {
        match &self.badges_path {
            Some(path) => {
                let catalog = BadgeCatalog::new(read_json(path)?)?;
                info!(path = %path.display(), badges = catalog.len(), "Loaded badge catalog");
                Ok(catalog)
            }
            None => Ok(BadgeCatalog::travel_defaults()),
        }
    }

    pub fn load_ladder(&self) -> Result<LevelLadder, ConfigError> {
        match &self.levels_path {
            Some(path) => {
                let ladder = LevelLadder::new(read_json(path)?)?;
                info!(path = %path.display(), levels = ladder.len(), "Loaded level ladder");
                Ok(ladder)
            }
            None => Ok(LevelLadder::travel_defaults()),
        }
    }

    pub fn load_challenges(&self) -> Result<Vec<ChallengeDefinition>, ConfigError> {
        match &self.challenges_path {
            Some(path) => {
                let challenges = validate_challenges(read_json(path)?)?;
                info!(path = %path.display(), challenges = challenges.len(), "Loaded challenges");
                Ok(challenges)
            }
            None => Ok(default_challenges()),
        }
    }

    pub fn load_snapshot(&self) -> Result<TravelSnapshot, ConfigError> {
        match &self.snapshot_path {
            Some(path) => {
                let snapshot: TravelSnapshot = read_json(path)?;
                info!(
                    path = %path.display(),
                    users = snapshot.users.len(),
                    trips = snapshot.trips.len(),
                    "Loaded travel snapshot"
                );
                Ok(snapshot)
            }
            None => Ok(TravelSnapshot::default()),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
