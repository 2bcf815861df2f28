//! Server configuration from environment variables
//!
//! - `PORT` - listen port (default 3000)
//! - `PARCELS_FILE` - optional JSON parcel catalog (default: built-in catalog)
//! - `DEFAULT_PERSONA` - persona used when a request names none (default Data Center)

use crate::error::{Result, ScorerError};
use crate::parcel::{upper_midwest, ParcelCatalog};
use crate::weights::Persona;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub parcels_file: Option<PathBuf>,
    pub default_persona: Persona,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            parcels_file: None,
            default_persona: Persona::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the process env)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ScorerError::InvalidConfig(format!("PORT must be a port number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let parcels_file = lookup("PARCELS_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let default_persona = match lookup("DEFAULT_PERSONA") {
            Some(raw) => raw.parse()?,
            None => Persona::default(),
        };

        Ok(Self {
            port,
            parcels_file,
            default_persona,
        })
    }

    /// Load the configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<ParcelCatalog> {
        match &self.parcels_file {
            Some(path) => ParcelCatalog::load(path),
            None => Ok(upper_midwest()),
        }
    }
}
