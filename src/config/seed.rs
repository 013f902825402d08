//! Seed data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the initial users, lectures and reservations come from.
///
/// Without a path the registry starts empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// YAML seed file
    pub path: Option<PathBuf>,
}

impl SeedConfig {
    /// Validate seed configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if !path.is_file() => Err(ValidationError::SeedFileMissing(path.clone())),
            _ => Ok(()),
        }
    }
}
