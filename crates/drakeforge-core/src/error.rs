//! Error types for drakeforge-core

use thiserror::Error;

/// Core error type
///
/// Every variant is recoverable: the factory and the resolver are
/// all-or-nothing, so a returned error means no drake was built and no id
/// was consumed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid drake level {level} (max level is {max_level})")]
    InvalidLevel { level: u32, max_level: u32 },

    #[error("Drakes must be the same level to merge (got {first} and {second})")]
    LevelMismatch { first: u32, second: u32 },

    #[error("Drake level {level} is already the max level")]
    MaxLevelReached { level: u32 },

    #[error("Missing {table} data for {entry}")]
    MissingTierData { table: &'static str, entry: String },

    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),
}

impl Error {
    /// True for the normal end-of-progression signal rather than a misuse
    pub fn is_terminal(&self) -> bool {
        matches!(self, Error::MaxLevelReached { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
