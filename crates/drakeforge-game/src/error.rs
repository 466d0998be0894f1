//! Error types for drakeforge-game

use thiserror::Error;

/// Game error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Forge(#[from] drakeforge_core::Error),

    #[error("Grid is full")]
    GridFull,

    #[error("Not enough resources: need {need}, have {have}")]
    InsufficientResources { need: u64, have: u64 },

    #[error("No drake in slot {0}")]
    EmptySlot(usize),

    #[error("Cannot merge or move a drake onto its own slot {0}")]
    SameSlot(usize),

    #[error("Slot {0} is out of range or occupied")]
    SlotUnavailable(usize),

    #[error("Save version {found} is not supported (expected {expected})")]
    IncompatibleSave { found: u32, expected: u32 },

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON encode error: {0}")]
    Encode(#[from] ron::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when a merge failed only because the drakes are already at the
    /// top level
    pub fn is_max_level(&self) -> bool {
        matches!(self, Error::Forge(err) if err.is_terminal())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
