//! Drakeforge Game - the playable loop around the drake engine
//!
//! Provides the collaborators the engine itself stays out of:
//! - A fixed-size grid of drake slots
//! - Save payloads and key-value save stores (memory and file backed)
//! - The `Game` orchestrator: buying, merging, moving, income and save/load

mod config;
mod error;
mod game;
mod grid;
pub mod save;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Game, MergeOutcome, StartKind};
pub use grid::Grid;
pub use save::{FileStore, MemoryStore, SaveFile, SaveState, SaveStore};
