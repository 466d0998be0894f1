//! Save payloads and the key-value stores they are written to

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use drakeforge_core::{Drake, DrakeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Current save layout version
pub const SAVE_VERSION: u32 = 1;

/// Game progress as persisted
///
/// Missing fields fall back to fresh-game values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveState {
    pub resources: u64,
    pub grid_slots: Vec<Option<Drake>>,
    pub highest_drake_level: Option<u32>,
}

impl SaveState {
    /// Highest drake id anywhere in the saved grid
    pub fn highest_drake_id(&self) -> Option<DrakeId> {
        self.grid_slots.iter().flatten().map(|d| d.id).max()
    }
}

/// Envelope around a [`SaveState`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: SaveState,
}

/// Encode a state as a RON save payload stamped with the current time
pub fn encode(state: &SaveState) -> Result<String> {
    let file = SaveFile {
        version: SAVE_VERSION,
        saved_at: Utc::now(),
        state: state.clone(),
    };
    Ok(ron::to_string(&file)?)
}

/// Decode a RON save payload
///
/// Only the version is checked; there is no migration between versions.
pub fn decode(payload: &str) -> Result<SaveFile> {
    let file: SaveFile = ron::from_str(payload)?;
    if file.version != SAVE_VERSION {
        return Err(Error::IncompatibleSave {
            found: file.version,
            expected: SAVE_VERSION,
        });
    }
    Ok(file)
}

/// Key-value persistence used for save games
pub trait SaveStore {
    /// Read the payload stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `payload` under `key`, replacing any previous value
    fn save(&mut self, key: &str, payload: &str) -> Result<()>;

    /// Remove `key`; returns whether anything was removed
    fn delete(&mut self, key: &str) -> Result<bool>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.load(key)?.is_some())
    }
}

/// In-process store, handy for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<()> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }
}

/// Store that keeps one `<key>.ron` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.ron", key))
    }
}

impl SaveStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<()> {
        fs::write(self.path_for(key), payload)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.path_for(key).is_file())
    }
}
