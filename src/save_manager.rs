//! Saving and loading game state with a checksummed file format.
//!
//! File layout:
//! - Version magic (8 bytes, little-endian)
//! - Payload length (4 bytes, little-endian)
//! - JSON-serialized [`GameState`] (variable length)
//! - SHA-256 checksum over the three preceding sections (32 bytes)
//!
//! Loading verifies magic and checksum, then passes the deserialized
//! state through [`GameState::sanitize`], so a corrupted or hand-edited
//! save never reaches the aggregate unchecked.

use crate::core::constants::{AUTOSAVE_DEBOUNCE_MS, MAX_SAVE_PAYLOAD_BYTES, SAVE_VERSION_MAGIC};
use crate::core::game_state::GameState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not determine a save directory for this platform")]
    NoSaveDirectory,
    #[error("save file has wrong version magic: expected {expected:#018X}, got {found:#018X}")]
    WrongVersion { expected: u64, found: u64 },
    #[error("save file checksum mismatch")]
    ChecksumMismatch,
    #[error("save payload length {len} exceeds the {max}-byte limit")]
    PayloadTooLarge { len: u32, max: u32 },
    #[error("save payload is not valid game state: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Manages the on-disk save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses the platform config directory (`directories` crate).
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "menagerie").ok_or(SaveError::NoSaveDirectory)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Saves to an explicit path. Tests use this with a temp directory.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn save(&self, state: &GameState) -> Result<(), SaveError> {
        let payload = serde_json::to_vec(state)?;
        let payload_len = payload.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(payload_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&payload_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    pub fn load(&self) -> Result<GameState, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::WrongVersion {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let payload_len = u32::from_le_bytes(length_bytes);
        if payload_len > MAX_SAVE_PAYLOAD_BYTES {
            return Err(SaveError::PayloadTooLarge {
                len: payload_len,
                max: MAX_SAVE_PAYLOAD_BYTES,
            });
        }

        let mut payload = vec![0u8; payload_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&payload);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::ChecksumMismatch);
        }

        let state: GameState = serde_json::from_slice(&payload)?;
        Ok(state.sanitize())
    }
}

/// Debounce wrapper around [`SaveManager`].
///
/// `request_save` is cheap to call on every snapshot replace; it only
/// touches disk when the debounce window has elapsed. `flush` writes
/// unconditionally and is for teardown. Failures are logged and swallowed:
/// game correctness never depends on a save completing.
pub struct DebouncedSave {
    manager: SaveManager,
    min_interval: Duration,
    last_save: Option<Instant>,
}

impl DebouncedSave {
    pub fn new(manager: SaveManager) -> Self {
        Self {
            manager,
            min_interval: Duration::from_millis(AUTOSAVE_DEBOUNCE_MS),
            last_save: None,
        }
    }

    pub fn with_interval(manager: SaveManager, min_interval: Duration) -> Self {
        Self {
            manager,
            min_interval,
            last_save: None,
        }
    }

    /// Saves if the debounce window has elapsed. Returns whether a write
    /// was attempted.
    pub fn request_save(&mut self, state: &GameState) -> bool {
        let due = match self.last_save {
            Some(at) => at.elapsed() >= self.min_interval,
            None => true,
        };
        if !due {
            return false;
        }
        self.write(state);
        true
    }

    /// Unconditional write, for driver teardown.
    pub fn flush(&mut self, state: &GameState) {
        self.write(state);
    }

    fn write(&mut self, state: &GameState) {
        self.last_save = Some(Instant::now());
        if let Err(error) = self.manager.save(state) {
            tracing::warn!(%error, "autosave failed; continuing without persistence");
        }
    }
}
