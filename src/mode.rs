use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MODE_CIVIL, MODE_KEY, MODE_LUNAR};

/// Which calendar dates are rendered in.
///
/// Exactly one value lives per process, owned by a [`ModeStore`]; it is
/// read from persisted storage at startup and flipped only by an
/// explicit toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarMode {
    /// Gregorian display, persisted as `"masehi"`.
    #[default]
    #[serde(rename = "masehi")]
    Civil,
    /// Hijri display, persisted as `"hijriyah"`.
    #[serde(rename = "hijriyah")]
    Lunar,
}

impl CalendarMode {
    /// The opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Civil => Self::Lunar,
            Self::Lunar => Self::Civil,
        }
    }

    /// The persisted literal for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Civil => MODE_CIVIL,
            Self::Lunar => MODE_LUNAR,
        }
    }
}

impl fmt::Display for CalendarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a persisted mode literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown calendar mode {0:?} (expected \"masehi\" or \"hijriyah\")")]
pub struct ParseModeError(String);

impl FromStr for CalendarMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MODE_CIVIL => Ok(Self::Civil),
            MODE_LUNAR => Ok(Self::Lunar),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

/// Error type for settings persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    #[error("failed to write settings: {0}")]
    Io(#[from] io::Error),

    /// The entries could not be encoded.
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value persistence consumed by [`ModeStore`].
///
/// Injected at construction so storage can be faked in tests and
/// replaced per host (file, platform preferences, nothing at all).
pub trait SettingsStore {
    /// Reads the stored value for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    /// Returns `StoreError` when the backing storage cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Settings persisted as a single JSON object of string entries.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // A missing or corrupt file reads as empty; settings are
    // best-effort state, not a database.
    fn load(&self) -> HashMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl SettingsStore for JsonFileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load();
        entries.insert(key.to_owned(), value.to_owned());
        let encoded = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates a store preloaded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        lock(&store.entries).insert(key.to_owned(), value.to_owned());
        store
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        lock(&self.entries).insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Process-wide display mode, read once at startup and persisted on
/// every toggle.
#[derive(Debug)]
pub struct ModeStore<S> {
    mode:  Mutex<CalendarMode>,
    store: S,
}

impl<S: SettingsStore> ModeStore<S> {
    /// Reads the persisted mode from `store`, defaulting to civil
    /// display when the entry is missing or unrecognized.
    pub fn new(store: S) -> Self {
        let mode = store
            .read(MODE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self {
            mode: Mutex::new(mode),
            store,
        }
    }

    /// The active display mode.
    pub fn mode(&self) -> CalendarMode {
        *lock(&self.mode)
    }

    /// Flips the mode and persists the new value.
    ///
    /// Persistence failures are swallowed: the mode is a display
    /// preference, not critical state, and the in-memory value stays
    /// authoritative. The flip and the write happen under one guard so
    /// concurrent toggles cannot interleave a stale persist.
    pub fn toggle(&self) -> CalendarMode {
        let mut guard = lock(&self.mode);
        *guard = guard.toggled();
        let mode = *guard;
        let _ = self.store.write(MODE_KEY, mode.as_str());
        mode
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
