//! User preferences and the key-value store that persists them.

use derive_more::{Display, Error};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Preferences error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Preferences error: {} at {}:{}", message, file, line)]
pub struct PrefsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PrefsError {
    /// Creates a new preferences error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// String key-value storage for preferences.
pub trait KeyValueStore {
    /// Returns the stored value for `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, persisting it if the store is durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// In-memory store, for tests and for running without a preference file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat TOML table on disk.
///
/// The whole table is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            debug!("No preference file yet, starting empty");
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| PrefsError::new(format!("Failed to read preference file: {}", e)))?;
        let table: toml::Table = toml::from_str(&content)
            .map_err(|e| PrefsError::new(format!("Failed to parse preference file: {}", e)))?;

        let values = table
            .into_iter()
            .map(|(key, value)| match value {
                toml::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect::<BTreeMap<_, _>>();

        info!(entries = values.len(), "Preference file loaded");
        Ok(Self { path, values })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn persist(&self) -> Result<(), PrefsError> {
        let content = toml::to_string(&self.values)
            .map_err(|e| PrefsError::new(format!("Failed to encode preferences: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| PrefsError::new(format!("Failed to write preference file: {}", e)))?;
        debug!("Preferences written");
        Ok(())
    }
}

impl KeyValueStore for TomlFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// A single boolean preference.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Preference {
    /// Flip the sense of left/right cursor movement.
    InvertHorizontal,
    /// Flip the sense of up/down cursor movement.
    InvertVertical,
    /// Show the score and help panel.
    ShowPanel,
}

impl Preference {
    /// Fixed store key for this preference.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::InvertHorizontal => "Invert horizontal",
            Self::InvertVertical => "Invert vertical",
            Self::ShowPanel => "Show panel",
        }
    }

    /// Value used when nothing valid is stored.
    pub fn default_value(self) -> bool {
        match self {
            Self::InvertHorizontal | Self::InvertVertical => false,
            Self::ShowPanel => true,
        }
    }

    /// Parses a store key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::from_str(key).ok()
    }
}

/// The user's preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    invert_horizontal: bool,
    invert_vertical: bool,
    show_panel: bool,
}

impl Preferences {
    /// Reads every preference from `store`, falling back to defaults.
    #[instrument(skip(store))]
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut prefs = Self::default();
        for pref in Preference::iter() {
            let Some(raw) = store.get(pref.key()) else {
                continue;
            };
            match raw.trim().parse::<bool>() {
                Ok(value) => *prefs.slot(pref) = value,
                Err(_) => warn!(key = pref.key(), %raw, "Ignoring unparseable preference"),
            }
        }
        debug!(?prefs, "Preferences loaded");
        prefs
    }

    /// Current value of `pref`.
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::InvertHorizontal => self.invert_horizontal,
            Preference::InvertVertical => self.invert_vertical,
            Preference::ShowPanel => self.show_panel,
        }
    }

    /// Sets `pref` and writes it through to `store`.
    #[instrument(skip(self, store))]
    pub fn set(
        &mut self,
        pref: Preference,
        value: bool,
        store: &mut impl KeyValueStore,
    ) -> Result<(), PrefsError> {
        *self.slot(pref) = value;
        store.set(pref.key(), &value.to_string())
    }

    /// Flips `pref`, writes it through, and returns the new value.
    #[instrument(skip(self, store))]
    pub fn toggle(
        &mut self,
        pref: Preference,
        store: &mut impl KeyValueStore,
    ) -> Result<bool, PrefsError> {
        let value = !self.get(pref);
        self.set(pref, value, store)?;
        Ok(value)
    }

    fn slot(&mut self, pref: Preference) -> &mut bool {
        match pref {
            Preference::InvertHorizontal => &mut self.invert_horizontal,
            Preference::InvertVertical => &mut self.invert_vertical,
            Preference::ShowPanel => &mut self.show_panel,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            invert_horizontal: Preference::InvertHorizontal.default_value(),
            invert_vertical: Preference::InvertVertical.default_value(),
            show_panel: Preference::ShowPanel.default_value(),
        }
    }
}
