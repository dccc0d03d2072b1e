//! Persisted calculator settings.
//!
//! The record is tagged with [`SCHEMA_VERSION`]. A stored record with any
//! other version, or one that fails to decode or validate, is removed and
//! treated as if nothing had been stored.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{inventory::Inventory, plate::Plate, plate_error::PlateError, unit::Unit};

pub const SCHEMA_VERSION: u32 = 1;
pub const SETTINGS_KEY: &str = "plate-calculator-settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    pub schema_version: u32,
    pub uses_pound_mode: bool,
    pub inventory: Vec<Plate>,
    pub barbell_weight: f64,
    pub desired_total_weight: f64,
}

impl PersistedSettings {
    #[must_use]
    pub fn defaults(unit: Unit) -> Self {
        PersistedSettings {
            schema_version: SCHEMA_VERSION,
            uses_pound_mode: unit.is_pound(),
            inventory: Plate::generate_inventory(unit),
            barbell_weight: unit.default_barbell_weight(),
            desired_total_weight: unit.default_desired_weight(),
        }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        Unit::from_pound_mode(self.uses_pound_mode)
    }

    fn validate(&self) -> Result<(), Rejection> {
        if !Inventory::from_plates(self.unit(), self.inventory.clone()).is_well_formed() {
            return Err(Rejection::Invalid("inventory does not match the unit catalog"));
        }
        if !self.barbell_weight.is_finite() || self.barbell_weight <= 0.0 {
            return Err(Rejection::Invalid("barbell weight must be positive"));
        }
        if !self.desired_total_weight.is_finite() {
            return Err(Rejection::Invalid("desired weight must be a number"));
        }
        Ok(())
    }
}

/// Key-value string storage the settings record lives in.
pub trait SettingsStore {
    ///
    /// # Errors
    /// If the underlying medium cannot be read.
    ///
    fn read(&self, key: &str) -> Result<Option<String>, PlateError>;

    ///
    /// # Errors
    /// If the underlying medium cannot be written.
    ///
    fn write(&self, key: &str, value: &str) -> Result<(), PlateError>;

    ///
    /// # Errors
    /// If an existing entry cannot be deleted.
    ///
    fn remove(&self, key: &str) -> Result<(), PlateError>;
}

/// One `<key>.json` file per entry inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    ///
    /// # Errors
    /// If the platform has no per-user data directory.
    ///
    pub fn default_location() -> Result<Self, PlateError> {
        dirs::data_dir()
            .map(|dir| FileStore::new(dir.join("plates-rs")))
            .ok_or(PlateError::NoSettingsDir)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SettingsStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PlateError> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PlateError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PlateError> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PlateError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PlateError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PlateError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Error, Debug)]
enum Rejection {
    #[error("schema version {0:?} is not the current one")]
    VersionMismatch(Option<u64>),
    #[error("record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("record is invalid: {0}")]
    Invalid(&'static str),
}

/// Reads the stored record. Returns `None` when nothing usable is stored;
/// an unusable record is deleted on the way.
pub fn load(store: &dyn SettingsStore) -> Option<PersistedSettings> {
    let raw = match store.read(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!("No stored settings, using defaults");
            return None;
        }
        Err(error) => {
            tracing::warn!("Failed to read settings, using defaults: {}", error);
            return None;
        }
    };

    match decode(&raw) {
        Ok(settings) => {
            tracing::debug!("Loaded stored settings");
            Some(settings)
        }
        Err(rejection) => {
            tracing::info!("Discarding stored settings: {}", rejection);
            if let Err(error) = store.remove(SETTINGS_KEY) {
                tracing::warn!("Failed to remove stored settings: {}", error);
            }
            None
        }
    }
}

///
/// # Errors
/// If the record cannot be encoded or the store rejects the write.
///
pub fn save(store: &dyn SettingsStore, settings: &PersistedSettings) -> Result<(), PlateError> {
    let json = serde_json::to_string_pretty(settings)?;
    store.write(SETTINGS_KEY, &json)?;
    tracing::debug!("Saved settings");
    Ok(())
}

fn decode(raw: &str) -> Result<PersistedSettings, Rejection> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let version = value.get("schemaVersion").and_then(serde_json::Value::as_u64);
    if version != Some(u64::from(SCHEMA_VERSION)) {
        return Err(Rejection::VersionMismatch(version));
    }

    let settings: PersistedSettings = serde_json::from_value(value)?;
    settings.validate()?;
    Ok(settings)
}
