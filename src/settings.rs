//! Per-device settings service.
//!
//! A single JSON document keyed by device identifier, read in full when the
//! service is constructed and rewritten in full (pretty-printed) on every
//! save. Failures never reach the overlay logic: a broken file degrades to an
//! empty table and a failed write leaves the in-memory table authoritative.
//! Single-process by design; there is no locking.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEVICE_SETTINGS_FILE_NAME: &str = "device-settings.json";

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(DEVICE_SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

/// Keyed per-device settings table with load-at-construction and
/// overwrite-on-save semantics. Construct one instance at startup and pass it
/// to whatever needs device settings.
pub struct DeviceSettingsService {
    path: PathBuf,
    table: HashMap<String, Value>,
}

impl DeviceSettingsService {
    /// Load the table from `path`. A missing file is an empty table; a read
    /// or parse failure is logged and also falls back to an empty table.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table = match load_table(&path) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("failed to load device settings: {e:#}");
                HashMap::new()
            }
        };
        Self { path, table }
    }

    /// Settings object for `device_id`, if one was ever saved.
    pub fn get_settings(&self, device_id: &str) -> Option<&Value> {
        self.table.get(device_id)
    }

    /// Replace the entry for `device_id` and rewrite the whole file. A write
    /// failure is logged and swallowed; the in-memory table stays
    /// authoritative for the rest of the process.
    pub fn save_settings(&mut self, device_id: &str, settings: Value) {
        self.table.insert(device_id.to_string(), settings);
        if let Err(e) = self.write_table() {
            tracing::error!("failed to save device settings: {e:#}");
        }
    }

    fn write_table(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.table).context("serialize device settings table")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write device settings file {}", self.path.display()))
    }
}

fn load_table(path: &Path) -> Result<HashMap<String, Value>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read device settings file {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_json::from_str(&content)
        .with_context(|| format!("deserialize device settings file {}", path.display()))
}

/// Toolbox placement the demo persists per device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolboxPrefs {
    pub left: f32,
    pub top: f32,
    #[serde(default)]
    pub collapsed: bool,
}

impl ToolboxPrefs {
    pub fn load(service: &DeviceSettingsService, device_id: &str) -> Option<Self> {
        let value = service.get_settings(device_id)?;
        match serde_json::from_value(value.clone()) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                tracing::warn!("ignoring malformed toolbox prefs for {device_id}: {e}");
                None
            }
        }
    }

    pub fn store(&self, service: &mut DeviceSettingsService, device_id: &str) {
        match serde_json::to_value(self) {
            Ok(value) => service.save_settings(device_id, value),
            Err(e) => tracing::warn!("failed to serialize toolbox prefs for {device_id}: {e}"),
        }
    }
}
