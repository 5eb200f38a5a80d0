//! Snapshot file loading. Both snapshot kinds are accepted as JSON or YAML,
//! chosen by file extension (`.yaml`/`.yml` parse as YAML, everything else as
//! JSON).

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{BcaError, Result};
use crate::types::{BrandGuidelineProfile, ScrapedDesignData};

/// Loads a brand guideline snapshot from disk.
pub fn load_guidelines(path: &Path) -> Result<BrandGuidelineProfile> {
    read_snapshot(path)
}

/// Loads a scraped design data snapshot from disk.
pub fn load_scraped(path: &Path) -> Result<ScrapedDesignData> {
    read_snapshot(path)
}

fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&raw).map_err(|e| {
            BcaError::invalid_input(format!("{}: invalid YAML snapshot: {}", path.display(), e))
        }),
        _ => serde_json::from_str(&raw).map_err(|e| {
            BcaError::invalid_input(format!("{}: invalid JSON snapshot: {}", path.display(), e))
        }),
    }
}
