//! Gemini extension enablement manifest.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Contents of `extensions/extension-enablement.json`: extension name mapped
/// to whether it is enabled.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EnablementMap(pub BTreeMap<String, bool>);

impl EnablementMap {
    /// Load the map, treating a missing or malformed file as empty. The next
    /// save overwrites whatever was there.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content).unwrap_or_default()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Mark the given extension enabled, creating or repairing the manifest as
/// needed.
pub fn enable_extension(path: &Path, extension_name: &str) -> Result<()> {
    let mut map = EnablementMap::load(path)?;
    map.0.insert(extension_name.to_string(), true);
    map.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let map = EnablementMap::load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(map, EnablementMap::default());
    }

    #[test]
    fn test_malformed_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extension-enablement.json");
        fs::write(&path, "{ not json").unwrap();

        enable_extension(&path, "continuity").unwrap();

        let map = EnablementMap::load(&path).unwrap();
        assert_eq!(map.0.get("continuity"), Some(&true));
        assert_eq!(map.0.len(), 1);
    }

    #[test]
    fn test_enable_preserves_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extension-enablement.json");
        fs::write(&path, r#"{"maestro": false}"#).unwrap();

        enable_extension(&path, "continuity").unwrap();

        let map = EnablementMap::load(&path).unwrap();
        assert_eq!(map.0.get("continuity"), Some(&true));
        assert_eq!(map.0.get("maestro"), Some(&false));
    }
}
