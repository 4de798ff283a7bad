#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::path;

use anyhow::Result;
use dashmap::DashMap;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::KeyValueStore;
use crate::domain::models::StoreKey;

/// Key-value store persisted as a YAML map. Every mutation rewrites the
/// whole file.
pub struct FileStore {
    pub file_path: path::PathBuf,
    entries: DashMap<String, String>,
}

impl FileStore {
    pub fn default_path() -> path::PathBuf {
        return path::PathBuf::from(Config::get(ConfigKey::StoreFile));
    }

    pub fn load(file_path: path::PathBuf) -> Result<FileStore> {
        let entries = DashMap::new();
        if file_path.exists() {
            let payload = fs::read_to_string(&file_path)?;
            if !payload.trim().is_empty() {
                let map: BTreeMap<String, String> = serde_yaml::from_str(&payload)?;
                for (key, value) in map {
                    entries.insert(key, value);
                }
            }
        }

        tracing::debug!(path = ?file_path, entries = entries.len(), "Loaded store");

        return Ok(FileStore { file_path, entries });
    }

    fn flush(&self) -> Result<()> {
        let map = self
            .entries
            .iter()
            .map(|entry| return (entry.key().to_string(), entry.value().to_string()))
            .collect::<BTreeMap<String, String>>();

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.file_path, serde_yaml::to_string(&map)?)?;

        return Ok(());
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        return self
            .entries
            .get(&key.to_string())
            .map(|val| return val.to_string());
    }

    fn set(&self, key: StoreKey, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        return self.flush();
    }

    fn remove(&self, key: StoreKey) -> Result<()> {
        self.entries.remove(&key.to_string());
        return self.flush();
    }
}
