extern crate tempdir;

use std::fs;

use anyhow::Result;
use tempdir::TempDir;

use super::FileStore;
use crate::domain::models::KeyValueStore;
use crate::domain::models::StoreKey;

#[test]
fn it_starts_empty_without_a_file() -> Result<()> {
    let dir = TempDir::new("luch-store")?;
    let store = FileStore::load(dir.path().join("store.yaml"))?;
    assert_eq!(store.get(StoreKey::AuthToken), None);
    return Ok(());
}

#[test]
fn it_persists_values_across_loads() -> Result<()> {
    let dir = TempDir::new("luch-store")?;
    let file_path = dir.path().join("nested/store.yaml");

    let store = FileStore::load(file_path.clone())?;
    store.set(StoreKey::AuthToken, "token-123")?;
    store.set(StoreKey::GuestRequests, "2")?;

    let payload = fs::read_to_string(&file_path)?;
    assert!(payload.contains("authToken: token-123"));

    let reloaded = FileStore::load(file_path)?;
    assert_eq!(reloaded.get(StoreKey::AuthToken), Some("token-123".to_string()));
    assert_eq!(reloaded.get(StoreKey::GuestRequests), Some("2".to_string()));

    return Ok(());
}

#[test]
fn it_removes_values() -> Result<()> {
    let dir = TempDir::new("luch-store")?;
    let file_path = dir.path().join("store.yaml");

    let store = FileStore::load(file_path.clone())?;
    store.set(StoreKey::AuthToken, "token-123")?;
    store.remove(StoreKey::AuthToken)?;

    let reloaded = FileStore::load(file_path)?;
    assert_eq!(reloaded.get(StoreKey::AuthToken), None);

    return Ok(());
}

#[test]
fn it_fails_on_a_corrupt_file() -> Result<()> {
    let dir = TempDir::new("luch-store")?;
    let file_path = dir.path().join("store.yaml");
    fs::write(&file_path, "- not\n- a map\n")?;

    assert!(FileStore::load(file_path).is_err());
    return Ok(());
}
