use anyhow::Result;

/// Keys kept in the persistent store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum StoreKey {
    AuthToken,
    GuestRequests,
}

/// Key-value storage that survives restarts.
pub trait KeyValueStore {
    fn get(&self, key: StoreKey) -> Option<String>;

    fn set(&self, key: StoreKey, value: &str) -> Result<()>;

    fn remove(&self, key: StoreKey) -> Result<()>;
}

pub type StoreBox = Box<dyn KeyValueStore + Send + Sync>;
