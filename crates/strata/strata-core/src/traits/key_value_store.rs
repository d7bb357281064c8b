use crate::errors::StrataResult;

/// Durable local string store. No transactional guarantees.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StrataResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StrataResult<()>;
    fn remove(&self, key: &str) -> StrataResult<()>;
}
