use dashmap::DashMap;
use strata_core::errors::StrataResult;
use strata_core::traits::IKeyValueStore;

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: DashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IKeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StrataResult<Option<String>> {
        Ok(self.values.get(key).map(|v| v.clone()))
    }

    fn set(&self, key: &str, value: &str) -> StrataResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StrataResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
