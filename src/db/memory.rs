//! In-memory key-value backend, used by tests and dry runs.

use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    items: BTreeMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryKv {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }

    fn all_keys(&self) -> AppResult<Vec<String>> {
        Ok(self.items.keys().cloned().collect())
    }
}
