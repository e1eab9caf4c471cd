//! In-memory secret store backend.
//!
//! Holds entries in a process-local map. Used by the `memory` backend in the
//! configuration and as the default store in tests. Entries do not survive
//! the process.

use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, warn};

use crate::error_handling::types::StoreError;
use crate::secret_store::store_trait::BlobStore;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), Vec<u8>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl BlobStore for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn save(&self, service: &str, account: &str, data: &[u8]) -> Result<(), StoreError> {
        if data.is_empty() {
            return Err(StoreError::EmptyPayload);
        }
        let mut entries = self.entries();
        let key = (service.to_string(), account.to_string());
        if entries.contains_key(&key) {
            warn!("Entry already exists for {}/{}", service, account);
            return Err(StoreError::AlreadyExists);
        }
        debug!("Storing {} byte(s) for {}/{}", data.len(), service, account);
        entries.insert(key, data.to_vec());
        Ok(())
    }

    fn load(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries();
        Ok(entries
            .get(&(service.to_string(), account.to_string()))
            .cloned())
    }

    fn clear(&self, service: &str, account: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries();
        Ok(entries
            .remove(&(service.to_string(), account.to_string()))
            .is_some())
    }
}
