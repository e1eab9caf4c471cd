//! Platform credential store backend.
//!
//! Stores the blob in the operating system keyring (Keychain on macOS,
//! Secret Service on Linux, Credential Manager on Windows). The platform
//! store is update-in-place by nature, so the insert-only contract is
//! enforced here with a lookup before every write.
//!
//! Compiled only with the `platform-keyring` feature.

use keyring::Entry;
use log::{debug, error, info, warn};

use crate::error_handling::types::StoreError;
use crate::secret_store::store_trait::BlobStore;

pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(&self, service: &str, account: &str) -> Result<Entry, StoreError> {
        Entry::new(service, account).map_err(|e| {
            error!("Keyring unavailable for {}/{}: {}", service, account, e);
            StoreError::Unavailable(e.to_string())
        })
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for KeyringStore {
    fn describe(&self) -> String {
        "platform keyring".to_string()
    }

    fn save(&self, service: &str, account: &str, data: &[u8]) -> Result<(), StoreError> {
        if data.is_empty() {
            return Err(StoreError::EmptyPayload);
        }
        let entry = self.entry(service, account)?;
        match entry.get_secret() {
            Ok(_) => {
                warn!("Keyring entry already exists for {}/{}", service, account);
                return Err(StoreError::AlreadyExists);
            }
            Err(keyring::Error::NoEntry) => {}
            Err(e) => {
                error!("Keyring lookup failed for {}/{}: {}", service, account, e);
                return Err(StoreError::ReadFailed);
            }
        }
        entry.set_secret(data).map_err(|e| { error!("Keyring write failed for {}/{}: {}", service, account, e); StoreError::WriteFailed })?;
        debug!("Stored {} byte(s) in keyring for {}/{}", data.len(), service, account);
        Ok(())
    }

    fn load(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entry = self.entry(service, account)?;
        match entry.get_secret() {
            Ok(data) => Ok(Some(data)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                error!("Keyring read failed for {}/{}: {}", service, account, e);
                Err(StoreError::ReadFailed)
            }
        }
    }

    fn clear(&self, service: &str, account: &str) -> Result<bool, StoreError> {
        let entry = self.entry(service, account)?;
        match entry.delete_credential() {
            Ok(()) => {
                info!("Cleared keyring entry for {}/{}", service, account);
                Ok(true)
            }
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(e) => {
                error!("Keyring delete failed for {}/{}: {}", service, account, e);
                Err(StoreError::WriteFailed)
            }
        }
    }
}
