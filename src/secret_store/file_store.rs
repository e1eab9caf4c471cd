//! File-backed secret store backend.
//!
//! Keeps one file per `(service, account)` entry under a base directory.
//! Files are created with `create_new`, so an existing entry can never be
//! overwritten, matching the insert-only contract of [`BlobStore`].

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error_handling::types::StoreError;
use crate::secret_store::store_trait::BlobStore;

pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, StoreError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| { error!("Failed to create store dir {}: {}", base_path.display(), e); StoreError::WriteFailed })?;
        info!("FileStore initialized at {}", base_path.display());
        Ok(Self { base_path })
    }

    /// Construct FileStore using env var SNAPVAULT_STORE_DIR if set, otherwise the configured path.
    pub fn resolve<P: AsRef<Path>>(configured: P) -> Result<Self, StoreError> {
        if let Ok(dir) = std::env::var("SNAPVAULT_STORE_DIR") {
            info!("Using store directory from SNAPVAULT_STORE_DIR: {}", dir);
            return Self::new(PathBuf::from(dir));
        }
        Self::new(configured)
    }

    fn entry_path(&self, service: &str, account: &str) -> Result<PathBuf, StoreError> {
        validate_key_part(service)?;
        validate_key_part(account)?;
        Ok(self.base_path.join(format!("{}__{}.blob", service, account)))
    }
}

/// Key parts become file name components, so anything that could escape the
/// base directory is rejected.
fn validate_key_part(part: &str) -> Result<(), StoreError> {
    let ok = !part.is_empty()
        && !part.starts_with('.')
        && part.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if ok {
        Ok(())
    } else {
        error!("Rejecting unsafe store key part {:?}", part);
        Err(StoreError::InvalidKey(part.to_string()))
    }
}

impl BlobStore for FileStore {
    fn describe(&self) -> String {
        format!("file ({})", self.base_path.display())
    }

    fn save(&self, service: &str, account: &str, data: &[u8]) -> Result<(), StoreError> {
        if data.is_empty() {
            return Err(StoreError::EmptyPayload);
        }
        let path = self.entry_path(service, account)?;
        let mut f = OpenOptions::new().write(true).create_new(true).open(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                warn!("Entry already exists at {}", path.display());
                StoreError::AlreadyExists
            } else {
                error!("Failed to create entry {}: {}", path.display(), e);
                StoreError::WriteFailed
            }
        })?;
        if let Err(e) = f.write_all(data) {
            error!("Failed to write entry {}: {}", path.display(), e);
            // a torn entry must not keep occupying the slot
            drop(f);
            let _ = fs::remove_file(&path);
            return Err(StoreError::WriteFailed);
        }
        debug!("Stored {} byte(s) at {}", data.len(), path.display());
        Ok(())
    }

    fn load(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.entry_path(service, account)?;
        match fs::read(&path) {
            Ok(data) => {
                debug!("Read {} byte(s) from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read entry {}: {}", path.display(), e);
                Err(StoreError::ReadFailed)
            }
        }
    }

    fn clear(&self, service: &str, account: &str) -> Result<bool, StoreError> {
        let path = self.entry_path(service, account)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Cleared entry {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => {
                error!("Failed to remove entry {}: {}", path.display(), e);
                Err(StoreError::WriteFailed)
            }
        }
    }
}
