//! Contract shared by all secret store backends.

use crate::error_handling::types::StoreError;

/// Insert-only blob storage keyed by a `(service, account)` pair.
///
/// Backends mirror a platform credential store: an entry is created once and
/// a second `save` under the same key fails with
/// [`StoreError::AlreadyExists`] until the entry is cleared. Payloads must be
/// non-empty.
pub trait BlobStore: Send + Sync {
    /// Backend name for logs and diagnostics.
    fn describe(&self) -> String;

    /// Inserts a new blob under `(service, account)`. Never overwrites.
    fn save(&self, service: &str, account: &str, data: &[u8]) -> Result<(), StoreError>;

    /// Loads the blob stored under `(service, account)`, if any.
    fn load(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Removes the entry. Returns `true` when an entry existed.
    fn clear(&self, service: &str, account: &str) -> Result<bool, StoreError>;
}
