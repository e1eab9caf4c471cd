//! Secret store backends.
//!
//! Photos are persisted as opaque blobs keyed by a `(service, account)`
//! pair. All backends share the insert-only [`BlobStore`] contract: the
//! first save wins and later saves under the same key fail until the entry
//! is cleared.

pub mod file_store;
#[cfg(feature = "platform-keyring")]
pub mod keyring_store;
pub mod memory_store;
pub mod store_trait;

pub use file_store::FileStore;
#[cfg(feature = "platform-keyring")]
pub use keyring_store::KeyringStore;
pub use memory_store::MemoryStore;
pub use store_trait::BlobStore;
