//! Binary envelope for photos persisted to the secret store.

pub mod envelope;

pub use envelope::{decode, encode, ArchivedPhoto, MAGIC, VERSION};
