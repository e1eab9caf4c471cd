//! Error types shared across the crate.
//!
//! One enum per subsystem, each implementing `Display` and `std::error::Error`,
//! with `From` conversions where one subsystem wraps another. Fallible code
//! logs its cause at the failure site and returns the matching variant.

pub mod types;

pub use types::{
    AccessError, ArchiveError, BurstError, CameraError, ConfigError, ControllerError, StateError,
    StoreError,
};
