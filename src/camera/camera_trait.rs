//! Contract shared by all camera backends.

use async_trait::async_trait;

use crate::camera::types::{CameraCapabilities, Frame, PhotoSettings};
use crate::error_handling::types::CameraError;

/// A still-photo source.
///
/// `open` must be called once before `capture`; it reports what the device
/// can do so photo settings can be negotiated against real capabilities.
/// `capture` produces a single encoded frame per call.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Backend name for logs and diagnostics.
    fn describe(&self) -> String;

    /// Opens the device and reports its capabilities.
    async fn open(&self) -> Result<CameraCapabilities, CameraError>;

    /// Takes one photo with the given settings.
    async fn capture(&self, settings: &PhotoSettings) -> Result<Frame, CameraError>;
}
