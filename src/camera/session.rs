//! Capture session metadata.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::camera::types::{CameraCapabilities, CapturePreferences, PhotoSettings};

/// A configured camera, ready to take photos.
///
/// Created once the device has been opened and its capabilities are known.
/// Photo settings are negotiated against these capabilities anew for every
/// exposure rather than once per session.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    pub session_id: Uuid,
    pub opened_at: DateTime<Utc>,
    pub camera_label: String,
    pub capabilities: CameraCapabilities,
}

impl CaptureSession {
    pub fn new(camera_label: String, capabilities: CameraCapabilities) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            opened_at: Utc::now(),
            camera_label,
            capabilities,
        }
    }

    /// Settings for the next exposure, rebuilt from preferences each time.
    pub fn negotiate(&self, preferences: &CapturePreferences) -> PhotoSettings {
        PhotoSettings::negotiate(preferences, &self.capabilities)
    }
}
