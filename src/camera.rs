//! Camera access, capabilities, and capture backends.

pub mod authorization;
pub mod camera_trait;
pub mod session;
pub mod test_pattern;
pub mod types;
#[cfg(feature = "capture-v4l2")]
pub mod v4l2;

pub use authorization::{AccessStatus, DeviceNodeGate, PermissionGate, StaticGate};
pub use camera_trait::Camera;
pub use session::CaptureSession;
pub use test_pattern::TestPatternCamera;
pub use types::{CameraCapabilities, CapturePreferences, FlashMode, Frame, PhotoCodec, PhotoSettings};
#[cfg(feature = "capture-v4l2")]
pub use v4l2::V4l2Camera;
