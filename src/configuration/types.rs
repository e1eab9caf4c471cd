use std::path::PathBuf;

use serde::Deserialize;

use crate::camera::types::CapturePreferences;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraSource {
    TestPattern,
    V4l2,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    File,
    Keyring,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub source: CameraSource,
    pub device_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub preferences: CapturePreferences,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            source: CameraSource::TestPattern,
            device_path: PathBuf::from("/dev/video0"),
            width: 1280,
            height: 720,
            preferences: CapturePreferences::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BurstConfig {
    pub interval_ms: u64,
    pub total_duration_ms: u64,
    pub capture_timeout_ms: u64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            total_duration_ms: 5000,
            capture_timeout_ms: 2000,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub service: String,
    pub account: String,
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            service: String::from("myService"),
            account: String::from("myAccount"),
            path: PathBuf::from("snapvault_store"),
        }
    }
}
