use std::path::Path;
use std::sync::OnceLock;

use log::info;
use regex::Regex;
use serde::Deserialize;

use super::types::*;
use crate::error_handling::types::ConfigError;
use crate::sequencing::burst::BurstPlan;

/// Application configuration structure that defines all runtime parameters.
///
/// This structure holds the complete configuration for the application:
/// which camera to use and at what resolution, the burst timing, and where
/// captured photos are stored. It is deserialized from a TOML file with
/// `serde`, and every section falls back to its defaults when omitted, so an
/// empty file (or no file at all) yields a working configuration.
///
/// # Examples
///
/// ```toml
/// [camera]
/// source = "test-pattern"
/// width = 640
/// height = 480
///
/// [burst]
/// interval_ms = 500
/// total_duration_ms = 5000
///
/// [store]
/// backend = "file"
/// service = "myService"
/// account = "myAccount"
/// ```
///
/// # Fields Overview
///
/// - `camera`: capture source selection (`test-pattern` or `v4l2`), device
///   node, resolution, and per-capture preferences
/// - `burst`: tick interval, total burst duration, and the per-capture
///   timeout (0 waits for the camera indefinitely)
/// - `store`: secret store backend (`memory`, `file` or `keyring`) and the
///   fixed `service`/`account` key the photo is filed under
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub camera: CameraConfig,
    pub burst: BurstConfig,
    pub store: StoreConfig,
}

static IDENTIFIER: OnceLock<Regex> = OnceLock::new();

fn identifier_regex() -> &'static Regex {
    IDENTIFIER.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,63}$").unwrap())
}

impl AppConfig {
    /// Loads and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig =
            toml::from_str(&raw).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Checks the cross-field rules a plain deserialize cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // burst arithmetic must be constructible
        BurstPlan::from_millis(self.burst.interval_ms, self.burst.total_duration_ms)?;

        for (field, value) in [("store.service", &self.store.service), ("store.account", &self.store.account)] {
            if !identifier_regex().is_match(value) {
                return Err(ConfigError::BadIdentifier(format!(
                    "{} {:?} must match {}",
                    field,
                    value,
                    identifier_regex().as_str()
                )));
            }
        }

        if !(1..=8192).contains(&self.camera.width) || !(1..=8192).contains(&self.camera.height) {
            return Err(ConfigError::NotInRange(format!(
                "camera resolution {}x{} must be within 1..=8192",
                self.camera.width, self.camera.height
            )));
        }

        if self.camera.source == CameraSource::V4l2 && self.camera.device_path.as_os_str().is_empty() {
            return Err(ConfigError::BadIdentifier(
                "camera.device_path must not be empty for the v4l2 source".to_string(),
            ));
        }

        Ok(())
    }
}
