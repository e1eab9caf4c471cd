use std::sync::Arc;

use log::info;

use crate::archive;
use crate::archive::envelope::ArchivedPhoto;
use crate::camera::authorization::{DeviceNodeGate, PermissionGate, StaticGate};
use crate::camera::camera_trait::Camera;
use crate::camera::test_pattern::TestPatternCamera;
#[cfg(feature = "capture-v4l2")]
use crate::camera::v4l2::V4l2Camera;
use crate::configuration::config::AppConfig;
use crate::configuration::types::{CameraConfig, CameraSource, StoreBackend, StoreConfig};
use crate::error_handling::types::{ControllerError, StoreError};
use crate::secret_store::file_store::FileStore;
#[cfg(feature = "platform-keyring")]
use crate::secret_store::keyring_store::KeyringStore;
use crate::secret_store::memory_store::MemoryStore;
use crate::secret_store::store_trait::BlobStore;
use crate::sequencing::report::BurstReport;
use crate::sequencing::scheduler::TokioScheduler;
use crate::sequencing::sequencer::CaptureSequencer;

/// Wires the configured backends together and exposes the operations the
/// CLI runs: burst, fetch, clear, doctor.
pub struct CaptureController {
    config: AppConfig,
    store: Arc<dyn BlobStore>,
    sequencer: CaptureSequencer,
}

impl CaptureController {
    pub fn from_config(config: AppConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        let store = build_store(&config.store)?;
        let camera = build_camera(&config.camera)?;
        let gate = build_gate(&config.camera);
        let sequencer = CaptureSequencer::new(
            &config,
            gate,
            camera,
            store.clone(),
            Arc::new(TokioScheduler),
        )?;
        info!("Controller ready (store: {})", store.describe());
        Ok(Self { config, store, sequencer })
    }

    pub fn sequencer(&self) -> &CaptureSequencer {
        &self.sequencer
    }

    /// Checks camera access, configures the session if necessary, and runs
    /// one full burst.
    pub async fn run_burst(&self) -> Result<BurstReport, ControllerError> {
        self.sequencer.ensure_ready().await?;
        Ok(self.sequencer.run_burst().await?)
    }

    /// Loads the stored photo and unwraps its envelope.
    pub fn fetch_photo(&self) -> Result<ArchivedPhoto, ControllerError> {
        let blob = self
            .store
            .load(&self.config.store.service, &self.config.store.account)?
            .ok_or(ControllerError::NoStoredPhoto)?;
        Ok(archive::decode(&blob)?)
    }

    /// Removes the stored photo so the next burst can save again.
    /// Returns `true` when an entry existed.
    pub fn clear_photo(&self) -> Result<bool, ControllerError> {
        Ok(self
            .store
            .clear(&self.config.store.service, &self.config.store.account)?)
    }

    /// Probes each subsystem and reports one line per check. Failures are
    /// folded into the lines instead of aborting the remaining probes.
    pub async fn doctor(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let gate = build_gate(&self.config.camera);
        lines.push(format!("camera access: {}", gate.request_access()));

        match build_camera(&self.config.camera) {
            Ok(camera) => match camera.open().await {
                Ok(caps) => lines.push(format!(
                    "camera: {} ready at {}x{}",
                    camera.describe(),
                    caps.width,
                    caps.height
                )),
                Err(e) => lines.push(format!("camera: FAILED ({})", e)),
            },
            Err(e) => lines.push(format!("camera: FAILED ({})", e)),
        }

        let plan = self.sequencer.plan();
        lines.push(format!(
            "burst plan: {} tick(s), one every {}ms over {}ms",
            plan.ticks(),
            plan.interval().as_millis(),
            plan.total_duration().as_millis()
        ));

        lines.push(format!("store: {}", self.store.describe()));
        match self
            .store
            .load(&self.config.store.service, &self.config.store.account)
        {
            Ok(Some(blob)) => lines.push(format!("stored photo: {} byte(s) present", blob.len())),
            Ok(None) => lines.push("stored photo: none".to_string()),
            Err(e) => lines.push(format!("stored photo: FAILED ({})", e)),
        }

        // round-trip a scratch entry without touching the real key
        let probe_account = format!("{}.probe", self.config.store.account);
        let line = match self
            .store
            .save(&self.config.store.service, &probe_account, b"probe")
        {
            Ok(()) => {
                let _ = self.store.clear(&self.config.store.service, &probe_account);
                "store write: ok".to_string()
            }
            Err(StoreError::AlreadyExists) => {
                let _ = self.store.clear(&self.config.store.service, &probe_account);
                "store write: ok (stale probe cleared)".to_string()
            }
            Err(e) => format!("store write: FAILED ({})", e),
        };
        lines.push(line);

        lines
    }
}

fn build_store(config: &StoreConfig) -> Result<Arc<dyn BlobStore>, ControllerError> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::File => Ok(Arc::new(FileStore::resolve(&config.path)?)),
        StoreBackend::Keyring => keyring_store(),
    }
}

#[cfg(feature = "platform-keyring")]
fn keyring_store() -> Result<Arc<dyn BlobStore>, ControllerError> {
    Ok(Arc::new(KeyringStore::new()))
}

#[cfg(not(feature = "platform-keyring"))]
fn keyring_store() -> Result<Arc<dyn BlobStore>, ControllerError> {
    Err(ControllerError::InitializationFailed(
        "this build does not include the platform-keyring feature".to_string(),
    ))
}

fn build_camera(config: &CameraConfig) -> Result<Arc<dyn Camera>, ControllerError> {
    match config.source {
        CameraSource::TestPattern => {
            Ok(Arc::new(TestPatternCamera::new(config.width, config.height)))
        }
        CameraSource::V4l2 => v4l2_camera(config),
    }
}

#[cfg(feature = "capture-v4l2")]
fn v4l2_camera(config: &CameraConfig) -> Result<Arc<dyn Camera>, ControllerError> {
    Ok(Arc::new(V4l2Camera::new(
        config.device_path.clone(),
        config.width,
        config.height,
    )))
}

#[cfg(not(feature = "capture-v4l2"))]
fn v4l2_camera(_config: &CameraConfig) -> Result<Arc<dyn Camera>, ControllerError> {
    Err(ControllerError::InitializationFailed(
        "this build does not include the capture-v4l2 feature".to_string(),
    ))
}

fn build_gate(config: &CameraConfig) -> Arc<dyn PermissionGate> {
    match config.source {
        CameraSource::TestPattern => Arc::new(StaticGate::granting()),
        CameraSource::V4l2 => Arc::new(DeviceNodeGate::new(&config.device_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Memory;
        config
    }

    #[test]
    fn test_from_config_rejects_invalid_timing() {
        let mut config = memory_config();
        config.burst.interval_ms = 0;
        let result = CaptureController::from_config(config);
        assert!(matches!(result, Err(ControllerError::Configuration(_))));
    }

    #[test]
    fn test_fetch_without_a_stored_photo() {
        let controller = CaptureController::from_config(memory_config()).unwrap();
        let result = controller.fetch_photo();
        assert!(matches!(result, Err(ControllerError::NoStoredPhoto)));
    }

    #[cfg(not(feature = "platform-keyring"))]
    #[test]
    fn test_keyring_backend_requires_the_feature() {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Keyring;
        let result = CaptureController::from_config(config);
        assert!(matches!(result, Err(ControllerError::InitializationFailed(_))));
    }

    #[cfg(not(feature = "capture-v4l2"))]
    #[test]
    fn test_v4l2_source_requires_the_feature() {
        let mut config = memory_config();
        config.camera.source = CameraSource::V4l2;
        let result = CaptureController::from_config(config);
        assert!(matches!(result, Err(ControllerError::InitializationFailed(_))));
    }
}
