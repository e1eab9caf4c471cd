//! Burst capture sequencer.
//!
//! Owns the lifecycle from permission check to finished burst. All
//! collaborators are injected behind traits, so the sequencer itself is
//! plain orchestration: gate, then session, then one capture per interval
//! until the duration budget runs out.
//!
//! A burst never aborts halfway because one tick went wrong. Camera errors,
//! timeouts, and store rejections are recorded per tick and the next tick
//! runs on schedule. Only a broken lifecycle (a transition the state machine
//! forbids) ends the burst early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, error, info, warn};
use uuid::Uuid;

use crate::archive::envelope;
use crate::camera::authorization::{AccessStatus, PermissionGate};
use crate::camera::camera_trait::Camera;
use crate::camera::session::CaptureSession;
use crate::camera::types::CapturePreferences;
use crate::configuration::config::AppConfig;
use crate::error_handling::types::{BurstError, ConfigError, StateError};
use crate::secret_store::store_trait::BlobStore;
use crate::sequencing::burst::{BurstPhase, BurstPlan, BurstProgress};
use crate::sequencing::report::{BurstReport, TickRecord, TickStatus};
use crate::sequencing::scheduler::Scheduler;
use crate::sequencing::state::SequencerState;

pub struct CaptureSequencer {
    gate: Arc<dyn PermissionGate>,
    camera: Arc<dyn Camera>,
    store: Arc<dyn BlobStore>,
    scheduler: Arc<dyn Scheduler>,
    plan: BurstPlan,
    preferences: CapturePreferences,
    service: String,
    account: String,
    /// Zero means wait for the camera indefinitely.
    capture_timeout: Duration,
    state: Mutex<SequencerState>,
    session: Mutex<Option<CaptureSession>>,
    /// Burst trigger latch. Cleared while a burst is in flight so a second
    /// trigger cannot start an overlapping burst.
    trigger_enabled: AtomicBool,
}

impl CaptureSequencer {
    pub fn new(
        config: &AppConfig,
        gate: Arc<dyn PermissionGate>,
        camera: Arc<dyn Camera>,
        store: Arc<dyn BlobStore>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, ConfigError> {
        let plan = BurstPlan::from_millis(config.burst.interval_ms, config.burst.total_duration_ms)?;
        Ok(Self {
            gate,
            camera,
            store,
            scheduler,
            plan,
            preferences: config.camera.preferences.clone(),
            service: config.store.service.clone(),
            account: config.store.account.clone(),
            capture_timeout: Duration::from_millis(config.burst.capture_timeout_ms),
            state: Mutex::new(SequencerState::AwaitingPermission),
            session: Mutex::new(None),
            trigger_enabled: AtomicBool::new(true),
        })
    }

    pub fn state(&self) -> SequencerState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled.load(Ordering::SeqCst)
    }

    pub fn plan(&self) -> BurstPlan {
        self.plan
    }

    fn transition(
        &self,
        apply: impl FnOnce(SequencerState) -> Result<SequencerState, StateError>,
    ) -> Result<(), BurstError> {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let next = apply(*guard).map_err(|e| {
            error!("Rejected lifecycle event: {}", e);
            BurstError::State(e)
        })?;
        debug!("State {} -> {}", *guard, next);
        *guard = next;
        Ok(())
    }

    /// Runs the permission check and configures the capture session.
    ///
    /// Without granted access the sequencer stays in
    /// [`SequencerState::AwaitingPermission`] and no device is opened. A
    /// failed camera open rolls back to the same state, so a later call can
    /// retry once the device recovers.
    pub async fn prepare(&self) -> Result<(), BurstError> {
        let mut status = self.gate.status();
        if status == AccessStatus::NotDetermined {
            info!("Requesting camera access");
            status = self.gate.request_access();
        }
        if let Some(reason) = status.deny_reason() {
            warn!(
                "Camera access not granted ({}); {}",
                status,
                self.gate.remediation_hint()
            );
            return Err(BurstError::Access(reason));
        }
        self.transition(|s| s.authorize())?;

        let capabilities = match self.camera.open().await {
            Ok(capabilities) => capabilities,
            Err(e) => {
                error!("Failed to open camera: {}", e);
                self.transition(|s| s.fail_session())?;
                return Err(BurstError::Camera(e));
            }
        };
        let session = CaptureSession::new(self.camera.describe(), capabilities);
        info!(
            "[{}] capture session ready on {}",
            session.session_id, session.camera_label
        );
        {
            let mut guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
            *guard = Some(session);
        }
        self.transition(|s| s.commit_session())?;
        Ok(())
    }

    /// Prepares the sequencer unless that already happened.
    pub async fn ensure_ready(&self) -> Result<(), BurstError> {
        match self.state() {
            SequencerState::AwaitingPermission => self.prepare().await,
            _ => Ok(()),
        }
    }

    /// Runs one full burst and reports what happened on every tick.
    pub async fn run_burst(&self) -> Result<BurstReport, BurstError> {
        if self
            .trigger_enabled
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Burst trigger ignored: a burst is already running");
            return Err(BurstError::BurstInProgress);
        }
        let result = self.burst_inner().await;
        self.trigger_enabled.store(true, Ordering::SeqCst);
        result
    }

    async fn burst_inner(&self) -> Result<BurstReport, BurstError> {
        // access can be revoked between bursts, so the gate is consulted
        // again on every trigger
        let status = self.gate.status();
        if let Some(reason) = status.deny_reason() {
            warn!(
                "Camera access lost before the burst ({}); {}",
                status,
                self.gate.remediation_hint()
            );
            return Err(BurstError::Access(reason));
        }

        self.transition(|s| s.begin_burst())?;
        let burst_id = Uuid::new_v4();
        let mut progress = BurstProgress::new(self.plan);
        let mut report = BurstReport::new(burst_id, &self.plan);
        info!(
            "[{}] burst started: {} tick(s), one every {}ms",
            burst_id,
            self.plan.ticks(),
            self.plan.interval().as_millis()
        );

        loop {
            self.scheduler.sleep(self.plan.interval()).await;
            self.transition(|s| s.begin_tick())?;
            let tick = progress.ticks_done() + 1;
            let status = self.capture_once(burst_id, tick).await;
            let phase = progress.advance();
            report.record(TickRecord {
                tick,
                remaining_ms: progress.remaining().as_millis() as u64,
                status,
            });
            if phase == BurstPhase::Complete {
                break;
            }
        }

        self.transition(|s| s.finish_burst())?;
        info!(
            "[{}] burst finished: {} saved, {} failed",
            burst_id, report.saved, report.failed
        );
        Ok(report)
    }

    /// One tick: negotiate settings, capture, wrap, store.
    async fn capture_once(&self, burst_id: Uuid, tick: u64) -> TickStatus {
        // settings are rebuilt from preferences for every exposure
        let settings = {
            let guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
            match guard.as_ref() {
                Some(session) => session.negotiate(&self.preferences),
                None => {
                    return TickStatus::CaptureFailed {
                        reason: "no active camera session".to_string(),
                    }
                }
            }
        };

        let outcome = if self.capture_timeout.is_zero() {
            self.camera.capture(&settings).await
        } else {
            tokio::select! {
                outcome = self.camera.capture(&settings) => outcome,
                _ = self.scheduler.sleep(self.capture_timeout) => {
                    warn!(
                        "[{}] tick {}: capture timed out after {}ms",
                        burst_id, tick, self.capture_timeout.as_millis()
                    );
                    return TickStatus::CaptureTimedOut {
                        after_ms: self.capture_timeout.as_millis() as u64,
                    };
                }
            }
        };

        let frame = match outcome {
            Ok(frame) => frame,
            Err(e) => {
                warn!("[{}] tick {}: capture failed: {}", burst_id, tick, e);
                return TickStatus::CaptureFailed { reason: e.to_string() };
            }
        };
        if frame.bytes.is_empty() {
            warn!("[{}] tick {}: camera produced an empty frame", burst_id, tick);
            return TickStatus::CaptureFailed {
                reason: "empty frame payload".to_string(),
            };
        }

        let blob = envelope::encode(&frame.bytes, frame.codec);
        match self.store.save(&self.service, &self.account, &blob) {
            Ok(()) => {
                info!(
                    "[{}] tick {}: stored {} byte(s) under {}/{}",
                    burst_id,
                    tick,
                    blob.len(),
                    self.service,
                    self.account
                );
                TickStatus::Saved { payload_bytes: frame.bytes.len() }
            }
            Err(e) => {
                warn!("[{}] tick {}: save failed: {}", burst_id, tick, e);
                TickStatus::SaveFailed { reason: e.to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    use crate::archive;
    use crate::camera::authorization::StaticGate;
    use crate::camera::test_pattern::TestPatternCamera;
    use crate::camera::types::{CameraCapabilities, Frame, PhotoCodec, PhotoSettings};
    use crate::error_handling::types::{AccessError, CameraError};
    use crate::secret_store::memory_store::MemoryStore;
    use crate::sequencing::scheduler::TokioScheduler;

    fn sequencer_with(
        camera: Arc<dyn Camera>,
        gate: Arc<dyn PermissionGate>,
    ) -> (CaptureSequencer, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let sequencer = CaptureSequencer::new(
            &config,
            gate,
            camera,
            store.clone(),
            Arc::new(TokioScheduler),
        )
        .unwrap();
        (sequencer, store)
    }

    fn test_caps() -> CameraCapabilities {
        CameraCapabilities {
            codecs: vec![PhotoCodec::Jpeg],
            width: 64,
            height: 64,
            supports_flash: false,
            supports_stabilization: false,
        }
    }

    struct StalledCamera;

    #[async_trait]
    impl Camera for StalledCamera {
        fn describe(&self) -> String {
            "stalled".to_string()
        }
        async fn open(&self) -> Result<CameraCapabilities, CameraError> {
            Ok(test_caps())
        }
        async fn capture(&self, _settings: &PhotoSettings) -> Result<Frame, CameraError> {
            std::future::pending().await
        }
    }

    struct FailingCamera;

    #[async_trait]
    impl Camera for FailingCamera {
        fn describe(&self) -> String {
            "failing".to_string()
        }
        async fn open(&self) -> Result<CameraCapabilities, CameraError> {
            Ok(test_caps())
        }
        async fn capture(&self, _settings: &PhotoSettings) -> Result<Frame, CameraError> {
            Err(CameraError::CaptureFailed("sensor fault".to_string()))
        }
    }

    struct EmptyFrameCamera;

    #[async_trait]
    impl Camera for EmptyFrameCamera {
        fn describe(&self) -> String {
            "empty".to_string()
        }
        async fn open(&self) -> Result<CameraCapabilities, CameraError> {
            Ok(test_caps())
        }
        async fn capture(&self, settings: &PhotoSettings) -> Result<Frame, CameraError> {
            Ok(Frame {
                bytes: Vec::new(),
                codec: settings.codec,
                width: 64,
                height: 64,
                captured_at: chrono::Utc::now(),
            })
        }
    }

    struct SlowCamera;

    #[async_trait]
    impl Camera for SlowCamera {
        fn describe(&self) -> String {
            "slow".to_string()
        }
        async fn open(&self) -> Result<CameraCapabilities, CameraError> {
            Ok(test_caps())
        }
        async fn capture(&self, settings: &PhotoSettings) -> Result<Frame, CameraError> {
            tokio::time::sleep(Duration::from_millis(10_000)).await;
            Ok(Frame {
                bytes: vec![1, 2, 3],
                codec: settings.codec,
                width: 64,
                height: 64,
                captured_at: chrono::Utc::now(),
            })
        }
    }

    /// Camera whose read occupies a blocking-pool thread for a full second.
    struct BlockingReadCamera;

    #[async_trait]
    impl Camera for BlockingReadCamera {
        fn describe(&self) -> String {
            "blocking-read".to_string()
        }
        async fn open(&self) -> Result<CameraCapabilities, CameraError> {
            Ok(test_caps())
        }
        async fn capture(&self, settings: &PhotoSettings) -> Result<Frame, CameraError> {
            let codec = settings.codec;
            tokio::task::spawn_blocking(move || {
                std::thread::sleep(Duration::from_millis(1000));
                Frame {
                    bytes: vec![9, 9, 9],
                    codec,
                    width: 64,
                    height: 64,
                    captured_at: chrono::Utc::now(),
                }
            })
            .await
            .map_err(|e| CameraError::CaptureFailed(e.to_string()))
        }
    }

    struct FlakyOpenCamera {
        opens: AtomicU32,
    }

    #[async_trait]
    impl Camera for FlakyOpenCamera {
        fn describe(&self) -> String {
            "flaky-open".to_string()
        }
        async fn open(&self) -> Result<CameraCapabilities, CameraError> {
            if self.opens.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(CameraError::OpenFailed("device busy".to_string()))
            } else {
                Ok(test_caps())
            }
        }
        async fn capture(&self, settings: &PhotoSettings) -> Result<Frame, CameraError> {
            Ok(Frame {
                bytes: vec![7; 16],
                codec: settings.codec,
                width: 64,
                height: 64,
                captured_at: chrono::Utc::now(),
            })
        }
    }

    struct RevocableGate {
        revoked: AtomicBool,
    }

    impl PermissionGate for RevocableGate {
        fn status(&self) -> AccessStatus {
            if self.revoked.load(Ordering::SeqCst) {
                AccessStatus::Denied
            } else {
                AccessStatus::Authorized
            }
        }
        fn request_access(&self) -> AccessStatus {
            self.status()
        }
        fn remediation_hint(&self) -> String {
            "re-grant camera access".to_string()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_burst_saves_only_the_first_photo() {
        let (sequencer, store) = sequencer_with(
            Arc::new(TestPatternCamera::new(32, 32)),
            Arc::new(StaticGate::granting()),
        );
        sequencer.prepare().await.unwrap();

        let before = tokio::time::Instant::now();
        let report = sequencer.run_burst().await.unwrap();
        assert_eq!(before.elapsed(), Duration::from_millis(5000));

        assert_eq!(report.planned_ticks, 10);
        assert_eq!(report.ticks.len(), 10);
        assert_eq!(report.saved, 1);
        assert_eq!(report.failed, 9);
        assert!(report.ticks[0].status.is_saved());
        for record in &report.ticks[1..] {
            assert!(matches!(record.status, TickStatus::SaveFailed { .. }));
        }
        for (i, record) in report.ticks.iter().enumerate() {
            assert_eq!(record.tick, i as u64 + 1);
            assert_eq!(record.remaining_ms, 4500 - 500 * i as u64);
        }

        // the stored blob is the first frame, wrapped in the envelope
        let blob = store.load("myService", "myAccount").unwrap().unwrap();
        let photo = archive::decode(&blob).unwrap();
        assert_eq!(photo.codec, PhotoCodec::Jpeg);
        assert_eq!(&photo.payload[0..2], &[0xFF, 0xD8]);

        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert!(sequencer.trigger_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_denied_access_never_configures() {
        let (sequencer, store) = sequencer_with(
            Arc::new(TestPatternCamera::new(32, 32)),
            Arc::new(StaticGate::denying()),
        );

        let result = sequencer.prepare().await;
        assert!(matches!(result, Err(BurstError::Access(AccessError::Denied))));
        assert_eq!(sequencer.state(), SequencerState::AwaitingPermission);

        // a burst cannot start either
        let result = sequencer.run_burst().await;
        assert!(matches!(result, Err(BurstError::Access(AccessError::Denied))));
        assert_eq!(sequencer.state(), SequencerState::AwaitingPermission);
        assert_eq!(store.load("myService", "myAccount").unwrap(), None);
        // the latch is released again after the rejected trigger
        assert!(sequencer.trigger_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restricted_access_never_configures() {
        let (sequencer, store) = sequencer_with(
            Arc::new(TestPatternCamera::new(32, 32)),
            Arc::new(StaticGate::restricted()),
        );

        let result = sequencer.prepare().await;
        assert!(matches!(
            result,
            Err(BurstError::Access(AccessError::Restricted))
        ));
        assert_eq!(sequencer.state(), SequencerState::AwaitingPermission);
        assert_eq!(store.load("myService", "myAccount").unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_open_leaves_the_sequencer_retryable() {
        let camera = Arc::new(FlakyOpenCamera { opens: AtomicU32::new(0) });
        let (sequencer, store) = sequencer_with(camera, Arc::new(StaticGate::granting()));

        let result = sequencer.prepare().await;
        assert!(matches!(
            result,
            Err(BurstError::Camera(CameraError::OpenFailed(_)))
        ));
        assert_eq!(sequencer.state(), SequencerState::AwaitingPermission);

        // the next attempt runs the whole lifecycle again
        sequencer.ensure_ready().await.unwrap();
        assert_eq!(sequencer.state(), SequencerState::Idle);
        let report = sequencer.run_burst().await.unwrap();
        assert_eq!(report.saved, 1);
        assert!(store.load("myService", "myAccount").unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_trigger_is_rejected_while_burst_runs() {
        let (sequencer, _store) = sequencer_with(
            Arc::new(TestPatternCamera::new(32, 32)),
            Arc::new(StaticGate::granting()),
        );
        sequencer.prepare().await.unwrap();

        let (first, second) = tokio::join!(sequencer.run_burst(), sequencer.run_burst());
        let report = first.unwrap();
        assert_eq!(report.ticks.len(), 10);
        assert!(matches!(second, Err(BurstError::BurstInProgress)));
        assert!(sequencer.trigger_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_camera_times_out_every_tick() {
        let (sequencer, store) =
            sequencer_with(Arc::new(StalledCamera), Arc::new(StaticGate::granting()));
        sequencer.prepare().await.unwrap();

        let report = sequencer.run_burst().await.unwrap();
        assert_eq!(report.ticks.len(), 10);
        assert_eq!(report.saved, 0);
        assert_eq!(report.failed, 10);
        for record in &report.ticks {
            assert_eq!(
                record.status,
                TickStatus::CaptureTimedOut { after_ms: 2000 }
            );
        }
        assert_eq!(store.load("myService", "myAccount").unwrap(), None);
        assert_eq!(sequencer.state(), SequencerState::Idle);
    }

    #[tokio::test]
    async fn test_blocking_camera_read_is_preempted_by_the_timeout() {
        // runs on the real clock; the paused clock never advances while a
        // blocking-pool task is in flight
        let store = Arc::new(MemoryStore::new());
        let mut config = AppConfig::default();
        config.burst.interval_ms = 100;
        config.burst.total_duration_ms = 100;
        config.burst.capture_timeout_ms = 200;
        let sequencer = CaptureSequencer::new(
            &config,
            Arc::new(StaticGate::granting()),
            Arc::new(BlockingReadCamera),
            store.clone(),
            Arc::new(TokioScheduler),
        )
        .unwrap();
        sequencer.prepare().await.unwrap();

        let report = sequencer.run_burst().await.unwrap();
        assert_eq!(report.ticks.len(), 1);
        assert_eq!(
            report.ticks[0].status,
            TickStatus::CaptureTimedOut { after_ms: 200 }
        );
        assert_eq!(store.load("myService", "myAccount").unwrap(), None);
        assert_eq!(sequencer.state(), SequencerState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_zero_waits_for_a_slow_camera() {
        let store = Arc::new(MemoryStore::new());
        let mut config = AppConfig::default();
        config.burst.capture_timeout_ms = 0;
        let sequencer = CaptureSequencer::new(
            &config,
            Arc::new(StaticGate::granting()),
            Arc::new(SlowCamera),
            store.clone(),
            Arc::new(TokioScheduler),
        )
        .unwrap();
        sequencer.prepare().await.unwrap();

        let before = tokio::time::Instant::now();
        let report = sequencer.run_burst().await.unwrap();
        // every tick waited out the 10s capture instead of timing out
        assert_eq!(before.elapsed(), Duration::from_millis(10 * (500 + 10_000)));
        assert_eq!(report.saved, 1);
        assert!(report
            .ticks
            .iter()
            .all(|t| !matches!(t.status, TickStatus::CaptureTimedOut { .. })));
        assert!(store.load("myService", "myAccount").unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_access_is_rechecked_on_every_burst() {
        let gate = Arc::new(RevocableGate { revoked: AtomicBool::new(false) });
        let (sequencer, _store) =
            sequencer_with(Arc::new(TestPatternCamera::new(32, 32)), gate.clone());
        sequencer.prepare().await.unwrap();
        sequencer.run_burst().await.unwrap();

        gate.revoked.store(true, Ordering::SeqCst);
        let result = sequencer.run_burst().await;
        assert!(matches!(result, Err(BurstError::Access(AccessError::Denied))));
        // the session survives; only the burst is refused
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert!(sequencer.trigger_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_failure_is_recorded_and_burst_continues() {
        let (sequencer, _store) =
            sequencer_with(Arc::new(FailingCamera), Arc::new(StaticGate::granting()));
        sequencer.prepare().await.unwrap();

        let report = sequencer.run_burst().await.unwrap();
        assert_eq!(report.ticks.len(), 10);
        for record in &report.ticks {
            match &record.status {
                TickStatus::CaptureFailed { reason } => assert!(reason.contains("sensor fault")),
                other => panic!("unexpected status {:?}", other),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_frames_are_rejected_before_the_store() {
        let (sequencer, store) =
            sequencer_with(Arc::new(EmptyFrameCamera), Arc::new(StaticGate::granting()));
        sequencer.prepare().await.unwrap();

        let report = sequencer.run_burst().await.unwrap();
        assert_eq!(report.saved, 0);
        for record in &report.ticks {
            assert_eq!(
                record.status,
                TickStatus::CaptureFailed { reason: "empty frame payload".to_string() }
            );
        }
        assert_eq!(store.load("myService", "myAccount").unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_bursts_keep_the_first_photo() {
        let (sequencer, store) = sequencer_with(
            Arc::new(TestPatternCamera::new(32, 32)),
            Arc::new(StaticGate::granting()),
        );
        sequencer.prepare().await.unwrap();

        let first = sequencer.run_burst().await.unwrap();
        assert_eq!(first.saved, 1);
        let original = store.load("myService", "myAccount").unwrap().unwrap();

        // the key is still occupied, so a second burst saves nothing
        let second = sequencer.run_burst().await.unwrap();
        assert_eq!(second.saved, 0);
        assert_eq!(second.failed, 10);
        assert_eq!(store.load("myService", "myAccount").unwrap(), Some(original));
    }

    #[tokio::test(start_paused = true)]
    async fn test_prepare_twice_is_a_state_error() {
        let (sequencer, _store) = sequencer_with(
            Arc::new(TestPatternCamera::new(32, 32)),
            Arc::new(StaticGate::granting()),
        );
        sequencer.prepare().await.unwrap();
        let result = sequencer.prepare().await;
        assert!(matches!(
            result,
            Err(BurstError::State(StateError::InvalidTransition { from: "idle", event: "authorize" }))
        ));

        // ensure_ready is the idempotent entry point
        sequencer.ensure_ready().await.unwrap();
        assert_eq!(sequencer.state(), SequencerState::Idle);
    }
}
