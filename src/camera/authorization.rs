//! Camera access control.
//!
//! Before a capture session is configured the sequencer consults a
//! [`PermissionGate`]. The gate starts out undetermined, resolves to a final
//! status on `request_access`, and a burst may only proceed once the status
//! is [`AccessStatus::Authorized`]. A denied or restricted gate stops the
//! sequencer before any device is touched.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::error_handling::types::AccessError;

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    /// The user or environment has not been asked yet.
    NotDetermined,
    Authorized,
    Denied,
    /// Access is blocked by policy or the device is absent.
    Restricted,
}

impl AccessStatus {
    /// The error a non-authorized status maps to, if any.
    pub fn deny_reason(&self) -> Option<AccessError> {
        match self {
            AccessStatus::Authorized => None,
            AccessStatus::Denied => Some(AccessError::Denied),
            AccessStatus::Restricted => Some(AccessError::Restricted),
            AccessStatus::NotDetermined => Some(AccessError::Undetermined),
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessStatus::NotDetermined => write!(f, "not determined"),
            AccessStatus::Authorized => write!(f, "authorized"),
            AccessStatus::Denied => write!(f, "denied"),
            AccessStatus::Restricted => write!(f, "restricted"),
        }
    }
}

/// Decides whether the process may use a camera.
pub trait PermissionGate: Send + Sync {
    /// Current status without prompting.
    fn status(&self) -> AccessStatus;

    /// Resolves an undetermined status and returns the final answer.
    fn request_access(&self) -> AccessStatus;

    /// Operator-facing hint shown when access is not granted.
    fn remediation_hint(&self) -> String;
}

/// Gate with a fixed answer, resolved on the first request.
///
/// Reports [`AccessStatus::NotDetermined`] until `request_access` has been
/// called once. Backs the test-pattern camera and doubles as a test gate.
pub struct StaticGate {
    resolved: AccessStatus,
    asked: AtomicBool,
}

impl StaticGate {
    pub fn new(resolved: AccessStatus) -> Self {
        Self { resolved, asked: AtomicBool::new(false) }
    }

    pub fn granting() -> Self {
        Self::new(AccessStatus::Authorized)
    }

    pub fn denying() -> Self {
        Self::new(AccessStatus::Denied)
    }

    pub fn restricted() -> Self {
        Self::new(AccessStatus::Restricted)
    }
}

impl PermissionGate for StaticGate {
    fn status(&self) -> AccessStatus {
        if self.asked.load(Ordering::SeqCst) {
            self.resolved
        } else {
            AccessStatus::NotDetermined
        }
    }

    fn request_access(&self) -> AccessStatus {
        self.asked.store(true, Ordering::SeqCst);
        info!("Access request resolved: {}", self.resolved);
        self.resolved
    }

    fn remediation_hint(&self) -> String {
        "this gate is fixed; reconfigure the camera source".to_string()
    }
}

/// Gate that probes a device node for access.
///
/// There is no interactive prompt on a headless system, so the answer comes
/// from the node itself: missing means restricted, unreadable means denied.
pub struct DeviceNodeGate {
    path: PathBuf,
}

impl DeviceNodeGate {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    fn probe(&self) -> AccessStatus {
        match std::fs::OpenOptions::new().read(true).open(&self.path) {
            Ok(_) => AccessStatus::Authorized,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AccessStatus::Restricted,
            Err(_) => AccessStatus::Denied,
        }
    }
}

impl PermissionGate for DeviceNodeGate {
    fn status(&self) -> AccessStatus {
        self.probe()
    }

    fn request_access(&self) -> AccessStatus {
        let status = self.probe();
        info!("Probed {}: {}", self.path.display(), status);
        status
    }

    fn remediation_hint(&self) -> String {
        format!(
            "check that {} exists and the current user may read it",
            self.path.display()
        )
    }
}
