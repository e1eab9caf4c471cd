use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    BadInterval(String),
    BadDuration(String),
    BadIdentifier(String),
    NotInRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::BadInterval(e) => write!(f, "Capture interval error: {}", e),
            ConfigError::BadDuration(e) => write!(f, "Burst duration error: {}", e),
            ConfigError::BadIdentifier(e) => write!(f, "Store identifier error: {}", e),
            ConfigError::NotInRange(e) => write!(f, "Value out of range: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    Denied,
    Restricted,
    Undetermined,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::Denied => write!(f, "Camera access denied"),
            AccessError::Restricted => write!(f, "Camera access restricted by policy"),
            AccessError::Undetermined => write!(f, "Camera access could not be determined"),
        }
    }
}

impl std::error::Error for AccessError {}

#[derive(Debug)]
pub enum CameraError {
    OpenFailed(String),
    NotOpen,
    CaptureFailed(String),
    EncodingFailed(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::OpenFailed(e) => write!(f, "Camera open failed: {}", e),
            CameraError::NotOpen => write!(f, "Camera session is not running"),
            CameraError::CaptureFailed(e) => write!(f, "Photo capture failed: {}", e),
            CameraError::EncodingFailed(e) => write!(f, "Frame encoding failed: {}", e),
        }
    }
}

impl std::error::Error for CameraError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    TooShort(usize),
    BadMagic,
    UnsupportedVersion(u16),
    ReservedFlags(u8),
    UnknownCodec(u8),
    LengthMismatch { declared: usize, actual: usize },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::TooShort(len) => {
                write!(f, "Archive blob too short for the envelope header: {} byte(s)", len)
            }
            ArchiveError::BadMagic => write!(f, "Archive magic bytes do not match"),
            ArchiveError::UnsupportedVersion(v) => {
                write!(f, "Unsupported archive version: {}", v)
            }
            ArchiveError::ReservedFlags(b) => {
                write!(f, "Reserved archive flag byte is set: {:#04x}", b)
            }
            ArchiveError::UnknownCodec(c) => write!(f, "Unknown photo codec tag: {}", c),
            ArchiveError::LengthMismatch { declared, actual } => write!(
                f,
                "Archive payload length mismatch: header declares {}, found {}",
                declared, actual
            ),
        }
    }
}

impl std::error::Error for ArchiveError {}

#[derive(Debug)]
pub enum StoreError {
    EmptyPayload,
    AlreadyExists,
    InvalidKey(String),
    WriteFailed,
    ReadFailed,
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyPayload => write!(f, "Refusing to store an empty payload"),
            StoreError::AlreadyExists => {
                write!(f, "An entry already exists under this service/account pair")
            }
            StoreError::InvalidKey(e) => write!(f, "Invalid store key: {}", e),
            StoreError::WriteFailed => write!(f, "Store write failed"),
            StoreError::ReadFailed => write!(f, "Store read failed"),
            StoreError::Unavailable(e) => write!(f, "Store backend unavailable: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidTransition { from, event } => {
                write!(f, "Invalid sequencer transition: {} from state {}", event, from)
            }
        }
    }
}

impl std::error::Error for StateError {}

#[derive(Debug)]
pub enum BurstError {
    BurstInProgress,
    Access(AccessError),
    Camera(CameraError),
    State(StateError),
}

impl fmt::Display for BurstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BurstError::BurstInProgress => write!(f, "A capture burst is already in progress"),
            BurstError::Access(e) => write!(f, "Access error: {}", e),
            BurstError::Camera(e) => write!(f, "Camera error: {}", e),
            BurstError::State(e) => write!(f, "State error: {}", e),
        }
    }
}

impl std::error::Error for BurstError {}

impl From<AccessError> for BurstError {
    fn from(err: AccessError) -> Self {
        BurstError::Access(err)
    }
}

impl From<CameraError> for BurstError {
    fn from(err: CameraError) -> Self {
        BurstError::Camera(err)
    }
}

impl From<StateError> for BurstError {
    fn from(err: StateError) -> Self {
        BurstError::State(err)
    }
}

#[derive(Debug)]
pub enum ControllerError {
    Configuration(ConfigError),
    Store(StoreError),
    Archive(ArchiveError),
    Burst(BurstError),
    NoStoredPhoto,
    InitializationFailed(String),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Configuration(e) => write!(f, "Configuration error: {}", e),
            ControllerError::Store(e) => write!(f, "Store error: {}", e),
            ControllerError::Archive(e) => write!(f, "Archive error: {}", e),
            ControllerError::Burst(e) => write!(f, "Burst error: {}", e),
            ControllerError::NoStoredPhoto => {
                write!(f, "No photo is stored under the configured service/account pair")
            }
            ControllerError::InitializationFailed(e) => write!(f, "Initialization failed: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::Configuration(err)
    }
}

impl From<StoreError> for ControllerError {
    fn from(err: StoreError) -> Self {
        ControllerError::Store(err)
    }
}

impl From<ArchiveError> for ControllerError {
    fn from(err: ArchiveError) -> Self {
        ControllerError::Archive(err)
    }
}

impl From<BurstError> for ControllerError {
    fn from(err: BurstError) -> Self {
        ControllerError::Burst(err)
    }
}
