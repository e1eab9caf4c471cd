//! Common data types used across the camera subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Encoding of a captured photo payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoCodec {
    /// JPEG-compressed payload.
    Jpeg,
    /// PNG-compressed payload.
    Png,
    /// Unencoded interleaved RGB bytes.
    Raw,
}

impl PhotoCodec {
    /// Stable one-byte tag used by the archive envelope.
    pub fn code(self) -> u8 {
        match self {
            PhotoCodec::Jpeg => 1,
            PhotoCodec::Png => 2,
            PhotoCodec::Raw => 3,
        }
    }

    /// Reverse of [`PhotoCodec::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PhotoCodec::Jpeg),
            2 => Some(PhotoCodec::Png),
            3 => Some(PhotoCodec::Raw),
            _ => None,
        }
    }

    /// Conventional file extension for exported payloads.
    pub fn extension(self) -> &'static str {
        match self {
            PhotoCodec::Jpeg => "jpg",
            PhotoCodec::Png => "png",
            PhotoCodec::Raw => "rgb",
        }
    }
}

impl std::fmt::Display for PhotoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhotoCodec::Jpeg => "jpeg",
            PhotoCodec::Png => "png",
            PhotoCodec::Raw => "raw",
        };
        write!(f, "{}", name)
    }
}

/// Requested flash behavior for a single capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashMode {
    Auto,
    On,
    Off,
}

/// What a camera advertises after its session has been configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraCapabilities {
    /// Codecs the device can deliver, most preferred first.
    pub codecs: Vec<PhotoCodec>,
    /// Negotiated frame width in pixels.
    pub width: u32,
    /// Negotiated frame height in pixels.
    pub height: u32,
    pub supports_flash: bool,
    pub supports_stabilization: bool,
}

/// Operator preferences applied when building per-capture settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapturePreferences {
    /// Codec preference order; the first one the device supports wins.
    pub codecs: Vec<PhotoCodec>,
    pub flash: FlashMode,
    pub stabilization: bool,
}

impl Default for CapturePreferences {
    fn default() -> Self {
        Self {
            codecs: vec![PhotoCodec::Jpeg],
            flash: FlashMode::Auto,
            stabilization: true,
        }
    }
}

/// Settings for exactly one capture request.
///
/// Rebuilt before every single capture by negotiating the operator
/// preferences against the session capabilities, so a device that stops
/// advertising a codec mid-session is never asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSettings {
    pub codec: PhotoCodec,
    pub flash: FlashMode,
    pub stabilization: bool,
}

impl PhotoSettings {
    /// Builds settings for one capture from preferences and capabilities.
    ///
    /// The first preferred codec the device advertises is selected; when none
    /// match, the device's own first choice is used (raw as a last resort).
    /// Flash and stabilization requests are dropped if unsupported.
    pub fn negotiate(prefs: &CapturePreferences, caps: &CameraCapabilities) -> Self {
        let codec = prefs
            .codecs
            .iter()
            .copied()
            .find(|c| caps.codecs.contains(c))
            .or_else(|| caps.codecs.first().copied())
            .unwrap_or(PhotoCodec::Raw);

        Self {
            codec,
            flash: if caps.supports_flash { prefs.flash } else { FlashMode::Off },
            stabilization: prefs.stabilization && caps.supports_stabilization,
        }
    }
}

/// The completion payload of one capture request: image bytes plus the
/// metadata needed to interpret them.
#[derive(Debug, Clone)]
pub struct Frame {
    pub bytes: Vec<u8>,
    pub codec: PhotoCodec,
    pub width: u32,
    pub height: u32,
    pub captured_at: DateTime<Utc>,
}
