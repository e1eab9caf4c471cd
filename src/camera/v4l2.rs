//! V4L2 camera backend.
//!
//! Captures stills from a local video device by negotiating MJPG output,
//! where every buffer is a standalone JPEG. The v4l API is synchronous and an
//! unresponsive driver can block a read indefinitely, so all device I/O runs
//! on the blocking pool; the awaiting side stays cancellable and the capture
//! timeout can preempt a read that never returns. Compiled only with the
//! `capture-v4l2` feature.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error, info};
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, FourCC};

use crate::camera::camera_trait::Camera;
use crate::camera::types::{CameraCapabilities, Frame, PhotoCodec, PhotoSettings};
use crate::error_handling::types::CameraError;

struct OpenDevice {
    device: Device,
    // dimensions the driver actually applied, not the requested ones
    width: u32,
    height: u32,
}

pub struct V4l2Camera {
    device_path: PathBuf,
    width: u32,
    height: u32,
    device: Mutex<Option<Arc<OpenDevice>>>,
}

impl V4l2Camera {
    pub fn new<P: Into<PathBuf>>(device_path: P, width: u32, height: u32) -> Self {
        Self {
            device_path: device_path.into(),
            width,
            height,
            device: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Camera for V4l2Camera {
    fn describe(&self) -> String {
        format!("v4l2 ({})", self.device_path.display())
    }

    async fn open(&self) -> Result<CameraCapabilities, CameraError> {
        let path = self.device_path.clone();
        let (req_width, req_height) = (self.width, self.height);
        let (dev, applied) = tokio::task::spawn_blocking(move || {
            let dev = Device::with_path(&path).map_err(|e| { error!("Failed to open {}: {}", path.display(), e); CameraError::OpenFailed(e.to_string()) })?;
            let mut fmt = dev.format().map_err(|e| { error!("Failed to query format on {}: {}", path.display(), e); CameraError::OpenFailed(e.to_string()) })?;
            fmt.width = req_width;
            fmt.height = req_height;
            fmt.fourcc = FourCC::new(b"MJPG");
            let applied = dev.set_format(&fmt).map_err(|e| { error!("Failed to set format on {}: {}", path.display(), e); CameraError::OpenFailed(e.to_string()) })?;
            Ok::<_, CameraError>((dev, applied))
        })
        .await
        .map_err(|e| { error!("Device open task failed: {}", e); CameraError::OpenFailed(e.to_string()) })??;

        if applied.fourcc != FourCC::new(b"MJPG") {
            return Err(CameraError::OpenFailed(format!(
                "device does not produce MJPG (got {})",
                applied.fourcc
            )));
        }
        info!(
            "Opened {} at {}x{} MJPG",
            self.device_path.display(),
            applied.width,
            applied.height
        );

        let mut guard = self.device.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::new(OpenDevice {
            device: dev,
            width: applied.width,
            height: applied.height,
        }));

        Ok(CameraCapabilities {
            codecs: vec![PhotoCodec::Jpeg],
            width: applied.width,
            height: applied.height,
            supports_flash: false,
            supports_stabilization: false,
        })
    }

    async fn capture(&self, settings: &PhotoSettings) -> Result<Frame, CameraError> {
        if settings.codec != PhotoCodec::Jpeg {
            return Err(CameraError::EncodingFailed(format!(
                "v4l2 backend produces JPEG only, not {}",
                settings.codec
            )));
        }

        let open = {
            let guard = self.device.lock().unwrap_or_else(|e| e.into_inner());
            guard.as_ref().map(Arc::clone).ok_or(CameraError::NotOpen)?
        };
        let (width, height) = (open.width, open.height);
        let path = self.device_path.clone();

        // the read blocks until the driver delivers a buffer; if the caller
        // gives up, the detached thread still runs the read to completion
        let bytes = tokio::task::spawn_blocking(move || {
            let mut stream = Stream::with_buffers(&open.device, Type::VideoCapture, 1).map_err(|e| { error!("Failed to start stream on {}: {}", path.display(), e); CameraError::CaptureFailed(e.to_string()) })?;
            let (buf, _meta) = stream.next().map_err(|e| { error!("Failed to read frame from {}: {}", path.display(), e); CameraError::CaptureFailed(e.to_string()) })?;
            Ok::<_, CameraError>(buf.to_vec())
        })
        .await
        .map_err(|e| { error!("Capture task failed: {}", e); CameraError::CaptureFailed(e.to_string()) })??;

        debug!("Captured {} byte(s) from {}", bytes.len(), self.device_path.display());

        Ok(Frame {
            bytes,
            codec: PhotoCodec::Jpeg,
            width,
            height,
            captured_at: Utc::now(),
        })
    }
}
