//! Synthetic camera backend.
//!
//! Renders a moving gradient instead of talking to hardware, so the full
//! capture path can run anywhere. Each frame differs from the previous one
//! via a frame counter folded into the pixel values.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use image::{ImageFormat, Rgb, RgbImage};
use log::{debug, info};

use crate::camera::camera_trait::Camera;
use crate::camera::types::{CameraCapabilities, Frame, PhotoCodec, PhotoSettings};
use crate::error_handling::types::CameraError;

pub struct TestPatternCamera {
    width: u32,
    height: u32,
    frame_counter: AtomicU32,
    opened: AtomicBool,
}

impl TestPatternCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame_counter: AtomicU32::new(0),
            opened: AtomicBool::new(false),
        }
    }

    fn render(&self, seed: u32) -> RgbImage {
        let (w, h) = (self.width, self.height);
        RgbImage::from_fn(w, h, |x, y| {
            let r = ((x * 255) / w.max(1)) as u8;
            let g = ((y * 255) / h.max(1)) as u8;
            let b = (seed % 256) as u8;
            Rgb([r, g, b])
        })
    }
}

#[async_trait]
impl Camera for TestPatternCamera {
    fn describe(&self) -> String {
        format!("test pattern {}x{}", self.width, self.height)
    }

    async fn open(&self) -> Result<CameraCapabilities, CameraError> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::OpenFailed(format!(
                "invalid resolution {}x{}",
                self.width, self.height
            )));
        }
        self.opened.store(true, Ordering::SeqCst);
        info!("Test pattern camera opened at {}x{}", self.width, self.height);
        Ok(CameraCapabilities {
            codecs: vec![PhotoCodec::Jpeg, PhotoCodec::Png, PhotoCodec::Raw],
            width: self.width,
            height: self.height,
            supports_flash: false,
            supports_stabilization: true,
        })
    }

    async fn capture(&self, settings: &PhotoSettings) -> Result<Frame, CameraError> {
        if !self.opened.load(Ordering::SeqCst) {
            return Err(CameraError::NotOpen);
        }
        let seed = self.frame_counter.fetch_add(1, Ordering::SeqCst);
        let img = self.render(seed);
        let bytes = match settings.codec {
            PhotoCodec::Jpeg => {
                let mut buf = Cursor::new(Vec::new());
                img.write_to(&mut buf, ImageFormat::Jpeg)
                    .map_err(|e| CameraError::EncodingFailed(e.to_string()))?;
                buf.into_inner()
            }
            PhotoCodec::Png => {
                let mut buf = Cursor::new(Vec::new());
                img.write_to(&mut buf, ImageFormat::Png)
                    .map_err(|e| CameraError::EncodingFailed(e.to_string()))?;
                buf.into_inner()
            }
            PhotoCodec::Raw => img.into_raw(),
        };
        debug!("Rendered frame {} ({} bytes, {})", seed, bytes.len(), settings.codec);
        Ok(Frame {
            bytes,
            codec: settings.codec,
            width: self.width,
            height: self.height,
            captured_at: Utc::now(),
        })
    }
}
