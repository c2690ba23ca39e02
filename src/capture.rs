use crate::error::{Error, Result};
use log::{debug, info};
use opencv::core::Mat;
use opencv::{prelude::*, videoio};

/// Anything the detection loop can pull frames from.
pub trait FrameSource {
    /// Reads one frame. A failed or empty read is an error, never a stale frame.
    fn read_frame(&mut self) -> Result<Mat>;
}

pub(crate) struct Capture {
    capture: videoio::VideoCapture,
    index: i32,
}

impl Capture {
    pub fn create(index: i32) -> Result<Self> {
        let capture = videoio::VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(Error::CameraUnavailable { index });
        }
        info!("opened camera #{index}");
        Ok(Self { capture, index })
    }
}

impl FrameSource for Capture {
    fn read_frame(&mut self) -> Result<Mat> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? {
            return Err(Error::FrameAcquisition(format!(
                "camera #{} returned no frame",
                self.index
            )));
        }
        if frame.empty() {
            return Err(Error::FrameAcquisition(format!(
                "camera #{} returned an empty frame",
                self.index
            )));
        }
        Ok(frame)
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        debug!("releasing camera #{}", self.index);
        let _ = self.capture.release();
    }
}
