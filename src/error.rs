use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load classifier {path:?}: {reason}")]
    ClassifierLoad { path: PathBuf, reason: String },

    #[error("camera #{index} could not be opened")]
    CameraUnavailable { index: i32 },

    #[error("frame acquisition failed: {0}")]
    FrameAcquisition(String),

    #[error("notification send failed: {0}")]
    Notify(#[source] std::io::Error),

    #[error("failed to write snapshot {path:?}: {reason}")]
    Snapshot { path: PathBuf, reason: String },

    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
