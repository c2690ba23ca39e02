use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use log::info;
use opencv::core::{Mat, Vector};
use opencv::imgcodecs;

/// Persists the re-acquired frame of a smile event.
pub trait SnapshotSink {
    fn save(&mut self, frame: &Mat) -> Result<()>;
}

/// Overwrites a single JPEG file; no history is kept.
pub(crate) struct JpegSnapshot {
    path: PathBuf,
}

impl JpegSnapshot {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotSink for JpegSnapshot {
    fn save(&mut self, frame: &Mat) -> Result<()> {
        let snapshot_error = |reason: String| Error::Snapshot {
            path: self.path.clone(),
            reason,
        };
        let name = self
            .path
            .to_str()
            .ok_or_else(|| snapshot_error("path is not valid UTF-8".to_string()))?;

        let written = imgcodecs::imwrite(name, frame, &Vector::<i32>::new())
            .map_err(|e| snapshot_error(e.to_string()))?;
        if !written {
            return Err(snapshot_error("encoder refused the frame".to_string()));
        }

        info!("saved snapshot to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{Rect, Scalar, CV_8UC3};
    use opencv::{imgproc, prelude::*};

    fn test_frame(width: i32, height: i32) -> Mat {
        let mut frame =
            Mat::new_rows_cols_with_default(height, width, CV_8UC3, Scalar::all(40.0)).unwrap();
        imgproc::rectangle(
            &mut frame,
            Rect::new(10, 10, 30, 20),
            Scalar::new(0.0, 200.0, 0.0, 0.0),
            -1,
            imgproc::LINE_8,
            0,
        )
        .unwrap();
        frame
    }

    #[test]
    fn test_roundtrip_decodes_with_frame_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picture.jpeg");
        let mut snapshot = JpegSnapshot::new(&path);

        snapshot.save(&test_frame(160, 120)).unwrap();

        let decoded = imgcodecs::imread(path.to_str().unwrap(), imgcodecs::IMREAD_COLOR).unwrap();
        assert!(!decoded.empty());
        assert_eq!(decoded.cols(), 160);
        assert_eq!(decoded.rows(), 120);
        assert_eq!(decoded.channels(), 3);
    }

    #[test]
    fn test_second_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picture.jpeg");
        let mut snapshot = JpegSnapshot::new(&path);

        snapshot.save(&test_frame(160, 120)).unwrap();
        snapshot.save(&test_frame(64, 48)).unwrap();

        let decoded = imgcodecs::imread(path.to_str().unwrap(), imgcodecs::IMREAD_COLOR).unwrap();
        assert_eq!(decoded.cols(), 64);
        assert_eq!(decoded.rows(), 48);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_unwritable_path_is_snapshot_error() {
        let mut snapshot = JpegSnapshot::new("/nonexistent/dir/picture.jpeg");
        let result = snapshot.save(&test_frame(16, 16));
        assert!(matches!(result, Err(Error::Snapshot { .. })));
    }
}
