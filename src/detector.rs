use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};
use log::info;
use opencv::core::{Mat, Rect, Size};
use opencv::{imgproc, objdetect, objdetect::CascadeClassifier, prelude::*, types::VectorOfRect};

/// Finds boxes in an image. Box coordinates are relative to the image passed in.
pub trait Detector {
    fn detect(&mut self, image: &Mat) -> Result<Vec<Rect>>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CascadeParams {
    pub scale_factor: f64,
    pub min_neighbors: i32,
    pub flags: i32,
    pub min_size: Size,
}

impl CascadeParams {
    pub fn face() -> Self {
        Self {
            scale_factor: FACE_SCALE_FACTOR,
            min_neighbors: FACE_MIN_NEIGHBORS,
            flags: 0,
            min_size: Size::new(0, 0),
        }
    }

    pub fn eye() -> Self {
        Self {
            scale_factor: EYE_SCALE_FACTOR,
            min_neighbors: EYE_MIN_NEIGHBORS,
            flags: 0,
            min_size: Size::new(0, 0),
        }
    }

    pub fn smile() -> Self {
        Self {
            scale_factor: SMILE_SCALE_FACTOR,
            min_neighbors: SMILE_MIN_NEIGHBORS,
            flags: objdetect::CASCADE_SCALE_IMAGE,
            min_size: SMILE_MIN_SIZE,
        }
    }
}

/// A pretrained Haar cascade with its fixed detection thresholds.
pub(crate) struct Cascade {
    classifier: CascadeClassifier,
    params: CascadeParams,
}

impl Cascade {
    pub fn load(path: &Path, params: CascadeParams) -> Result<Self> {
        let load_error = |reason: String| Error::ClassifierLoad {
            path: path.to_path_buf(),
            reason,
        };

        if !path.is_file() {
            return Err(load_error("no such file".to_string()));
        }
        let name = path
            .to_str()
            .ok_or_else(|| load_error("path is not valid UTF-8".to_string()))?;
        let classifier = CascadeClassifier::new(name).map_err(|e| load_error(e.to_string()))?;
        if classifier.empty().map_err(|e| load_error(e.to_string()))? {
            return Err(load_error("classifier is empty".to_string()));
        }

        info!("loaded cascade {:?}", path);
        Ok(Self { classifier, params })
    }
}

impl Detector for Cascade {
    fn detect(&mut self, image: &Mat) -> Result<Vec<Rect>> {
        let mut found = VectorOfRect::new();
        self.classifier.detect_multi_scale(
            image,
            &mut found,
            self.params.scale_factor,
            self.params.min_neighbors,
            self.params.flags,
            self.params.min_size,
            Size::new(0, 0),
        )?;
        Ok(found.to_vec())
    }
}

/// Face, eye and smile detectors used by one detection loop.
pub struct Classifiers {
    pub face: Box<dyn Detector>,
    pub eye: Box<dyn Detector>,
    pub smile: Box<dyn Detector>,
}

impl Classifiers {
    /// Loads all three cascades from `model_dir`. Any failure is fatal.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model = |file: &str| -> PathBuf { model_dir.join(file) };
        Ok(Self {
            face: Box::new(Cascade::load(
                &model(CASCADE_XML_FILE_FACE),
                CascadeParams::face(),
            )?),
            eye: Box::new(Cascade::load(
                &model(CASCADE_XML_FILE_EYE),
                CascadeParams::eye(),
            )?),
            smile: Box::new(Cascade::load(
                &model(CASCADE_XML_FILE_SMILE),
                CascadeParams::smile(),
            )?),
        })
    }
}

pub fn convert_to_grayscale(frame: &Mat) -> Result<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;
    Ok(gray)
}

/// Shrinks `rect` so it lies inside a `size` image. May return an empty rect.
pub fn clamp_rect_to_bounds(rect: Rect, size: Size) -> Rect {
    let x = rect.x.clamp(0, size.width);
    let y = rect.y.clamp(0, size.height);
    let right = (rect.x + rect.width).clamp(x, size.width);
    let bottom = (rect.y + rect.height).clamp(y, size.height);
    Rect::new(x, y, right - x, bottom - y)
}
