use crate::annotate::{draw_eye_box, draw_face_box, draw_smile_box, draw_smile_caption};
use crate::capture::FrameSource;
use crate::constants::{FRAME_READ_ATTEMPTS, KEY_POLL_MS};
use crate::detector::{clamp_rect_to_bounds, convert_to_grayscale, Classifiers};
use crate::error::{Error, Result};
use crate::notifier::Notifier;
use crate::snapshot::SnapshotSink;
use crate::window::{is_quit_key, Display};
use log::{debug, info, warn};
use opencv::core::{Mat, Rect};
use opencv::prelude::*;

/// Result of scanning one frame's faces for a smile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaceScan {
    NoSmile,
    /// First smile of the frame. `smile_box` is relative to the face.
    FirstMatchFound { face_index: usize, smile_box: Rect },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// The camera → detect → annotate → notify loop. Owns every resource it
/// touches, so all of them are released when the loop value is dropped.
pub struct DetectionLoop {
    source: Box<dyn FrameSource>,
    classifiers: Classifiers,
    display: Box<dyn Display>,
    notifier: Box<dyn Notifier>,
    snapshot: Box<dyn SnapshotSink>,
}

impl DetectionLoop {
    pub fn new(
        source: Box<dyn FrameSource>,
        classifiers: Classifiers,
        display: Box<dyn Display>,
        notifier: Box<dyn Notifier>,
        snapshot: Box<dyn SnapshotSink>,
    ) -> Self {
        Self {
            source,
            classifiers,
            display,
            notifier,
            snapshot,
        }
    }

    /// Runs until the quit key is pressed or a fatal error occurs.
    pub fn run(&mut self) -> Result<()> {
        let mut iterations: u64 = 0;
        loop {
            iterations += 1;
            if self.step()? == LoopControl::Quit {
                info!("quit key pressed after {iterations} frames");
                return Ok(());
            }
        }
    }

    /// One iteration of the loop.
    pub fn step(&mut self) -> Result<LoopControl> {
        let mut frame = self.acquire_frame()?;

        if let FaceScan::FirstMatchFound {
            face_index,
            smile_box,
        } = self.scan_faces(&mut frame)?
        {
            self.on_smile(face_index, smile_box)?;
        }

        self.display.show_annotated(&frame)?;

        let key = self.display.poll_key(KEY_POLL_MS)?;
        Ok(if is_quit_key(key) {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        })
    }

    /// Detects faces on the full frame and eyes/smiles inside each face,
    /// drawing overlays onto `frame`. Every face gets its box and eye pass;
    /// only the first smile of the frame is looked for and reported.
    pub fn scan_faces(&mut self, frame: &mut Mat) -> Result<FaceScan> {
        let gray = convert_to_grayscale(frame)?;
        let bounds = gray.size()?;
        let faces = self.classifiers.face.detect(&gray)?;
        debug!("{} face(s) in frame", faces.len());

        let mut first_smile: Option<(usize, Rect)> = None;
        for (face_index, face) in faces.into_iter().enumerate() {
            let face = clamp_rect_to_bounds(face, bounds);
            if face.width <= 0 || face.height <= 0 {
                continue;
            }
            draw_face_box(frame, face)?;

            let face_area = Mat::roi(&gray, face)?;

            for eye in self.classifiers.eye.detect(&face_area)? {
                draw_eye_box(frame, face, eye)?;
            }

            if first_smile.is_some() {
                continue;
            }
            if let Some(smile_box) = self.classifiers.smile.detect(&face_area)?.into_iter().next() {
                draw_smile_box(frame, face, smile_box)?;
                draw_smile_caption(frame, face)?;
                first_smile = Some((face_index, smile_box));
            }
        }

        Ok(match first_smile {
            Some((face_index, smile_box)) => FaceScan::FirstMatchFound {
                face_index,
                smile_box,
            },
            None => FaceScan::NoSmile,
        })
    }

    fn on_smile(&mut self, face_index: usize, smile_box: Rect) -> Result<()> {
        info!("smile on face #{face_index} at {smile_box:?}");

        if let Err(e) = self.notifier.notify() {
            warn!("{e}");
        }

        if !has_positive_extent(smile_box) {
            return Ok(());
        }

        let capture = match self.source.read_frame() {
            Ok(capture) => capture,
            Err(e) => {
                warn!("skipping snapshot, re-acquisition failed: {e}");
                return Ok(());
            }
        };
        if let Err(e) = self.display.show_capture(&capture) {
            warn!("{e}");
        }
        if let Err(e) = self.snapshot.save(&capture) {
            warn!("{e}");
        }
        Ok(())
    }

    fn acquire_frame(&mut self) -> Result<Mat> {
        let mut attempt = 1;
        loop {
            match self.source.read_frame() {
                Ok(frame) => return Ok(frame),
                Err(e @ Error::FrameAcquisition(_)) if attempt < FRAME_READ_ATTEMPTS => {
                    warn!("frame read {attempt}/{FRAME_READ_ATTEMPTS} failed: {e}");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn has_positive_extent(rect: Rect) -> bool {
    rect.x > 0 && rect.y > 0 && rect.width > 0 && rect.height > 0
}
