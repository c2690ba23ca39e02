use crate::constants::*;
use crate::error::Result;
use opencv::core::{Mat, Point, Rect, Scalar};
use opencv::imgproc;

const LINE_TYPE: i32 = imgproc::LINE_8;
const SHIFT: i32 = 0;

fn blue() -> Scalar {
    Scalar::new(255f64, 0f64, 0f64, 0f64)
}

fn green() -> Scalar {
    Scalar::new(0f64, 255f64, 0f64, 0f64)
}

fn red() -> Scalar {
    Scalar::new(0f64, 0f64, 255f64, 0f64)
}

/// Moves a box found inside `face` into full-frame coordinates.
pub fn to_frame_coords(face: Rect, inner: Rect) -> Rect {
    Rect::new(face.x + inner.x, face.y + inner.y, inner.width, inner.height)
}

pub fn draw_face_box(frame: &mut Mat, face: Rect) -> Result<()> {
    imgproc::rectangle(frame, face, blue(), FACE_BOX_THICKNESS, LINE_TYPE, SHIFT)?;
    Ok(())
}

/// `eye` is relative to `face`.
pub fn draw_eye_box(frame: &mut Mat, face: Rect, eye: Rect) -> Result<()> {
    let eye = to_frame_coords(face, eye);
    imgproc::rectangle(frame, eye, green(), FEATURE_BOX_THICKNESS, LINE_TYPE, SHIFT)?;
    Ok(())
}

/// `smile` is relative to `face`.
pub fn draw_smile_box(frame: &mut Mat, face: Rect, smile: Rect) -> Result<()> {
    let smile = to_frame_coords(face, smile);
    imgproc::rectangle(frame, smile, red(), FEATURE_BOX_THICKNESS, LINE_TYPE, SHIFT)?;
    Ok(())
}

pub fn draw_smile_caption(frame: &mut Mat, face: Rect) -> Result<()> {
    imgproc::put_text(
        frame,
        SMILE_CAPTION,
        Point::new(face.x, face.y - SMILE_CAPTION_OFFSET),
        imgproc::FONT_HERSHEY_COMPLEX,
        SMILE_CAPTION_SCALE,
        red(),
        SMILE_CAPTION_THICKNESS,
        imgproc::LINE_AA,
        false,
    )?;
    Ok(())
}
