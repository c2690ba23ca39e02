use opencv::core::Size;

pub const MODEL_DIR: &str = "Hxml";
pub const CASCADE_XML_FILE_FACE: &str = "haarcascade_frontalface_default.xml";
pub const CASCADE_XML_FILE_EYE: &str = "haarcascade_eye.xml";
pub const CASCADE_XML_FILE_SMILE: &str = "haarcascade_smile.xml";

pub const FACE_SCALE_FACTOR: f64 = 1.3;
pub const FACE_MIN_NEIGHBORS: i32 = 2;

pub const EYE_SCALE_FACTOR: f64 = 1.3;
pub const EYE_MIN_NEIGHBORS: i32 = 10;

pub const SMILE_SCALE_FACTOR: f64 = 1.16;
pub const SMILE_MIN_NEIGHBORS: i32 = 65;
pub const SMILE_MIN_SIZE: Size = Size {
    width: 25,
    height: 25,
};

pub const CAMERA_INDEX: i32 = 0;
pub const FRAME_READ_ATTEMPTS: u32 = 3;

pub const NOTIFY_ADDR: &str = "127.0.0.1:6000";
pub const NOTIFY_PAYLOAD: &[u8] = b"smile";

pub const SNAPSHOT_FILE: &str = "picture.jpeg";

pub const ANNOTATED_WINDOW: &str = "frame";
pub const CAPTURE_WINDOW: &str = "capture";
pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 480;

pub const KEY_POLL_MS: i32 = 5;
pub const Q_KEY_CODE: i32 = 113;

pub const FACE_BOX_THICKNESS: i32 = 2;
pub const FEATURE_BOX_THICKNESS: i32 = 1;
pub const SMILE_CAPTION: &str = "Smile";
pub const SMILE_CAPTION_OFFSET: i32 = 7;
pub const SMILE_CAPTION_SCALE: f64 = 1.2;
pub const SMILE_CAPTION_THICKNESS: i32 = 2;
