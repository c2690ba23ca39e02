use crate::constants::*;
use opencv::core::Mat;
use opencv::highgui;

type Result<T> = opencv::Result<T>;

/// Display surface and keyboard input of the detection loop.
pub trait Display {
    fn show_annotated(&mut self, frame: &Mat) -> crate::error::Result<()>;

    fn show_capture(&mut self, frame: &Mat) -> crate::error::Result<()>;

    /// Waits up to `delay_ms` for a key press; returns -1 when none arrived.
    fn poll_key(&mut self, delay_ms: i32) -> crate::error::Result<i32>;
}

pub(crate) struct Window {
    name: String,
}

impl Window {
    pub fn create(name: &'_ str, width: i32, height: i32) -> Result<Self> {
        highgui::named_window(name, highgui::WINDOW_GUI_NORMAL | highgui::WINDOW_KEEPRATIO)?;
        highgui::resize_window(name, width, height)?;
        Ok(Self {
            name: name.to_owned(),
        })
    }

    pub fn show_image(&self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.name, frame)
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        let _ = highgui::destroy_window(&self.name);
    }
}

/// The two live highgui windows: the annotated overlay and the raw re-acquired capture.
pub(crate) struct HighGuiDisplay {
    annotated: Window,
    capture: Window,
}

impl HighGuiDisplay {
    pub fn create() -> Result<Self> {
        Ok(Self {
            annotated: Window::create(ANNOTATED_WINDOW, WINDOW_WIDTH, WINDOW_HEIGHT)?,
            capture: Window::create(CAPTURE_WINDOW, WINDOW_WIDTH, WINDOW_HEIGHT)?,
        })
    }
}

impl Display for HighGuiDisplay {
    fn show_annotated(&mut self, frame: &Mat) -> crate::error::Result<()> {
        Ok(self.annotated.show_image(frame)?)
    }

    fn show_capture(&mut self, frame: &Mat) -> crate::error::Result<()> {
        Ok(self.capture.show_image(frame)?)
    }

    fn poll_key(&mut self, delay_ms: i32) -> crate::error::Result<i32> {
        Ok(highgui::wait_key(delay_ms)?)
    }
}

/// True when the polled key code is the quit key, ignoring modifier bits.
pub fn is_quit_key(key: i32) -> bool {
    key != -1 && key & 0xFF == Q_KEY_CODE
}
