mod annotate;
mod capture;
mod constants;
mod detection_loop;
mod detector;
mod error;
mod notifier;
mod snapshot;
mod window;

use std::path::Path;

use crate::constants::*;
use anyhow::{Context, Result};
use capture::Capture;
use detection_loop::DetectionLoop;
use detector::Classifiers;
use log::info;
use notifier::UdpNotifier;
use snapshot::JpegSnapshot;
use window::HighGuiDisplay;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    init_logging();

    // Models first: a bad model path must fail before the camera opens.
    let classifiers =
        Classifiers::load(Path::new(MODEL_DIR)).context("loading cascade classifiers")?;
    let capture = Capture::create(CAMERA_INDEX).context("opening camera")?;
    let display = HighGuiDisplay::create().context("creating windows")?;
    let notifier = UdpNotifier::bind(NOTIFY_ADDR).context("binding notification socket")?;
    let snapshot = JpegSnapshot::new(SNAPSHOT_FILE);

    let mut detection_loop = DetectionLoop::new(
        Box::new(capture),
        classifiers,
        Box::new(display),
        Box::new(notifier),
        Box::new(snapshot),
    );
    detection_loop.run()?;

    info!("detection loop finished");
    Ok(())
}
