use std::path::Path;

use anyhow::{Context, Result, bail};
use image::RgbaImage;
use tripwire_core::{ScreenCapture, WatchError};
use tripwire_types::CaptureRegion;
use xcap::Monitor;

/// Captures screen regions from the monitor that contains them
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenGrabber;

impl ScreenGrabber {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenCapture for ScreenGrabber {
    fn capture(&self, region: CaptureRegion) -> Result<RgbaImage, WatchError> {
        capture_screen_region(region).map_err(|e| WatchError::Capture(format!("{e:#}")))
    }
}

/// Capture a region of the screen
pub fn capture_screen_region(region: CaptureRegion) -> Result<RgbaImage> {
    if region.is_empty() {
        bail!("Region {region} has no area");
    }

    let monitors = Monitor::all().context("Failed to get monitors")?;

    let monitor = monitors
        .iter()
        .find(|m| {
            region.left >= m.x()
                && region.top >= m.y()
                && region.right() <= m.x() + m.width() as i32
                && region.bottom() <= m.y() + m.height() as i32
        })
        .with_context(|| format!("Region {region} is not within any monitor"))?;

    let image = monitor.capture_image().context("Failed to capture screen")?;

    let cropped = xcap::image::imageops::crop_imm(
        &image,
        (region.left - monitor.x()) as u32,
        (region.top - monitor.y()) as u32,
        region.width,
        region.height,
    )
    .to_image();

    let (width, height) = cropped.dimensions();
    RgbaImage::from_raw(width, height, cropped.into_raw())
        .context("Captured buffer does not match its dimensions")
}

/// Write a capture to disk for the operator to inspect
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}
