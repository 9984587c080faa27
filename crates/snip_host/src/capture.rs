use anyhow::{Context, Result};
use image::RgbaImage;
use snip_platform::ScreenCapture;
use tracing::debug;
use xcap::Monitor;

/// Captures the primary monitor's full bounds as an RGBA buffer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimaryMonitorCapture;

impl ScreenCapture for PrimaryMonitorCapture {
    fn capture(&self) -> Result<RgbaImage> {
        let monitors = Monitor::all().context("Failed to enumerate monitors")?;
        let monitor = monitors.first().context("No monitor found")?;

        let image = monitor
            .capture_image()
            .context("Failed to capture screen")?;

        debug!(
            width = image.width(),
            height = image.height(),
            "captured primary display"
        );
        Ok(image)
    }
}
