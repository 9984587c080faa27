use std::borrow::Cow;

use anyhow::{Context, Result};
use arboard::ImageData;
use image::RgbaImage;
use snip_platform::Clipboard;

/// System clipboard backed by `arboard`.
///
/// A fresh handle is opened per operation; writes are infrequent and this
/// avoids holding platform clipboard state between them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to write clipboard text")
    }

    fn set_image(&self, image: &RgbaImage) -> Result<()> {
        let data = ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: Cow::Borrowed(image.as_raw()),
        };

        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .set_image(data)
            .context("Failed to write clipboard image")
    }
}
