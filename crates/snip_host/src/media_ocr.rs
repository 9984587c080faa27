//! Windows.Media.Ocr recognition backend.
//!
//! Language enumeration and engine creation map directly onto the WinRT OCR
//! API; the pixel-buffer conversion is the lossless RGBA→BGRA software
//! bitmap adapter the engine expects.

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::RgbaImage;
use tracing::warn;
use windows::{
    Globalization::Language,
    Graphics::Imaging::{BitmapPixelFormat, SoftwareBitmap},
    Media::Ocr::OcrEngine as WinOcrEngine,
    Storage::Streams::{DataReader, DataWriter, InMemoryRandomAccessStream},
    core::HSTRING,
};

use snip_ocr::{RecognitionBackend, RecognitionEngine};

/// Recognition capability backed by the OS-provided OCR engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaOcrBackend;

impl RecognitionBackend for MediaOcrBackend {
    fn available_languages(&self) -> Vec<String> {
        let languages = match WinOcrEngine::AvailableRecognizerLanguages() {
            Ok(languages) => languages,
            Err(error) => {
                warn!(%error, "failed to enumerate recognizer languages");
                return Vec::new();
            }
        };

        let mut tags = Vec::new();
        let size = languages.Size().unwrap_or(0);
        for i in 0..size {
            if let Ok(language) = languages.GetAt(i)
                && let Ok(tag) = language.LanguageTag()
            {
                tags.push(tag.to_string());
            }
        }
        tags
    }

    fn create_engine(&self, language: &str) -> Result<Box<dyn RecognitionEngine>> {
        let language = Language::CreateLanguage(&HSTRING::from(language))
            .context("Failed to create language")?;

        let engine = WinOcrEngine::TryCreateFromLanguage(&language)
            .context("Failed to create OCR engine for language")?;

        Ok(Box::new(MediaOcrEngine { engine }))
    }
}

struct MediaOcrEngine {
    engine: WinOcrEngine,
}

#[async_trait]
impl RecognitionEngine for MediaOcrEngine {
    async fn recognize(&self, image: &RgbaImage) -> Result<String> {
        let bitmap = software_bitmap_from_rgba(image)?;

        let result = self
            .engine
            .RecognizeAsync(&bitmap)
            .context("Failed to start OCR recognition")?
            .get()
            .context("OCR recognition failed")?;

        Ok(result.Text().context("Failed to get OCR text")?.to_string())
    }
}

/// Convert an RGBA buffer into the BGRA `SoftwareBitmap` the engine expects.
fn software_bitmap_from_rgba(image: &RgbaImage) -> Result<SoftwareBitmap> {
    // Swap R and B; the engine wants BGRA.
    let mut bgra = image.as_raw().clone();
    for chunk in bgra.chunks_exact_mut(4) {
        chunk.swap(0, 2);
    }

    let stream = InMemoryRandomAccessStream::new().context("Failed to create stream")?;
    let writer = DataWriter::CreateDataWriter(&stream).context("Failed to create writer")?;

    writer.WriteBytes(&bgra).context("Failed to write pixels")?;
    writer
        .StoreAsync()
        .context("Failed to start store")?
        .get()
        .context("Failed to store pixels")?;
    writer.FlushAsync().context("Failed to flush")?.get()?;
    stream.Seek(0).context("Failed to seek")?;

    let bitmap = SoftwareBitmap::Create(
        BitmapPixelFormat::Bgra8,
        image.width() as i32,
        image.height() as i32,
    )
    .context("Failed to create SoftwareBitmap")?;

    let input = stream
        .GetInputStreamAt(0)
        .context("Failed to get input stream")?;
    let reader = DataReader::CreateDataReader(&input).context("Failed to create reader")?;
    reader
        .LoadAsync(bgra.len() as u32)
        .context("Failed to start load")?
        .get()
        .context("Failed to load pixels")?;
    let buffer = reader
        .ReadBuffer(bgra.len() as u32)
        .context("Failed to read buffer")?;

    bitmap
        .CopyFromBuffer(&buffer)
        .context("Failed to copy buffer to bitmap")?;

    Ok(bitmap)
}
