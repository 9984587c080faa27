use anyhow::Result;
use async_trait::async_trait;
use image::RgbaImage;

/// One instantiated recognition engine, bound to a language.
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Recognize text in the image.
    ///
    /// The adapter converts the pixel buffer into whatever bitmap
    /// representation the underlying engine expects; any lossless conversion
    /// is acceptable as long as dimensions and color channels survive.
    async fn recognize(&self, image: &RgbaImage) -> Result<String>;
}

/// Host recognition capability: language enumeration plus engine creation.
pub trait RecognitionBackend: Send + Sync {
    /// Language tags the host can recognize at this moment. May be empty.
    fn available_languages(&self) -> Vec<String>;

    /// Instantiate an engine for one of the enumerated languages.
    fn create_engine(&self, language: &str) -> Result<Box<dyn RecognitionEngine>>;
}
