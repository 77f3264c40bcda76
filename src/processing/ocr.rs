use std::io::Write;

use log::debug;
use tempfile::NamedTempFile;
use tesseract::Tesseract;

use crate::models::{Bitmap, RecognitionResult};
use crate::processing::ImageProcessor;
use crate::utils::ScanError;

/// Opaque recognition collaborator: bitmap in, text plus confidence out.
///
/// Implementations must support at most one in-flight recognition per
/// instance; there is no cancellation contract for a recognition once it
/// has started.
pub trait OcrEngine {
    fn recognize(&self, bitmap: &Bitmap) -> Result<RecognitionResult, ScanError>;
}

/// Tesseract-backed engine with a worker-per-call lifecycle: every call
/// initializes a fresh handle and tears it down on all exit paths.
pub struct TesseractOcr {
    languages: String,
}

impl TesseractOcr {
    /// Hangul, Latin and traditional-hanja packs, recognized simultaneously.
    pub const DEFAULT_LANGUAGES: &'static [&'static str] = &["kor", "eng", "chi_tra"];

    pub fn new() -> Self {
        Self::with_languages(Self::DEFAULT_LANGUAGES)
    }

    /// Build an engine for a specific set of tesseract language packs.
    pub fn with_languages(languages: &[&str]) -> Self {
        TesseractOcr {
            languages: languages.join("+"),
        }
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, bitmap: &Bitmap) -> Result<RecognitionResult, ScanError> {
        let png = ImageProcessor::encode_png(bitmap)?;

        // Tesseract reads from a file path, so stage the bitmap in a temp
        // file that is removed when this scope ends.
        let mut temp_file = NamedTempFile::new()
            .map_err(|e| ScanError::IoError(format!("Failed to create temp file: {}", e)))?;
        temp_file
            .write_all(&png)
            .map_err(|e| ScanError::IoError(format!("Failed to write temp file: {}", e)))?;
        let image_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| ScanError::IoError("Temp file path is not valid UTF-8".to_string()))?;

        debug!(
            "Running tesseract ({}) on {}x{} bitmap",
            self.languages,
            bitmap.width(),
            bitmap.height()
        );

        let mut engine = Tesseract::new(None, Some(&self.languages))
            .map_err(|e| ScanError::OcrError(format!("Tesseract init error: {}", e)))?
            .set_image(image_path)
            .map_err(|e| ScanError::OcrError(format!("Tesseract set image error: {}", e)))?;

        let text = engine
            .get_text()
            .map_err(|e| ScanError::OcrError(format!("Tesseract error: {}", e)))?;
        let confidence = (engine.mean_text_conf() as f32).clamp(0.0, 100.0);

        debug!("Recognition confidence: {:.1}", confidence);

        Ok(RecognitionResult { text, confidence })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_hints_are_joined() {
        let engine = TesseractOcr::with_languages(&["kor", "chi_tra"]);
        assert_eq!(engine.languages(), "kor+chi_tra");
    }

    #[test]
    fn test_default_languages() {
        let engine = TesseractOcr::new();
        assert_eq!(engine.languages(), "kor+eng+chi_tra");
    }
}
