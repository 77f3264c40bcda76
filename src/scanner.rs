use std::path::Path;

use log::info;

use crate::extraction::NameExtractor;
use crate::models::{Bitmap, ExtractionOutcome};
use crate::processing::{ImageProcessor, OcrEngine, TesseractOcr};
use crate::utils::ScanError;

/// Orchestrates the full pipeline for one captured envelope photo:
/// normalize the bitmap, run the OCR collaborator, extract a name.
pub struct EnvelopeScanner<E: OcrEngine = TesseractOcr> {
    ocr: E,
    extractor: NameExtractor,
}

impl EnvelopeScanner<TesseractOcr> {
    pub fn new() -> Self {
        EnvelopeScanner {
            ocr: TesseractOcr::new(),
            extractor: NameExtractor::with_default_tables(),
        }
    }
}

impl Default for EnvelopeScanner<TesseractOcr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: OcrEngine> EnvelopeScanner<E> {
    pub fn with_engine(ocr: E, extractor: NameExtractor) -> Self {
        EnvelopeScanner { ocr, extractor }
    }

    /// Decode an image file and run the pipeline on it.
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionOutcome, ScanError> {
        let bitmap = ImageProcessor::load_bitmap(path)?;
        self.scan_bitmap(bitmap)
    }

    /// Run the pipeline on an already-captured bitmap. The bitmap is
    /// consumed; normalization transfers ownership through the stages.
    pub fn scan_bitmap(&self, bitmap: Bitmap) -> Result<ExtractionOutcome, ScanError> {
        let normalized = ImageProcessor::normalize(bitmap);
        let recognition = self.ocr.recognize(&normalized)?;
        let extracted_name = self.extractor.extract(&recognition.text);

        match &extracted_name {
            Some(name) => info!("Extracted name: {}", name),
            None => info!("No name detected in recognized text"),
        }

        Ok(ExtractionOutcome {
            recognized_text: recognition.text,
            confidence: recognition.confidence,
            extracted_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecognitionResult;

    /// Canned engine standing in for tesseract.
    struct StubOcr {
        text: String,
        confidence: f32,
    }

    impl OcrEngine for StubOcr {
        fn recognize(&self, _bitmap: &Bitmap) -> Result<RecognitionResult, ScanError> {
            Ok(RecognitionResult {
                text: self.text.clone(),
                confidence: self.confidence,
            })
        }
    }

    struct FailingOcr;

    impl OcrEngine for FailingOcr {
        fn recognize(&self, _bitmap: &Bitmap) -> Result<RecognitionResult, ScanError> {
            Err(ScanError::OcrError("engine unavailable".to_string()))
        }
    }

    fn white_bitmap() -> Bitmap {
        Bitmap::new(2, 2, vec![255u8; 16]).unwrap()
    }

    #[test]
    fn test_scan_produces_outcome_with_name() {
        let scanner = EnvelopeScanner::with_engine(
            StubOcr {
                text: "축 결혼 김민수 드림".to_string(),
                confidence: 87.5,
            },
            NameExtractor::with_default_tables(),
        );
        let outcome = scanner.scan_bitmap(white_bitmap()).unwrap();
        assert_eq!(outcome.recognized_text, "축 결혼 김민수 드림");
        assert_eq!(outcome.confidence, 87.5);
        assert_eq!(outcome.extracted_name, Some("김민수".to_string()));
    }

    #[test]
    fn test_no_name_is_a_normal_outcome() {
        let scanner = EnvelopeScanner::with_engine(
            StubOcr {
                text: "Congratulations 2024".to_string(),
                confidence: 42.0,
            },
            NameExtractor::with_default_tables(),
        );
        let outcome = scanner.scan_bitmap(white_bitmap()).unwrap();
        assert_eq!(outcome.extracted_name, None);
    }

    #[test]
    fn test_engine_failure_surfaces_before_extraction() {
        let scanner =
            EnvelopeScanner::with_engine(FailingOcr, NameExtractor::with_default_tables());
        let result = scanner.scan_bitmap(white_bitmap());
        assert!(matches!(result, Err(ScanError::OcrError(_))));
    }
}
