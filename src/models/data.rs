use crate::utils::ScanError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dense row-major RGBA8 pixel buffer.
/// Invariant: data.len() == width * height * 4, enforced at construction
/// so the downstream transforms never have to re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ScanError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ScanError::BitmapError(format!(
                "buffer length {} does not match {}x{} RGBA dimensions (expected {})",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Bitmap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Bitmap {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub fn to_rgba_image(&self) -> image::RgbaImage {
        // from_raw only fails on a length mismatch, which new() rules out
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

/// Text plus confidence as returned by the OCR engine.
/// Immutable once produced; confidence is a percentage in [0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub text: String,
    pub confidence: f32,
}

/// Writing system a name candidate was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Hangul syllable block (U+AC00..U+D7A3)
    Hangul,
    /// CJK Unified Ideographs (U+4E00..U+9FFF), used for hanja renderings
    Han,
}

impl Script {
    pub fn contains(self, c: char) -> bool {
        match self {
            Script::Hangul => ('\u{ac00}'..='\u{d7a3}').contains(&c),
            Script::Han => ('\u{4e00}'..='\u{9fff}').contains(&c),
        }
    }
}

/// A possible personal name found in recognized text.
#[derive(Debug, Clone, PartialEq)]
pub struct NameCandidate {
    pub text: String,
    pub script: Script,
    /// Byte offset of the candidate in the source text, for stable ordering.
    pub start: usize,
    /// Length in characters (2..=4).
    pub char_len: usize,
}

/// Terminal value handed back to the caller after a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    pub recognized_text: String,
    pub confidence: f32,
    pub extracted_name: Option<String>,
}

/// Caller-supplied metadata recorded next to an extracted name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftRecordInsert {
    pub name: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// A stored gift-money entry, keyed by an opaque user identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftRecord {
    pub id: u64,
    pub user_id: String,
    pub name: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub note: Option<String>,
}
