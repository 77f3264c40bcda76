pub mod data;

pub use data::{
    Bitmap, ExtractionOutcome, GiftRecord, GiftRecordInsert, NameCandidate, RecognitionResult,
    Script,
};
