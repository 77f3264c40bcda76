pub mod image;
pub mod ocr;
pub mod progress;

pub use image::ImageProcessor;
pub use ocr::{OcrEngine, TesseractOcr};
pub use progress::{ProgressEvent, ProgressHeartbeat};
