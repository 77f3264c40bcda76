use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Bitmap error: {0}")]
    BitmapError(String),

    #[error("Image processing error: {0}")]
    ImageProcessingError(String),

    #[error("OCR engine error: {0}")]
    OcrError(String),

    #[error("Surname table error: {0}")]
    SurnameTableError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(String),
}
