pub mod extraction;
pub mod models;
pub mod processing;
pub mod scanner;
pub mod storage;
pub mod utils;

pub use scanner::EnvelopeScanner;
