pub mod name;
pub mod surnames;

pub use name::{ExtractionConfig, NameExtractor, ScriptPass};
pub use surnames::{SurnameData, SurnameTable, DEFAULT_SURNAMES};
