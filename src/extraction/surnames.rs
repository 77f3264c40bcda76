//! Surname data tables, kept out of the selection logic so new scripts can
//! be covered by data rather than forked code.

use crate::models::Script;
use crate::utils::ScanError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Ordered set of single-character family-name initials for one script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurnameTable {
    pub script: Script,
    surnames: Vec<char>,
}

impl SurnameTable {
    pub fn new(script: Script, surnames: Vec<char>) -> Self {
        SurnameTable { script, surnames }
    }

    pub fn contains(&self, c: char) -> bool {
        self.surnames.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.surnames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surnames.is_empty()
    }
}

/// Versioned surname document: one table per script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurnameData {
    pub version: u32,
    pub tables: Vec<SurnameTable>,
}

impl SurnameData {
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        serde_json::from_str(json)
            .map_err(|e| ScanError::SurnameTableError(format!("Failed to parse table: {}", e)))
    }

    pub fn table(&self, script: Script) -> Option<&SurnameTable> {
        self.tables.iter().find(|t| t.script == script)
    }
}

const EMBEDDED_SURNAMES: &str = include_str!("../../data/surnames.json");

lazy_static! {
    /// Common Korean surnames in Hangul and hanja form, loaded once at
    /// first use. The JSON ships inside the binary, so parsing it is a
    /// build-time invariant rather than a runtime failure mode.
    pub static ref DEFAULT_SURNAMES: SurnameData =
        SurnameData::from_json(EMBEDDED_SURNAMES).expect("embedded surname table is valid JSON");
}
