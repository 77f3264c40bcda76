//! Narrow persistence seam. The scanner only needs a place to hand off the
//! extracted name plus caller-supplied metadata; the backing schema is not
//! its concern.

use crate::models::{GiftRecord, GiftRecordInsert};
use crate::utils::ScanError;

pub trait GiftStore {
    /// Persist a record under an opaque user identifier, returning the
    /// generated record id.
    fn save(&mut self, user_id: &str, record: GiftRecordInsert) -> Result<u64, ScanError>;

    fn list(&self, user_id: &str) -> Result<Vec<GiftRecord>, ScanError>;
}

/// In-memory store backing tests and the demo binary.
#[derive(Debug)]
pub struct MemoryStore {
    next_id: u64,
    records: Vec<GiftRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GiftStore for MemoryStore {
    fn save(&mut self, user_id: &str, record: GiftRecordInsert) -> Result<u64, ScanError> {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(GiftRecord {
            id,
            user_id: user_id.to_string(),
            name: record.name,
            amount: record.amount,
            date: record.date,
            note: record.note,
        });
        Ok(id)
    }

    fn list(&self, user_id: &str) -> Result<Vec<GiftRecord>, ScanError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, amount: i64) -> GiftRecordInsert {
        GiftRecordInsert {
            name: name.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 5, 18).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_save_generates_sequential_ids() {
        let mut store = MemoryStore::new();
        let first = store.save("user-a", record("김민수", 50000)).unwrap();
        let second = store.save("user-a", record("박서준", 100000)).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_list_is_scoped_to_the_user() {
        let mut store = MemoryStore::new();
        store.save("user-a", record("김민수", 50000)).unwrap();
        store.save("user-b", record("李明", 30000)).unwrap();

        let records = store.list("user-a").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "김민수");
        assert!(store.list("user-c").unwrap().is_empty());
    }
}
