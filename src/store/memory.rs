use std::sync::Mutex;

use crate::core::record::ScoreRecord;
use crate::error::StoreError;
use crate::store::ScoreStore;

/// In-memory score store, mainly useful for tests and demos.
///
/// Rows staged by a transaction stay invisible to queries until the
/// transaction commits; a dropped or rolled-back transaction leaves no
/// trace.
#[derive(Default)]
pub struct InMemoryScoreStore {
    rows: Mutex<Vec<ScoreRecord>>,
}

/// Staging buffer for one in-memory transaction.
pub struct MemoryTransaction {
    staged: Vec<ScoreRecord>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed rows, across all identifiers.
    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreStore for InMemoryScoreStore {
    type Tx = MemoryTransaction;

    fn begin(&self) -> Result<Self::Tx, StoreError> {
        Ok(MemoryTransaction { staged: Vec::new() })
    }

    fn insert(&self, tx: &mut Self::Tx, record: &ScoreRecord) -> Result<(), StoreError> {
        tx.staged.push(record.clone());
        Ok(())
    }

    fn query(&self, _tx: &mut Self::Tx, identifier: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|err| StoreError::Query(err.to_string()))?;

        let mut matches: Vec<ScoreRecord> = rows
            .iter()
            .filter(|record| record.identifier == identifier)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        Ok(matches)
    }

    fn commit(&self, tx: Self::Tx) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|err| StoreError::Commit(err.to_string()))?;
        rows.extend(tx.staged);

        Ok(())
    }

    fn rollback(&self, tx: Self::Tx) -> Result<(), StoreError> {
        drop(tx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(identifier: &str, score: i32, minute: u32) -> ScoreRecord {
        ScoreRecord {
            identifier: identifier.to_string(),
            score,
            recorded_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, minute, 0).unwrap(),
        }
    }

    #[test]
    fn staged_rows_are_invisible_until_commit() {
        let store = InMemoryScoreStore::new();

        let mut tx = store.begin().unwrap();
        store.insert(&mut tx, &record("123-45-6789", 700, 0)).unwrap();

        let mut read_tx = store.begin().unwrap();
        assert!(store.query(&mut read_tx, "123-45-6789").unwrap().is_empty());

        store.commit(tx).unwrap();
        assert_eq!(store.query(&mut read_tx, "123-45-6789").unwrap().len(), 1);
        store.rollback(read_tx).unwrap();
    }

    #[test]
    fn rollback_discards_staged_rows() {
        let store = InMemoryScoreStore::new();

        let mut tx = store.begin().unwrap();
        store.insert(&mut tx, &record("123-45-6789", 700, 0)).unwrap();
        store.rollback(tx).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn query_returns_newest_first() {
        let store = InMemoryScoreStore::new();

        let mut tx = store.begin().unwrap();
        store.insert(&mut tx, &record("123-45-6789", 650, 0)).unwrap();
        store.insert(&mut tx, &record("123-45-6789", 720, 5)).unwrap();
        store.insert(&mut tx, &record("987-65-4321", 800, 3)).unwrap();
        store.commit(tx).unwrap();

        let mut read_tx = store.begin().unwrap();
        let records = store.query(&mut read_tx, "123-45-6789").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].score, 720);
        assert_eq!(records[1].score, 650);
        store.rollback(read_tx).unwrap();
    }
}
