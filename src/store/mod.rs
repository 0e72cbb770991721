use crate::core::record::ScoreRecord;
use crate::error::StoreError;

/// This module contains the in-memory store implementation.
pub mod memory;

/// This module contains the SQLx SQLite store implementation.
#[cfg(feature = "rdbc-sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "rdbc-sqlite")))]
pub mod sqlite;

/// Persistence seam for score records.
///
/// Implementations own connection acquisition and pooling; callers only
/// demarcate transactions. The pipeline and lookup service drive this trait
/// and never touch the underlying database directly.
///
/// # Contract
///
/// - `insert` stages a row inside the given transaction; it becomes visible
///   to other transactions only after `commit`.
/// - `query` returns all records for an identifier ordered by `recorded_at`
///   descending (newest first).
/// - `commit` and `rollback` consume the transaction; one of them must be
///   called on every transaction handed out by `begin`.
pub trait ScoreStore {
    /// Transaction handle tied to this store
    type Tx;

    fn begin(&self) -> Result<Self::Tx, StoreError>;

    fn insert(&self, tx: &mut Self::Tx, record: &ScoreRecord) -> Result<(), StoreError>;

    fn query(&self, tx: &mut Self::Tx, identifier: &str) -> Result<Vec<ScoreRecord>, StoreError>;

    fn commit(&self, tx: Self::Tx) -> Result<(), StoreError>;

    fn rollback(&self, tx: Self::Tx) -> Result<(), StoreError>;
}

// Re-export the store types for convenience
pub use memory::InMemoryScoreStore;
#[cfg(feature = "rdbc-sqlite")]
pub use sqlite::SqliteScoreStore;
