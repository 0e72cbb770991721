use thiserror::Error;

#[derive(Error, Debug)]
/// Store-layer error
///
/// Raised by [`ScoreStore`](crate::store::ScoreStore) implementations. The
/// batch pipeline never lets these cross its boundary: it rolls back and
/// maps them to a coarse `PersistenceError` outcome. The lookup service
/// propagates them for the caller to map to an internal failure.
pub enum StoreError {
    #[error("transaction begin failed: {0}")]
    Begin(String),

    #[error("insert failed: {0}")]
    Insert(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("commit failed: {0}")]
    Commit(String),

    #[error("rollback failed: {0}")]
    Rollback(String),
}
