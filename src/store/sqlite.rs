use sqlx::{Pool, Row, Sqlite, Transaction};

use crate::core::record::ScoreRecord;
use crate::error::StoreError;
use crate::store::ScoreStore;

const DEFAULT_TABLE: &str = "credit_score";

/// A score store backed by a SQLite database through SQLx.
///
/// # Design
///
/// - Uses a SQLite connection pool to manage database connections
/// - Exposes the synchronous `ScoreStore` surface and bridges onto the
///   current Tokio runtime with `block_in_place`, so callers need no async
///   plumbing of their own (requires a multi-threaded runtime)
/// - All values are bound as query parameters; only the configured table
///   name is spliced into the SQL text
/// - Works with both file-based (`sqlite://path/to/db.sqlite`) and
///   in-memory databases; for in-memory databases cap the pool at one
///   connection, since every SQLite `:memory:` connection is its own
///   database
///
/// The default schema matches the upstream credit-score table:
/// `credit_score (ssn TEXT, score INTEGER, version TIMESTAMP)`. The
/// `version` column carries the record timestamp; lookups order by it
/// descending.
pub struct SqliteScoreStore {
    pool: Pool<Sqlite>,
    table: String,
}

impl SqliteScoreStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            pool,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Overrides the table name. The name is configuration, never
    /// caller-supplied input.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Creates the score table if it does not exist yet.
    pub fn init_schema(&self) -> Result<(), StoreError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (ssn TEXT NOT NULL, score INTEGER NOT NULL, version TIMESTAMP NOT NULL)",
            self.table
        );

        block_on(sqlx::query(&sql).execute(&self.pool))
            .map(|_| ())
            .map_err(|err| StoreError::Query(err.to_string()))
    }
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

impl ScoreStore for SqliteScoreStore {
    type Tx = Transaction<'static, Sqlite>;

    fn begin(&self) -> Result<Self::Tx, StoreError> {
        block_on(self.pool.begin()).map_err(|err| StoreError::Begin(err.to_string()))
    }

    fn insert(&self, tx: &mut Self::Tx, record: &ScoreRecord) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} (ssn, score, version) VALUES (?, ?, ?)",
            self.table
        );

        block_on(
            sqlx::query(&sql)
                .bind(&record.identifier)
                .bind(record.score)
                .bind(record.recorded_at)
                .execute(&mut **tx),
        )
        .map(|_| ())
        .map_err(|err| StoreError::Insert(err.to_string()))
    }

    fn query(&self, tx: &mut Self::Tx, identifier: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        let sql = format!(
            "SELECT ssn, score, version FROM {} WHERE ssn = ? ORDER BY version DESC",
            self.table
        );

        let rows = block_on(sqlx::query(&sql).bind(identifier).fetch_all(&mut **tx))
            .map_err(|err| StoreError::Query(err.to_string()))?;

        let records = rows
            .iter()
            .map(|row| ScoreRecord {
                identifier: row.get("ssn"),
                score: row.get("score"),
                recorded_at: row.get("version"),
            })
            .collect();

        Ok(records)
    }

    fn commit(&self, tx: Self::Tx) -> Result<(), StoreError> {
        block_on(tx.commit()).map_err(|err| StoreError::Commit(err.to_string()))
    }

    fn rollback(&self, tx: Self::Tx) -> Result<(), StoreError> {
        block_on(tx.rollback()).map_err(|err| StoreError::Rollback(err.to_string()))
    }
}
