use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;

/// A raw, unvalidated score record submitted by a caller.
///
/// The score is carried as a JSON number so that any representable numeric
/// value reaches the validator unchanged; non-integer values are rejected
/// there, not at deserialization time.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ScoreCandidate {
    /// Subject identifier, expected in `ddd-dd-dddd` form
    #[serde(alias = "ssn")]
    pub identifier: String,
    /// Proposed score value, validated to an integer in [300, 850]
    pub score: Number,
}

impl ScoreCandidate {
    pub fn new(identifier: impl Into<String>, score: impl Into<Number>) -> Self {
        Self {
            identifier: identifier.into(),
            score: score.into(),
        }
    }
}

/// An ordered group of candidates processed as one transactional unit.
///
/// Mirrors the wire shape submitted by external adapters:
/// `{"creditScores": [{"ssn": "...", "score": ...}, ...]}`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BatchRequest {
    #[serde(rename = "creditScores")]
    pub credit_scores: Vec<ScoreCandidate>,
}

/// A validated, persisted score record.
///
/// Instances are created only by a successful batch insert and are immutable
/// once persisted. The identifier plus `recorded_at` form a version history;
/// the newest `recorded_at` per identifier is the current score.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub identifier: String,
    pub score: i32,
    pub recorded_at: DateTime<Utc>,
}

/// Reason a candidate failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationFailure {
    #[error("identifier does not match the ddd-dd-dddd format")]
    InvalidIdentifier,

    #[error("score must be an integer between 300 and 850")]
    InvalidScore,
}

/// Result of validating a single candidate. No side effects are implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationFailure),
}

/// Outcome of one batch insert invocation.
///
/// On any non-`Success` outcome zero records from the batch are persisted;
/// the caller must resubmit the entire batch, not just the failed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchOutcome {
    /// Every candidate validated and every row committed
    Success { inserted: usize },
    /// The batch was rejected at the first invalid candidate and rolled back
    Rejected {
        index: usize,
        reason: ValidationFailure,
    },
    /// A store-layer fault aborted the batch; the transaction was rolled back
    PersistenceError,
}

impl BatchOutcome {
    /// Status code an external HTTP adapter maps this outcome to.
    pub fn http_status(&self) -> u16 {
        match self {
            BatchOutcome::Success { .. } => 200,
            BatchOutcome::Rejected { .. } => 422,
            BatchOutcome::PersistenceError => 500,
        }
    }
}

/// Outcome of a lookup. `NotFound` is a valid negative result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LookupOutcome {
    Found(i32),
    NotFound,
}

impl LookupOutcome {
    /// Status code an external HTTP adapter maps this outcome to.
    pub fn http_status(&self) -> u16 {
        match self {
            LookupOutcome::Found(_) => 200,
            LookupOutcome::NotFound => 404,
        }
    }

    /// Response payload for external adapters: `{"creditScore": <int>}` when
    /// found, no body otherwise.
    pub fn payload(&self) -> Option<serde_json::Value> {
        match self {
            LookupOutcome::Found(score) => Some(serde_json::json!({ "creditScore": score })),
            LookupOutcome::NotFound => None,
        }
    }
}
