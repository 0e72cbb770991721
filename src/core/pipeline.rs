use log::{debug, error, info};
use uuid::Uuid;

use crate::core::clock::Clock;
use crate::core::record::{
    BatchOutcome, ScoreCandidate, ScoreRecord, ValidationFailure, ValidationResult,
};
use crate::core::validator::ScoreRecordValidator;
use crate::store::ScoreStore;

/// Validates and persists an ordered batch of candidates inside one store
/// transaction.
///
/// # Design
///
/// - Candidates are processed strictly sequentially, in input order. This
///   keeps fail-fast behavior deterministic and error reporting stable.
/// - The clock is read once per invocation; every record of the batch is
///   persisted with that same timestamp.
/// - The first invalid candidate aborts the batch immediately: later
///   candidates are neither validated nor persisted, staged rows are rolled
///   back, and the outcome carries the failing index and reason.
/// - Store-layer faults roll back the batch and surface as the coarse
///   `PersistenceError` outcome; the underlying error is logged, not
///   returned. Validation and persistence failures alike leave zero rows
///   behind.
/// - A rejected or failed batch is never retried here; the caller resubmits.
///
/// # Examples
///
/// ```
/// use credit_score_rs::core::clock::SystemClock;
/// use credit_score_rs::core::pipeline::BatchInsertPipeline;
/// use credit_score_rs::core::record::{BatchOutcome, ScoreCandidate};
/// use credit_score_rs::store::memory::InMemoryScoreStore;
///
/// let store = InMemoryScoreStore::new();
/// let clock = SystemClock;
/// let pipeline = BatchInsertPipeline::new(&store, &clock);
///
/// let outcome = pipeline.insert_batch(&[
///     ScoreCandidate::new("123-45-6789", 700),
///     ScoreCandidate::new("987-65-4321", 640),
/// ]);
///
/// assert!(matches!(outcome, BatchOutcome::Success { inserted: 2 }));
/// ```
pub struct BatchInsertPipeline<'a, S: ScoreStore> {
    store: &'a S,
    clock: &'a dyn Clock,
    validator: ScoreRecordValidator,
}

impl<'a, S: ScoreStore> BatchInsertPipeline<'a, S> {
    pub fn new(store: &'a S, clock: &'a dyn Clock) -> Self {
        Self {
            store,
            clock,
            validator: ScoreRecordValidator::default(),
        }
    }

    /// Runs the whole batch through validation and persistence.
    ///
    /// Returns a structured outcome instead of an error: validation and
    /// store failures are both recovered here, after rolling back.
    pub fn insert_batch(&self, candidates: &[ScoreCandidate]) -> BatchOutcome {
        let batch_id = Uuid::new_v4();
        info!(
            "Processing credit scores: batch {}, {} candidates",
            batch_id,
            candidates.len()
        );

        // One timestamp for the whole batch: a batch is a single logical event.
        let recorded_at = self.clock.now();

        let mut tx = match self.store.begin() {
            Ok(tx) => tx,
            Err(err) => {
                error!("Error processing credit scores: [{}]", err);
                return BatchOutcome::PersistenceError;
            }
        };

        for (index, candidate) in candidates.iter().enumerate() {
            if let ValidationResult::Invalid(reason) = self.validator.validate(candidate) {
                info!(
                    "Error processing credit scores: batch {} rejected at index {}: [{}]",
                    batch_id, index, reason
                );
                self.abort(tx);
                return BatchOutcome::Rejected { index, reason };
            }

            // Validation guarantees an integral score in [300, 850].
            let Some(score) = candidate.score.as_i64() else {
                self.abort(tx);
                return BatchOutcome::Rejected {
                    index,
                    reason: ValidationFailure::InvalidScore,
                };
            };

            let record = ScoreRecord {
                identifier: candidate.identifier.clone(),
                score: score as i32,
                recorded_at,
            };

            if let Err(err) = self.store.insert(&mut tx, &record) {
                error!("Error processing credit scores: [{}]", err);
                self.abort(tx);
                return BatchOutcome::PersistenceError;
            }
        }

        match self.store.commit(tx) {
            Ok(()) => {
                debug!(
                    "Batch {} committed, {} records at {}",
                    batch_id,
                    candidates.len(),
                    recorded_at
                );
                BatchOutcome::Success {
                    inserted: candidates.len(),
                }
            }
            Err(err) => {
                error!("Error processing credit scores: [{}]", err);
                BatchOutcome::PersistenceError
            }
        }
    }

    fn abort(&self, tx: S::Tx) {
        if let Err(err) = self.store.rollback(tx) {
            error!("Rollback failed: [{}]", err);
        }
    }
}
