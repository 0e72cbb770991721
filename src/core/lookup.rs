use log::{error, info};

use crate::core::record::LookupOutcome;
use crate::error::StoreError;
use crate::store::ScoreStore;

/// Fetches the most recent score record for an identifier.
///
/// The newest record by `recorded_at` wins; absence maps to the `NotFound`
/// outcome rather than an error. The identifier is deliberately not
/// validated on the read path, so callers can probe any key they like.
/// Store errors propagate for the caller to map to an internal failure.
pub struct ScoreLookupService<'a, S: ScoreStore> {
    store: &'a S,
}

impl<'a, S: ScoreStore> ScoreLookupService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Looks up the current score for `identifier`.
    ///
    /// Runs in its own short read transaction; it never observes rows
    /// staged by an in-flight batch.
    pub fn lookup(&self, identifier: &str) -> Result<LookupOutcome, StoreError> {
        info!("Fetching credit score for [{}]", identifier);

        let mut tx = self.store.begin()?;

        let records = match self.store.query(&mut tx, identifier) {
            Ok(records) => records,
            Err(err) => {
                if let Err(rollback_err) = self.store.rollback(tx) {
                    error!("Rollback failed: [{}]", rollback_err);
                }
                return Err(err);
            }
        };

        self.store.commit(tx)?;

        match records.first() {
            Some(record) => Ok(LookupOutcome::Found(record.score)),
            None => Ok(LookupOutcome::NotFound),
        }
    }
}
