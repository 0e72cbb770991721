mod common;

use common::mocks::MockStore;

use credit_score_rs::{
    core::{
        clock::{FixedClock, SystemClock},
        lookup::ScoreLookupService,
        pipeline::BatchInsertPipeline,
        record::{BatchOutcome, ScoreCandidate, ValidationFailure},
    },
    error::StoreError,
};

use chrono::{TimeZone, Utc};

fn fixed_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

#[test]
fn begin_failure_maps_to_persistence_error() {
    let mut store = MockStore::new();
    store
        .expect_begin()
        .times(1)
        .returning(|| Err(StoreError::Begin("no connection".to_string())));
    // No transaction was handed out, so nothing to roll back.

    let clock = fixed_clock();
    let pipeline = BatchInsertPipeline::new(&store, &clock);
    let outcome = pipeline.insert_batch(&[ScoreCandidate::new("123-45-6789", 700)]);

    assert_eq!(outcome, BatchOutcome::PersistenceError);
}

#[test]
fn insert_failure_rolls_back_and_maps_to_persistence_error() {
    let mut store = MockStore::new();
    store.expect_begin().times(1).returning(|| Ok(()));
    store
        .expect_insert()
        .times(1)
        .returning(|_, _| Err(StoreError::Insert("disk full".to_string())));
    store.expect_rollback().times(1).returning(|_| Ok(()));

    let clock = fixed_clock();
    let pipeline = BatchInsertPipeline::new(&store, &clock);
    let outcome = pipeline.insert_batch(&[
        ScoreCandidate::new("123-45-6789", 700),
        ScoreCandidate::new("987-65-4321", 640),
    ]);

    assert_eq!(outcome, BatchOutcome::PersistenceError);
}

#[test]
fn commit_failure_maps_to_persistence_error() {
    let mut store = MockStore::new();
    store.expect_begin().times(1).returning(|| Ok(()));
    store.expect_insert().times(1).returning(|_, _| Ok(()));
    store
        .expect_commit()
        .times(1)
        .returning(|_| Err(StoreError::Commit("lost connection".to_string())));

    let clock = fixed_clock();
    let pipeline = BatchInsertPipeline::new(&store, &clock);
    let outcome = pipeline.insert_batch(&[ScoreCandidate::new("123-45-6789", 700)]);

    assert_eq!(outcome, BatchOutcome::PersistenceError);
}

#[test]
fn validation_short_circuit_still_rolls_back_the_transaction() {
    let mut store = MockStore::new();
    store.expect_begin().times(1).returning(|| Ok(()));
    store.expect_insert().times(1).returning(|_, _| Ok(()));
    store.expect_rollback().times(1).returning(|_| Ok(()));
    // Neither commit nor a second insert must ever happen.

    let clock = fixed_clock();
    let pipeline = BatchInsertPipeline::new(&store, &clock);
    let outcome = pipeline.insert_batch(&[
        ScoreCandidate::new("123-45-6789", 700),
        ScoreCandidate::new("not-an-ssn", 650),
        ScoreCandidate::new("987-65-4321", 640),
    ]);

    assert_eq!(
        outcome,
        BatchOutcome::Rejected {
            index: 1,
            reason: ValidationFailure::InvalidIdentifier
        }
    );
}

#[test]
fn store_fault_during_rollback_is_swallowed() {
    let mut store = MockStore::new();
    store.expect_begin().times(1).returning(|| Ok(()));
    store
        .expect_insert()
        .times(1)
        .returning(|_, _| Err(StoreError::Insert("disk full".to_string())));
    store
        .expect_rollback()
        .times(1)
        .returning(|_| Err(StoreError::Rollback("connection gone".to_string())));

    let clock = SystemClock;
    let pipeline = BatchInsertPipeline::new(&store, &clock);
    let outcome = pipeline.insert_batch(&[ScoreCandidate::new("123-45-6789", 700)]);

    assert_eq!(outcome, BatchOutcome::PersistenceError);
}

#[test]
fn lookup_query_failure_rolls_back_and_propagates() {
    let mut store = MockStore::new();
    store.expect_begin().times(1).returning(|| Ok(()));
    store
        .expect_query()
        .times(1)
        .returning(|_, _| Err(StoreError::Query("table missing".to_string())));
    store.expect_rollback().times(1).returning(|_| Ok(()));

    let service = ScoreLookupService::new(&store);
    let result = service.lookup("123-45-6789");

    assert!(matches!(result, Err(StoreError::Query(_))));
}

#[test]
fn lookup_commit_failure_propagates() {
    let mut store = MockStore::new();
    store.expect_begin().times(1).returning(|| Ok(()));
    store.expect_query().times(1).returning(|_, _| Ok(Vec::new()));
    store
        .expect_commit()
        .times(1)
        .returning(|_| Err(StoreError::Commit("lost connection".to_string())));

    let service = ScoreLookupService::new(&store);
    let result = service.lookup("123-45-6789");

    assert!(matches!(result, Err(StoreError::Commit(_))));
}
