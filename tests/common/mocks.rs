//! Mock version of the score store, for driving fault paths.
use mockall::mock;

use credit_score_rs::{core::record::ScoreRecord, error::StoreError, store::ScoreStore};

mock! {
    pub Store {}
    impl ScoreStore for Store {
        type Tx = ();
        fn begin(&self) -> Result<(), StoreError>;
        fn insert(&self, tx: &mut (), record: &ScoreRecord) -> Result<(), StoreError>;
        fn query(&self, tx: &mut (), identifier: &str) -> Result<Vec<ScoreRecord>, StoreError>;
        fn commit(&self, tx: ()) -> Result<(), StoreError>;
        fn rollback(&self, tx: ()) -> Result<(), StoreError>;
    }
}
