#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Credit-Score for Rust

 A small service component exposing two operations over a credit-score
 history table: validated, transactional **batch insert** and
 **latest-score lookup**. The component owns the business rules and the
 transaction boundary; connection management, resource lookup and the
 HTTP/RPC surface stay with the caller.

 ## Core Concepts

 Understanding these core components will help you get started:

 - **ScoreCandidate:** A raw, unvalidated record submitted by a caller. A
   `BatchRequest` is an ordered sequence of candidates processed as one
   transactional unit.
 - **ScoreRecordValidator:** Pure validation of a single candidate against
   the domain rules (identifier format, score range). No side effects.
 - **BatchInsertPipeline:** Validates and persists a batch sequentially, in
   input order, inside one store transaction. The first invalid candidate
   aborts the whole batch; either every record commits or none does.
 - **ScoreLookupService:** Fetches the most recent record for an identifier
   and maps absence to a `NotFound` outcome.
 - **ScoreStore:** The persistence seam. Implementations provide
   transaction demarcation (`begin`/`commit`/`rollback`) plus parameterized
   insert and query.

 ## Features

 The crate is modular, allowing you to enable only the features you need:

 | **Feature**   | **Description**                                        |
 |---------------|--------------------------------------------------------|
 | rdbc-sqlite   | Enables the SQLx-backed `SqliteScoreStore`             |
 | full          | Enables all available features                         |

 An in-memory `ScoreStore` is always available and needs no feature flag.

 ## Getting Started

 ```rust
 use credit_score_rs::{
     core::{
         clock::SystemClock,
         lookup::ScoreLookupService,
         pipeline::BatchInsertPipeline,
         record::{BatchOutcome, LookupOutcome, ScoreCandidate},
     },
     store::memory::InMemoryScoreStore,
 };

 let store = InMemoryScoreStore::new();
 let clock = SystemClock;

 let pipeline = BatchInsertPipeline::new(&store, &clock);
 let outcome = pipeline.insert_batch(&[ScoreCandidate::new("123-45-6789", 700)]);
 assert!(matches!(outcome, BatchOutcome::Success { inserted: 1 }));

 let lookup = ScoreLookupService::new(&store);
 let result = lookup.lookup("123-45-6789").unwrap();
 assert_eq!(result, LookupOutcome::Found(700));
 ```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 */

/// Core module for validation, batch insert and lookup operations
pub mod core;

/// Error types for store operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Persistence seam and the bundled store implementations
pub mod store;
