//! Job-function lookup core
//!
//! Record table, similarity scorers and the tiered lookup engine. No I/O:
//! loading, rendering and persistence belong to the caller.

pub mod error;
pub mod types;
pub mod table;
pub mod scorer;
pub mod engine;

pub use error::{Error, Result};
pub use types::{LookupResult, MatchKind, MinScore, Record, ScoredRecord};
pub use table::{normalize, NormalizedKey, RecordTable};
pub use scorer::{JaroWinkler, Levenshtein, Scorer, ScorerKind, WeightedRatio};
pub use engine::{LookupEngine, FUZZY_LIMIT, MIN_KEYWORD_LEN, SUGGESTION_COUNT};
