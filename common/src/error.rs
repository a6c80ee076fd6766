//! Error types

use crate::types::MinScore;
use thiserror::Error;

/// Shared error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Record error: function name is empty")]
    EmptyName,

    #[error("Config error: min score {0} out of range ({min}-{max})", min = MinScore::MIN, max = MinScore::MAX)]
    InvalidMinScore(u8),

    #[error("Config error: unknown scorer '{0}' (use wratio, jaro-winkler, levenshtein or none)")]
    UnknownScorer(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
