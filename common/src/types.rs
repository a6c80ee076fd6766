//! Record and lookup result types
//!
//! - Record: one row of the job-function base (name, CBO code, activities)
//! - LookupResult: outcome of a single query, borrowed from the table
//! - MinScore: fuzzy sensitivity threshold

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job-function record
///
/// Immutable once built. The name is guaranteed non-blank; duplicate names
/// across records are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct Record {
    name: String,
    code: String,
    activities: Vec<String>,
}

/// Unchecked shape used while deserializing a [`Record`]
#[derive(Deserialize)]
struct RecordFields {
    name: String,
    #[serde(default)]
    code: String,
    #[serde(default)]
    activities: Vec<String>,
}

impl TryFrom<RecordFields> for Record {
    type Error = Error;

    fn try_from(fields: RecordFields) -> Result<Self> {
        Record::new(fields.name, fields.code, fields.activities)
    }
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        activities: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }

        Ok(Self {
            name,
            code: code.into(),
            activities,
        })
    }

    /// Display name, exactly as loaded
    pub fn name(&self) -> &str {
        &self.name
    }

    /// CBO code
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn activities(&self) -> &[String] {
        &self.activities
    }
}

/// Fuzzy sensitivity threshold (50-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MinScore(u8);

impl MinScore {
    pub const MIN: u8 = 50;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 80;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidMinScore(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for MinScore {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for MinScore {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MinScore> for u8 {
    fn from(score: MinScore) -> Self {
        score.0
    }
}

impl fmt::Display for MinScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tier satisfied a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Exact,
    Fuzzy,
    Substring,
    Keyword,
    NoMatch,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "exact"),
            MatchKind::Fuzzy => write!(f, "fuzzy"),
            MatchKind::Substring => write!(f, "substring"),
            MatchKind::Keyword => write!(f, "keyword"),
            MatchKind::NoMatch => write!(f, "no_match"),
        }
    }
}

/// Record paired with its similarity score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredRecord<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub score: u8,
}

/// Outcome of one lookup
///
/// Hits borrow from the table they were found in and keep table order,
/// except fuzzy hits and suggestions which are ranked by score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupResult<'a> {
    Exact {
        hits: Vec<&'a Record>,
    },
    Fuzzy {
        hits: Vec<ScoredRecord<'a>>,
    },
    Substring {
        hits: Vec<&'a Record>,
    },
    Keyword {
        keywords: Vec<String>,
        hits: Vec<&'a Record>,
    },
    /// Suggestions are diagnostic only and never count as a match
    NoMatch {
        suggestions: Vec<ScoredRecord<'a>>,
    },
}

impl<'a> LookupResult<'a> {
    pub fn no_match() -> Self {
        LookupResult::NoMatch {
            suggestions: Vec::new(),
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            LookupResult::Exact { .. } => MatchKind::Exact,
            LookupResult::Fuzzy { .. } => MatchKind::Fuzzy,
            LookupResult::Substring { .. } => MatchKind::Substring,
            LookupResult::Keyword { .. } => MatchKind::Keyword,
            LookupResult::NoMatch { .. } => MatchKind::NoMatch,
        }
    }

    pub fn is_match(&self) -> bool {
        self.kind() != MatchKind::NoMatch
    }

    /// Matched records with their score (score only for fuzzy hits)
    pub fn hits(&self) -> Vec<(&'a Record, Option<u8>)> {
        match self {
            LookupResult::Exact { hits }
            | LookupResult::Substring { hits }
            | LookupResult::Keyword { hits, .. } => hits.iter().map(|r| (*r, None)).collect(),
            LookupResult::Fuzzy { hits } => hits.iter().map(|h| (h.record, Some(h.score))).collect(),
            LookupResult::NoMatch { .. } => Vec::new(),
        }
    }

    /// Number of matched records
    pub fn len(&self) -> usize {
        match self {
            LookupResult::Exact { hits }
            | LookupResult::Substring { hits }
            | LookupResult::Keyword { hits, .. } => hits.len(),
            LookupResult::Fuzzy { hits } => hits.len(),
            LookupResult::NoMatch { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn suggestions(&self) -> &[ScoredRecord<'a>] {
        match self {
            LookupResult::NoMatch { suggestions } => suggestions,
            _ => &[],
        }
    }
}
