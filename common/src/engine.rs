//! Tiered lookup engine
//!
//! Resolves a free-text query against a [`RecordTable`]:
//!
//! 1. Exact: normalized query equals a normalized name
//! 2. Fuzzy: scorer ranking (only when a scorer is configured)
//! 3. Substring: normalized name contains the query
//! 4. Keyword: normalized name contains any query token longer than 3 chars
//!
//! Each tier runs only when every previous tier found nothing. With a
//! scorer configured the fuzzy tier is final: it either returns hits or a
//! no-match carrying the best suggestions.

use crate::scorer::{Scorer, ScorerKind};
use crate::table::{normalize, NormalizedKey, RecordTable};
use crate::types::{LookupResult, MinScore, Record, ScoredRecord};
use tracing::debug;

/// Fuzzy candidates kept before thresholding
pub const FUZZY_LIMIT: usize = 10;
/// Suggestions attached to a fuzzy no-match
pub const SUGGESTION_COUNT: usize = 3;
/// Shortest token (in chars) used by the keyword tier
pub const MIN_KEYWORD_LEN: usize = 4;

/// Lookup engine with an optional similarity scorer
pub struct LookupEngine {
    scorer: Option<Box<dyn Scorer>>,
}

impl Default for LookupEngine {
    fn default() -> Self {
        Self::from_kind(ScorerKind::default())
    }
}

impl std::fmt::Debug for LookupEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupEngine")
            .field("scorer", &self.scorer_name())
            .finish()
    }
}

impl LookupEngine {
    pub fn new(scorer: Option<Box<dyn Scorer>>) -> Self {
        Self { scorer }
    }

    pub fn with_scorer(scorer: impl Scorer + 'static) -> Self {
        Self::new(Some(Box::new(scorer)))
    }

    /// Engine without fuzzy capability (substring and keyword tiers only)
    pub fn without_scorer() -> Self {
        Self::new(None)
    }

    pub fn from_kind(kind: ScorerKind) -> Self {
        Self::new(kind.build())
    }

    pub fn scorer_name(&self) -> Option<&'static str> {
        self.scorer.as_ref().map(|s| s.name())
    }

    pub fn has_scorer(&self) -> bool {
        self.scorer.is_some()
    }

    /// Resolve `query` against `table`
    ///
    /// A blank query returns a no-match without suggestions; callers are
    /// expected to skip the lookup in that case.
    pub fn lookup<'a>(
        &self,
        table: &'a RecordTable,
        query: &str,
        min_score: MinScore,
    ) -> LookupResult<'a> {
        let query = normalize(query);
        if query.is_empty() {
            debug!("blank query, lookup skipped");
            return LookupResult::no_match();
        }

        let exact = exact_matches(table, &query);
        if !exact.is_empty() {
            debug!(query = %query, hits = exact.len(), "exact match");
            return LookupResult::Exact { hits: exact };
        }

        if let Some(scorer) = &self.scorer {
            return fuzzy_matches(table, &query, scorer.as_ref(), min_score);
        }

        let substring = substring_matches(table, &query);
        if !substring.is_empty() {
            debug!(query = %query, hits = substring.len(), "substring match");
            return LookupResult::Substring { hits: substring };
        }

        keyword_matches(table, &query)
    }
}

fn exact_matches<'a>(table: &'a RecordTable, query: &NormalizedKey) -> Vec<&'a Record> {
    table
        .entries()
        .filter(|(_, key)| *key == query)
        .map(|(record, _)| record)
        .collect()
}

fn fuzzy_matches<'a>(
    table: &'a RecordTable,
    query: &NormalizedKey,
    scorer: &dyn Scorer,
    min_score: MinScore,
) -> LookupResult<'a> {
    let mut candidates: Vec<ScoredRecord<'a>> = table
        .entries()
        .map(|(record, key)| ScoredRecord {
            record,
            score: scorer.score(query.as_str(), key.as_str()).min(100),
        })
        .collect();

    // stable: equal scores keep table order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(FUZZY_LIMIT);

    let good: Vec<ScoredRecord<'a>> = candidates
        .iter()
        .copied()
        .filter(|c| c.score >= min_score.get())
        .collect();

    if good.is_empty() {
        candidates.truncate(SUGGESTION_COUNT);
        debug!(
            query = %query,
            scorer = scorer.name(),
            min_score = min_score.get(),
            suggestions = candidates.len(),
            "no fuzzy candidate above threshold"
        );
        return LookupResult::NoMatch {
            suggestions: candidates,
        };
    }

    debug!(query = %query, scorer = scorer.name(), hits = good.len(), "fuzzy match");
    LookupResult::Fuzzy { hits: good }
}

fn substring_matches<'a>(table: &'a RecordTable, query: &NormalizedKey) -> Vec<&'a Record> {
    table
        .entries()
        .filter(|(_, key)| key.contains(query.as_str()))
        .map(|(record, _)| record)
        .collect()
}

/// Query tokens long enough to be discriminative
pub fn keywords(query: &NormalizedKey) -> Vec<String> {
    query
        .as_str()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .map(str::to_string)
        .collect()
}

fn keyword_matches<'a>(table: &'a RecordTable, query: &NormalizedKey) -> LookupResult<'a> {
    let keywords = keywords(query);
    if keywords.is_empty() {
        debug!(query = %query, "no usable keywords");
        return LookupResult::no_match();
    }

    let hits: Vec<&Record> = table
        .entries()
        .filter(|(_, key)| keywords.iter().any(|k| key.contains(k)))
        .map(|(record, _)| record)
        .collect();

    if hits.is_empty() {
        debug!(query = %query, keywords = ?keywords, "no keyword match");
        return LookupResult::no_match();
    }

    debug!(query = %query, hits = hits.len(), "keyword match");
    LookupResult::Keyword { keywords, hits }
}
