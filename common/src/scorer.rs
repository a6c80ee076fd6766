//! Similarity scorers
//!
//! A scorer rates how similar a query is to a candidate key on a 0-100
//! scale. Higher means more similar; symmetry is not required.
//!
//! - WeightedRatio: weighted combination of plain, partial and token ratios
//! - JaroWinkler / Levenshtein: single-metric scorers backed by strsim

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Similarity capability used by the fuzzy tier
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Similarity in 0..=100
    fn score(&self, query: &str, candidate: &str) -> u8;
}

/// Scale applied to token based ratios
const UNBASE_SCALE: f64 = 0.95;
/// Scale applied to partial ratios when lengths differ moderately
const PARTIAL_SCALE: f64 = 0.9;
/// Scale applied to partial ratios when one string is 8x longer
const LONG_PARTIAL_SCALE: f64 = 0.6;

/// Weighted ratio
///
/// Picks the best of several ratios depending on how different the two
/// lengths are:
/// - lengths within 1.5x: plain ratio vs. token sort / token set ratios
/// - otherwise: plain ratio vs. partial ratio and partial token ratio
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

impl Scorer for WeightedRatio {
    fn name(&self) -> &'static str {
        "wratio"
    }

    fn score(&self, query: &str, candidate: &str) -> u8 {
        to_score(weighted_ratio(query, candidate))
    }
}

/// Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Scorer for JaroWinkler {
    fn name(&self) -> &'static str {
        "jaro-winkler"
    }

    fn score(&self, query: &str, candidate: &str) -> u8 {
        to_score(strsim::jaro_winkler(query, candidate) * 100.0)
    }
}

/// Normalized Levenshtein similarity
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl Scorer for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn score(&self, query: &str, candidate: &str) -> u8 {
        to_score(strsim::normalized_levenshtein(query, candidate) * 100.0)
    }
}

/// Configured scorer choice
///
/// `Disabled` means no scorer is available: lookups skip the fuzzy tier and
/// fall back to substring and keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScorerKind {
    #[default]
    #[serde(rename = "wratio")]
    WRatio,
    #[serde(rename = "jaro-winkler")]
    JaroWinkler,
    #[serde(rename = "levenshtein")]
    Levenshtein,
    #[serde(rename = "none")]
    Disabled,
}

impl ScorerKind {
    pub fn build(self) -> Option<Box<dyn Scorer>> {
        match self {
            ScorerKind::WRatio => Some(Box::new(WeightedRatio)),
            ScorerKind::JaroWinkler => Some(Box::new(JaroWinkler)),
            ScorerKind::Levenshtein => Some(Box::new(Levenshtein)),
            ScorerKind::Disabled => None,
        }
    }
}

impl std::str::FromStr for ScorerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "wratio" | "weighted" => Ok(ScorerKind::WRatio),
            "jaro-winkler" | "jaro_winkler" | "jaro" => Ok(ScorerKind::JaroWinkler),
            "levenshtein" | "lev" => Ok(ScorerKind::Levenshtein),
            "none" | "off" => Ok(ScorerKind::Disabled),
            _ => Err(Error::UnknownScorer(s.to_string())),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerKind::WRatio => write!(f, "wratio"),
            ScorerKind::JaroWinkler => write!(f, "jaro-winkler"),
            ScorerKind::Levenshtein => write!(f, "levenshtein"),
            ScorerKind::Disabled => write!(f, "none"),
        }
    }
}

/// Truncates, so `score >= min` holds exactly when `value >= min`
fn to_score(value: f64) -> u8 {
    value.floor().clamp(0.0, 100.0) as u8
}

/// Weighted ratio on 0.0..=100.0
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    let shorter = a_chars.len().min(b_chars.len()) as f64;
    let longer = a_chars.len().max(b_chars.len()) as f64;
    let len_ratio = longer / shorter;

    let base = indel_ratio(&a_chars, &b_chars);

    if len_ratio < 1.5 {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return base.max(token * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 {
        PARTIAL_SCALE
    } else {
        LONG_PARTIAL_SCALE
    };

    base.max(partial_ratio(&a_chars, &b_chars) * partial_scale)
        .max(partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale)
}

/// Indel similarity: 2 * LCS / (len_a + len_b)
fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    200.0 * lcs_length(a, b) as f64 / total as f64
}

fn str_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    indel_ratio(&a_chars, &b_chars)
}

/// Longest common subsequence length
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Best ratio of the shorter string against every same-length window of the longer
fn partial_ratio(a: &[char], b: &[char]) -> f64 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        best = best.max(indel_ratio(short, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort_ratio(a: &str, b: &str) -> f64 {
    str_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Intersection and both differences of the token sets
struct TokenSets<'s> {
    sect: Vec<&'s str>,
    diff_ab: Vec<&'s str>,
    diff_ba: Vec<&'s str>,
}

impl<'s> TokenSets<'s> {
    fn new(a: &'s str, b: &'s str) -> Self {
        let set_a: BTreeSet<&str> = a.split_whitespace().collect();
        let set_b: BTreeSet<&str> = b.split_whitespace().collect();

        Self {
            sect: set_a.intersection(&set_b).copied().collect(),
            diff_ab: set_a.difference(&set_b).copied().collect(),
            diff_ba: set_b.difference(&set_a).copied().collect(),
        }
    }
}

fn join_tokens(head: &[&str], tail: &[&str]) -> String {
    head.iter().chain(tail.iter()).copied().collect::<Vec<_>>().join(" ")
}

fn token_set_ratio(a: &str, b: &str) -> f64 {
    let sets = TokenSets::new(a, b);

    // one side is a subset of the other
    if !sets.sect.is_empty() && (sets.diff_ab.is_empty() || sets.diff_ba.is_empty()) {
        return 100.0;
    }

    let sect = sets.sect.join(" ");
    let combined_ab = join_tokens(&sets.sect, &sets.diff_ab);
    let combined_ba = join_tokens(&sets.sect, &sets.diff_ba);

    str_ratio(&sect, &combined_ab)
        .max(str_ratio(&sect, &combined_ba))
        .max(str_ratio(&combined_ab, &combined_ba))
}

fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let sets = TokenSets::new(a, b);

    // any shared token is a perfect partial match
    if !sets.sect.is_empty() {
        return 100.0;
    }

    let sorted_a: Vec<char> = sorted_tokens(a).chars().collect();
    let sorted_b: Vec<char> = sorted_tokens(b).chars().collect();
    let diff_a: Vec<char> = sets.diff_ab.join(" ").chars().collect();
    let diff_b: Vec<char> = sets.diff_ba.join(" ").chars().collect();

    partial_ratio(&sorted_a, &sorted_b).max(partial_ratio(&diff_a, &diff_b))
}
