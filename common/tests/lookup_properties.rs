//! Lookup engine property tests

use descritivo_common::{
    normalize, LookupEngine, LookupResult, MatchKind, MinScore, Record, RecordTable, MIN_KEYWORD_LEN,
};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "analista", "de", "recursos", "humanos", "enfermeiro", "técnico", "em", "enfermagem",
    "vendas", "rh", "gestão", "coordenador", "auxiliar", "administrativo", "remuneração",
];

fn arb_name() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|words| words.join(" "))
}

fn arb_table() -> impl Strategy<Value = RecordTable> {
    prop::collection::vec(arb_name(), 0..12).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Record::new(name, format!("{:04}-00", i), vec![]).unwrap())
            .collect()
    })
}

fn arb_query() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..3).prop_map(|words| words.join(" "))
}

fn fuzzy_len(result: &LookupResult<'_>) -> usize {
    if result.kind() == MatchKind::Fuzzy {
        result.len()
    } else {
        0
    }
}

/// Optionally uppercase and pad with whitespace
fn disguise(name: &str, upper: bool) -> String {
    let body = if upper { name.to_uppercase() } else { name.to_string() };
    format!("  {}\t", body)
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[ a-zA-ZÀ-ÖØ-öø-ÿ\t]{0,40}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn lookup_is_deterministic(table in arb_table(), query in arb_query(), score in 50u8..=100) {
        let min_score = MinScore::new(score).unwrap();
        for engine in [LookupEngine::default(), LookupEngine::without_scorer()] {
            let first = engine.lookup(&table, &query, min_score);
            let second = engine.lookup(&table, &query, min_score);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn exact_match_takes_precedence(
        table in arb_table().prop_filter("non-empty table", |t| !t.is_empty()),
        pick in any::<prop::sample::Index>(),
        upper in any::<bool>(),
    ) {
        let target = &table.all()[pick.index(table.len())];
        let query = disguise(target.name(), upper);

        for engine in [LookupEngine::default(), LookupEngine::without_scorer()] {
            let result = engine.lookup(&table, &query, MinScore::default());
            prop_assert_eq!(result.kind(), MatchKind::Exact);
            prop_assert!(result.hits().iter().any(|(r, _)| std::ptr::eq(*r, target)));
            prop_assert!(result.hits().iter().all(|(_, s)| s.is_none()));
        }
    }

    #[test]
    fn raising_threshold_never_grows_fuzzy_hits(
        table in arb_table(),
        query in arb_query(),
        low in 50u8..=100,
        delta in 0u8..=50,
    ) {
        let high = low.saturating_add(delta).min(100);
        let engine = LookupEngine::default();

        let loose = engine.lookup(&table, &query, MinScore::new(low).unwrap());
        let strict = engine.lookup(&table, &query, MinScore::new(high).unwrap());

        prop_assert!(fuzzy_len(&strict) <= fuzzy_len(&loose));
    }

    #[test]
    fn fuzzy_hits_are_sorted_and_above_threshold(
        table in arb_table(),
        query in arb_query(),
        score in 50u8..=100,
    ) {
        let engine = LookupEngine::default();
        let result = engine.lookup(&table, &query, MinScore::new(score).unwrap());

        let scores: Vec<u8> = result.hits().iter().filter_map(|(_, s)| *s).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(scores.iter().all(|s| *s >= score));
        prop_assert!(result.suggestions().len() <= 3);
    }

    #[test]
    fn short_tokens_never_match_by_keyword(
        table in arb_table(),
        tokens in prop::collection::vec("[a-zà-ú]{1,3}", 1..4),
    ) {
        let query = tokens.join(" ");
        let result = LookupEngine::without_scorer().lookup(&table, &query, MinScore::default());
        prop_assert_ne!(result.kind(), MatchKind::Keyword);
    }

    #[test]
    fn keyword_hits_contain_a_long_token(table in arb_table(), query in arb_query()) {
        let result = LookupEngine::without_scorer().lookup(&table, &query, MinScore::default());
        if let LookupResult::Keyword { keywords, hits } = &result {
            prop_assert!(keywords.iter().all(|k| k.chars().count() >= MIN_KEYWORD_LEN));
            for record in hits {
                let key = normalize(record.name());
                prop_assert!(keywords.iter().any(|k| key.contains(k)));
            }
        }
    }
}

#[test]
fn test_fuzzy_scenario_reports_suggestion() {
    use descritivo_common::Scorer;

    struct Strict;

    impl Scorer for Strict {
        fn name(&self) -> &'static str {
            "strict"
        }

        fn score(&self, _query: &str, candidate: &str) -> u8 {
            if candidate.starts_with("analista") { 70 } else { 10 }
        }
    }

    let table = RecordTable::new(vec![
        Record::new("Enfermeiro", "2235-10", vec![]).unwrap(),
        Record::new("Analista de Recursos Humanos", "2524-05", vec![]).unwrap(),
    ]);

    let result = LookupEngine::with_scorer(Strict).lookup(&table, "analista rh", MinScore::default());
    assert_eq!(result.kind(), MatchKind::NoMatch);
    assert_eq!(result.suggestions()[0].record.name(), "Analista de Recursos Humanos");
    assert_eq!(result.suggestions()[0].score, 70);
}

#[test]
fn test_round_trip_scenario() {
    let activities = vec!["Assistência de enfermagem".to_string(), "Plantões".to_string()];
    let table = RecordTable::new(vec![
        Record::new("Enfermeiro", "2235-10", activities.clone()).unwrap(),
    ]);

    let result = LookupEngine::default().lookup(&table, "enfermeiro", MinScore::default());
    assert_eq!(result.kind(), MatchKind::Exact);
    let hits = result.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.code(), "2235-10");
    assert_eq!(hits[0].0.activities(), activities.as_slice());
}
