//! Per-command setup: which base to load and how to match
//!
//! Command-line flags win over the saved configuration.

use crate::cli::{BaseArgs, MatchArgs};
use crate::config::Config;
use crate::error::{LookupAppError, Result};
use crate::loader::{self, cache::TableCache};
use crate::sample;
use descritivo_common::{LookupEngine, MinScore, RecordTable};
use std::path::PathBuf;
use tracing::debug;

/// Where the base comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseSource {
    File(PathBuf),
    Sample,
}

/// Order: `--base`, environment, saved config, built-in sample
pub fn resolve_base(args: &BaseArgs, config: &Config) -> Result<BaseSource> {
    if let Some(path) = args.base.clone().or_else(|| config.resolved_base_path()) {
        return Ok(BaseSource::File(path));
    }

    if args.no_sample {
        return Err(LookupAppError::NoBaseLoaded);
    }

    Ok(BaseSource::Sample)
}

pub fn load_base(args: &BaseArgs, config: &Config) -> Result<RecordTable> {
    match resolve_base(args, config)? {
        BaseSource::File(path) => {
            let cache_dir = TableCache::default_dir().filter(|_| config.use_cache && !args.no_cache);
            match cache_dir {
                Some(dir) => loader::load_table_cached(&path, &dir),
                None => loader::load_table(&path),
            }
        }
        BaseSource::Sample => {
            debug!("usando base de exemplo");
            sample::sample_table()
        }
    }
}

pub fn resolve_matching(args: &MatchArgs, config: &Config) -> Result<(LookupEngine, MinScore)> {
    let min_score = match args.min_score {
        Some(value) => MinScore::new(value)?,
        None => config.min_score,
    };
    let scorer = args.scorer.unwrap_or(config.scorer);

    Ok((LookupEngine::from_kind(scorer), min_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use descritivo_common::ScorerKind;

    #[test]
    fn test_base_flag_wins() {
        let args = BaseArgs {
            base: Some(PathBuf::from("flag.csv")),
            ..Default::default()
        };
        let config = Config {
            base_path: Some(PathBuf::from("config.csv")),
            ..Default::default()
        };

        assert_eq!(
            resolve_base(&args, &config).unwrap(),
            BaseSource::File(PathBuf::from("flag.csv"))
        );
    }

    #[test]
    fn test_sample_fallback_and_no_sample() {
        if std::env::var(crate::config::BASE_ENV_VAR).is_ok() {
            return;
        }

        let config = Config::default();
        assert_eq!(
            resolve_base(&BaseArgs::default(), &config).unwrap(),
            BaseSource::Sample
        );

        let args = BaseArgs {
            no_sample: true,
            ..Default::default()
        };
        assert!(matches!(
            resolve_base(&args, &config),
            Err(LookupAppError::NoBaseLoaded)
        ));
    }

    #[test]
    fn test_load_sample_base() {
        if std::env::var(crate::config::BASE_ENV_VAR).is_ok() {
            return;
        }

        let table = load_base(&BaseArgs::default(), &Config::default()).unwrap();
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_resolve_matching_defaults_and_overrides() {
        let config = Config {
            min_score: MinScore::new(70).unwrap(),
            scorer: ScorerKind::Disabled,
            ..Default::default()
        };

        let (engine, min_score) = resolve_matching(&MatchArgs::default(), &config).unwrap();
        assert!(!engine.has_scorer());
        assert_eq!(min_score.get(), 70);

        let args = MatchArgs {
            min_score: Some(95),
            scorer: Some(ScorerKind::Levenshtein),
        };
        let (engine, min_score) = resolve_matching(&args, &config).unwrap();
        assert_eq!(engine.scorer_name(), Some("levenshtein"));
        assert_eq!(min_score.get(), 95);
    }
}
