use crate::error::{LookupAppError, Result};
use descritivo_common::{MinScore, ScorerKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the configured base file
pub const BASE_ENV_VAR: &str = "DESCRITIVO_BASE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_score: MinScore,
    pub scorer: ScorerKind,
    pub base_path: Option<PathBuf>,
    pub use_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_score: MinScore::default(),
            scorer: ScorerKind::default(),
            base_path: None,
            use_cache: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LookupAppError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("descritivo-funcao").join("config.json"))
    }

    /// Base file to load: environment variable first, then the saved path
    pub fn resolved_base_path(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var(BASE_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.base_path.clone()
    }

    pub fn set_min_score(&mut self, value: u8) -> Result<()> {
        self.min_score = MinScore::new(value)?;
        self.save()
    }

    pub fn set_scorer(&mut self, scorer: ScorerKind) -> Result<()> {
        self.scorer = scorer;
        self.save()
    }

    pub fn set_base_path(&mut self, path: Option<PathBuf>) -> Result<()> {
        self.base_path = path;
        self.save()
    }
}
