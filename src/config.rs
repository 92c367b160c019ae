use crate::error::{Result, SeatingError};
use seating_common::MatchRule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データ取得先を上書きする環境変数
pub const DATA_URL_ENV: &str = "SEATING_DATA_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data_url: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub match_rule: MatchRule,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SeatingError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("wedding-seating").join("config.json"))
    }

    /// データ取得先を決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_data_source(&self, arg: Option<&str>) -> Result<String> {
        let env = std::env::var(DATA_URL_ENV).ok();
        pick_data_source(arg, env.as_deref(), self.data_url.as_deref())
    }
}

fn pick_data_source(arg: Option<&str>, env: Option<&str>, configured: Option<&str>) -> Result<String> {
    [arg, env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(SeatingError::MissingDataSource)
}
