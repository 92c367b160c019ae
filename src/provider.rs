//! イベントデータ取得（Data Provider）
//!
//! ファイルまたは http(s) URL から一度だけ読み込む。再試行はしない。

use crate::error::{Result, SeatingError};
use indicatif::{ProgressBar, ProgressStyle};
use seating_common::{parse_event_data, EventData, LoadStatus};
use std::path::PathBuf;
use std::time::Duration;

/// データ取得先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            DataSource::Url(source.to_string())
        } else {
            DataSource::File(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// 取得元からJSON文字列を読み込む
async fn read_source(source: &DataSource) -> Result<String> {
    match source {
        DataSource::File(path) => {
            if !path.exists() {
                return Err(SeatingError::FileNotFound(path.display().to_string()));
            }
            Ok(tokio::fs::read_to_string(path).await?)
        }
        DataSource::Url(url) => {
            let response = reqwest::get(url).await?;
            let status = response.status();
            tracing::debug!(%url, %status, "fetched event data");
            if !status.is_success() {
                return Err(SeatingError::Fetch(format!("HTTP {} ({})", status.as_u16(), url)));
            }
            Ok(response.text().await?)
        }
    }
}

/// イベントデータを取得してパース
pub async fn fetch_event_data(source: &DataSource) -> Result<EventData> {
    tracing::debug!(%source, "loading event data");
    let content = read_source(source).await?;
    let data = parse_event_data(&content)?;
    tracing::info!(
        assignments = data.seating_chart.len(),
        "event data loaded"
    );
    Ok(data)
}

/// 読み込み状態を進めながら取得（Idle → Loading → Ready/Rejected）
///
/// 端末ではスピナーを表示する
pub async fn load(source: &DataSource, show_spinner: bool) -> LoadStatus {
    let mut status = LoadStatus::Idle;
    status.begin();

    let spinner = show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Loading...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = fetch_event_data(source).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if let Err(e) = &result {
        tracing::warn!(%source, error = %e, "failed to load event data");
    }
    status.resolve(result.map_err(|e| e.to_string()));
    status
}
