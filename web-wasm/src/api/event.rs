//! イベントデータ取得

use gloo::net::http::Request;
use seating_common::{parse_event_data, EventData};

/// イベントデータのURL（ページからの相対パス）
pub const DATA_URL: &str = "wedding.json";

/// イベントデータを取得してパース
///
/// 失敗時は画面に表示するエラーメッセージを返す
pub async fn fetch_event_data(url: &str) -> Result<EventData, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {} {} ({})",
            response.status(),
            response.status_text(),
            url
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("failed to read response: {}", e))?;

    parse_event_data(&body).map_err(|e| e.to_string())
}
