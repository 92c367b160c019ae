//! 端末向けの表示整形

use chrono::NaiveDate;
use seating_common::{EventData, LoadStatus, SearchOutcome, SearchState, NO_RESULTS_MESSAGE};

/// 読み込み失敗時の表示行（Rejected以外は None）
pub fn format_load_error(status: &LoadStatus) -> Option<String> {
    status.error_message().map(|message| format!("ERROR: {}", message))
}

/// 検索結果の表示行
pub fn format_outcome(state: &SearchState) -> Vec<String> {
    match state.outcome() {
        SearchOutcome::NotSearched => Vec::new(),
        SearchOutcome::NoResults => vec![NO_RESULTS_MESSAGE.to_string()],
        SearchOutcome::Found(tables) => {
            let width = tables
                .iter()
                .map(|a| a.guest_name.chars().count())
                .max()
                .unwrap_or(0);
            tables
                .iter()
                .map(|a| format!("{:<width$}  →  {}", a.guest_name, a.table, width = width))
                .collect()
        }
    }
}

/// 挙式日までの日数（日付が YYYY-MM-DD 形式の場合のみ）
pub fn days_until(date: &str, today: NaiveDate) -> Option<i64> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    Some((date - today).num_days())
}

/// イベント情報の表示行
pub fn format_event_info(data: &EventData, today: NaiveDate) -> Vec<String> {
    let mut lines = vec![format!("💍 {}", data.couple_title())];
    if !data.last_name.is_empty() {
        lines.push(format!("  姓: {}", data.last_name));
    }
    if !data.date.is_empty() {
        let remaining = match days_until(&data.date, today) {
            Some(0) => " (本日)".to_string(),
            Some(days) if days > 0 => format!(" (あと{}日)", days),
            _ => String::new(),
        };
        lines.push(format!("  日付: {}{}", data.date, remaining));
    }
    if !data.time.is_empty() {
        lines.push(format!("  時刻: {}", data.time));
    }
    if !data.location.is_empty() {
        lines.push(format!("  会場: {}", data.location));
    }
    lines.push(format!(
        "  席次: {}名 / {}テーブル",
        data.seating_chart.len(),
        data.seating_chart.tables().len()
    ));
    lines
}
