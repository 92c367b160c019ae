//! イベントデータパーサー
//!
//! 取得したJSONをEventData/SeatingChartに変換し、
//! 席次エントリの妥当性を検証する

use crate::error::{Error, Result};
use crate::types::{EventData, SeatingChart};

/// イベントデータJSONをパース
///
/// ゲスト名・テーブル名は前後の空白を除去して保持する。
///
/// # Arguments
/// * `json` - イベントデータのJSON文字列
///
/// # Returns
/// * `Ok(EventData)` - パース・検証成功
/// * `Err` - JSON不正、または空のゲスト名/テーブル名を含む場合
///
/// # Examples
/// ```
/// use seating_common::parse_event_data;
///
/// let json = r#"{"bride": "Emma", "groom": "Liam", "seatingChart": [["Alice Smith", "T1"]]}"#;
/// let data = parse_event_data(json).unwrap();
/// assert_eq!(data.seating_chart.len(), 1);
/// ```
pub fn parse_event_data(json: &str) -> Result<EventData> {
    let mut data: EventData = serde_json::from_str(json.trim())?;
    normalize_chart(&mut data.seating_chart)?;
    Ok(data)
}

/// 席次表のみのJSON配列をパース
pub fn parse_seating_chart(json: &str) -> Result<SeatingChart> {
    let mut chart: SeatingChart = serde_json::from_str(json.trim())?;
    normalize_chart(&mut chart)?;
    Ok(chart)
}

fn normalize_chart(chart: &mut SeatingChart) -> Result<()> {
    for (index, assignment) in chart.assignments_mut().iter_mut().enumerate() {
        let guest_name = assignment.guest_name.trim();
        if guest_name.is_empty() {
            return Err(Error::Parse(format!("entry {}: guest name is empty", index)));
        }
        let table = assignment.table.trim();
        if table.is_empty() {
            return Err(Error::Parse(format!(
                "entry {} ({}): table is empty",
                index, guest_name
            )));
        }
        assignment.guest_name = guest_name.to_string();
        assignment.table = table.to_string();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Assignment;

    #[test]
    fn test_parse_event_data_trims_entries() {
        let json = r#"{
            "bride": "Emma",
            "groom": "Liam",
            "seatingChart": [["  Alice Smith ", " T1"]]
        }"#;
        let data = parse_event_data(json).expect("パース失敗");
        assert_eq!(data.seating_chart.assignments()[0], Assignment::new("Alice Smith", "T1"));
    }

    #[test]
    fn test_parse_event_data_rejects_empty_name() {
        let json = r#"{"bride": "Emma", "groom": "Liam", "seatingChart": [["Bob", "T2"], ["   ", "T1"]]}"#;
        let err = parse_event_data(json).unwrap_err();
        match err {
            Error::Parse(msg) => assert!(msg.contains("entry 1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_event_data_rejects_empty_table() {
        let json = r#"{"bride": "Emma", "groom": "Liam", "seatingChart": [["Bob Jones", ""]]}"#;
        let err = parse_event_data(json).unwrap_err();
        assert!(format!("{}", err).contains("Bob Jones"));
    }

    #[test]
    fn test_parse_event_data_invalid_json() {
        let err = parse_event_data("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_event_data_missing_couple() {
        let err = parse_event_data(r#"{"seatingChart": []}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_seating_chart() {
        let chart = parse_seating_chart(r#"[["Alice Smith", "T1"], {"name": "Bob Jones", "table": "T2"}]"#)
            .expect("パース失敗");
        assert_eq!(chart.len(), 2);
        assert_eq!(chart.tables(), vec!["T1", "T2"]);
    }
}
