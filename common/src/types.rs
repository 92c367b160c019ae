//! イベント・席次データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Assignment: ゲスト名とテーブルの組
//! - SeatingChart: 読み込み順を保った席次表（読み込み後は不変）
//! - EventData: 起動時に一度だけ取得するイベント情報

use serde::{Deserialize, Serialize};

/// 席次の1エントリ（ゲスト名, テーブル）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub guest_name: String,
    pub table: String,
}

impl Assignment {
    pub fn new(guest_name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            guest_name: guest_name.into(),
            table: table.into(),
        }
    }
}

/// JSON上の席次エントリ
///
/// `["Alice Smith", "T1"]` 形式と `{"name": "Alice Smith", "table": "T1"}` 形式の両方を受け付ける
#[derive(Deserialize)]
#[serde(untagged)]
enum ChartEntry {
    Pair(String, String),
    Record {
        #[serde(alias = "guestName")]
        name: String,
        table: String,
    },
}

impl From<ChartEntry> for Assignment {
    fn from(entry: ChartEntry) -> Self {
        match entry {
            ChartEntry::Pair(guest_name, table) => Assignment { guest_name, table },
            ChartEntry::Record { name, table } => Assignment { guest_name: name, table },
        }
    }
}

/// 席次表
///
/// 元データの順序を保持する。ゲスト名の重複は許容。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeatingChart {
    assignments: Vec<Assignment>,
}

impl<'de> Deserialize<'de> for SeatingChart {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<ChartEntry>::deserialize(deserializer)?;
        Ok(Self {
            assignments: entries.into_iter().map(Assignment::from).collect(),
        })
    }
}

impl From<Vec<Assignment>> for SeatingChart {
    fn from(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }
}

impl SeatingChart {
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// テーブル名の一覧（初出順、重複なし）
    pub fn tables(&self) -> Vec<&str> {
        let mut tables: Vec<&str> = Vec::new();
        for assignment in &self.assignments {
            if !tables.contains(&assignment.table.as_str()) {
                tables.push(&assignment.table);
            }
        }
        tables
    }

    pub(crate) fn assignments_mut(&mut self) -> &mut Vec<Assignment> {
        &mut self.assignments
    }
}

impl<'a> IntoIterator for &'a SeatingChart {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

/// イベント情報（新郎新婦・日時・会場・席次表）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub bride: String,
    pub groom: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub seating_chart: SeatingChart,
}

impl EventData {
    /// "Bride & Groom" 形式の表示名
    pub fn couple_title(&self) -> String {
        format!("{} & {}", self.bride, self.groom)
    }
}
