//! 名前検索ページの状態
//!
//! 「まだ検索していない」と「検索したが0件」を `initial` フラグで区別する。

use crate::lookup::SeatingChartService;
use crate::types::Assignment;

pub const NO_RESULTS_MESSAGE: &str = "No results!";
pub const SEARCH_PLACEHOLDER: &str = "FIRST OR LAST NAME";

/// 検索ページの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// 入力欄の文字列（未トリム）
    pub name: String,
    /// 一度も検索していない
    pub initial: bool,
    pub tables: Vec<Assignment>,
}

/// 結果表示の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    NotSearched,
    NoResults,
    Found(&'a [Assignment]),
}

impl SearchState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: true,
            tables: Vec::new(),
        }
    }

    /// 現在の入力で検索を実行
    pub fn submit(&mut self, service: &SeatingChartService) {
        self.tables = service.get_table(&self.name);
        self.initial = false;
    }

    /// 入力を差し替えて検索（URLの q から復元する場合など）
    pub fn search_for(&mut self, name: impl Into<String>, service: &SeatingChartService) {
        self.name = name.into();
        self.submit(service);
    }

    pub fn outcome(&self) -> SearchOutcome<'_> {
        if self.initial {
            SearchOutcome::NotSearched
        } else if self.tables.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(&self.tables)
        }
    }
}
