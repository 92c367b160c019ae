//! 席次検索（名前 → テーブル）
//!
//! 照合ルールは `MatchRule::matches` の一箇所に集約する。
//! 既定は大文字小文字を区別しない部分一致。

use crate::types::{Assignment, SeatingChart};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 照合ルール
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// 部分一致（大文字小文字を区別しない）
    #[default]
    Contains,
    /// 完全一致（大文字小文字を区別しない）
    Exact,
    /// 単語の前方一致（姓・名どちらでも可）
    Word,
}

impl MatchRule {
    /// ゲスト名がクエリに一致するか
    ///
    /// `query` は正規化済み（前後空白なし・空でない）であること
    pub fn matches(&self, guest_name: &str, query: &str) -> bool {
        let guest = guest_name.to_lowercase();
        let query = query.to_lowercase();
        match self {
            MatchRule::Contains => guest.contains(&query),
            MatchRule::Exact => guest.trim() == query,
            MatchRule::Word => {
                let query_words: Vec<&str> = query.split_whitespace().collect();
                if query_words.is_empty() {
                    return false;
                }
                let guest_words: Vec<&str> = guest.split_whitespace().collect();
                // 複数語のクエリは連続する単語列として照合
                guest_words.windows(query_words.len()).any(|window| {
                    let last = query_words.len() - 1;
                    window.iter().zip(&query_words).enumerate().all(|(i, (g, q))| {
                        if i == last { g.starts_with(q) } else { g == q }
                    })
                })
            }
        }
    }
}

impl std::str::FromStr for MatchRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contains" | "substring" => Ok(MatchRule::Contains),
            "exact" => Ok(MatchRule::Exact),
            "word" | "prefix" => Ok(MatchRule::Word),
            _ => Err(format!("Unknown match rule: {}. Use contains, exact, or word", s)),
        }
    }
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchRule::Contains => write!(f, "contains"),
            MatchRule::Exact => write!(f, "exact"),
            MatchRule::Word => write!(f, "word"),
        }
    }
}

/// クエリの前後空白を除去
pub fn normalize_query(query: &str) -> &str {
    query.trim()
}

/// クエリに一致する席次を元の順序で返す
///
/// 空クエリ（空白のみを含む）は何にも一致しない。
///
/// # Examples
/// ```
/// use seating_common::{find, Assignment, MatchRule};
///
/// let list = vec![
///     Assignment::new("Alice Smith", "T1"),
///     Assignment::new("Bob Jones", "T2"),
/// ];
/// let found = find(" bob ", &list, MatchRule::Contains);
/// assert_eq!(found, vec![Assignment::new("Bob Jones", "T2")]);
/// ```
pub fn find(query: &str, assignments: &[Assignment], rule: MatchRule) -> Vec<Assignment> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    assignments
        .iter()
        .filter(|a| rule.matches(&a.guest_name, query))
        .cloned()
        .collect()
}

/// 席次検索サービス
///
/// 読み込み完了時に一度だけ構築し、利用側へ明示的に渡す。
/// 席次表は共有され、clone は安価。
#[derive(Debug, Clone)]
pub struct SeatingChartService {
    chart: Arc<SeatingChart>,
    rule: MatchRule,
}

impl SeatingChartService {
    pub fn new(chart: SeatingChart, rule: MatchRule) -> Self {
        Self {
            chart: Arc::new(chart),
            rule,
        }
    }

    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    pub fn chart(&self) -> &SeatingChart {
        &self.chart
    }

    /// 名前からテーブルを検索
    pub fn get_table(&self, query: &str) -> Vec<Assignment> {
        find(query, self.chart.assignments(), self.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Assignment> {
        vec![
            Assignment::new("Alice Smith", "T1"),
            Assignment::new("Bob Jones", "T2"),
            Assignment::new("alice Brown", "T3"),
        ]
    }

    #[test]
    fn test_find_case_insensitive() {
        let found = find("alice", &sample(), MatchRule::Contains);
        assert_eq!(
            found,
            vec![
                Assignment::new("Alice Smith", "T1"),
                Assignment::new("alice Brown", "T3"),
            ]
        );
    }

    #[test]
    fn test_find_no_match() {
        assert!(find("Zephyr", &sample(), MatchRule::Contains).is_empty());
    }

    #[test]
    fn test_find_trims_query() {
        let found = find(" Bob ", &sample(), MatchRule::Contains);
        assert_eq!(found, vec![Assignment::new("Bob Jones", "T2")]);
    }

    #[test]
    fn test_find_empty_query_matches_nothing() {
        assert!(find("", &sample(), MatchRule::Contains).is_empty());
        assert!(find("   ", &sample(), MatchRule::Word).is_empty());
    }

    #[test]
    fn test_find_returns_subset_in_input_order() {
        let list = sample();
        for query in ["a", "o", "s", "Jones", "x"] {
            let found = find(query, &list, MatchRule::Contains);
            let positions: Vec<usize> = found
                .iter()
                .map(|f| list.iter().position(|a| a == f).expect("入力にない結果"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_find_idempotent() {
        let list = sample();
        assert_eq!(
            find("alice", &list, MatchRule::Contains),
            find("alice", &list, MatchRule::Contains)
        );
    }

    #[test]
    fn test_find_keeps_duplicate_names() {
        let list = vec![
            Assignment::new("Sam Lee", "T4"),
            Assignment::new("Sam Lee", "T9"),
        ];
        assert_eq!(find("sam lee", &list, MatchRule::Exact).len(), 2);
    }

    #[test]
    fn test_exact_rule() {
        assert!(MatchRule::Exact.matches("Bob Jones", "bob jones"));
        assert!(!MatchRule::Exact.matches("Bob Jones", "bob"));
    }

    #[test]
    fn test_word_rule() {
        assert!(MatchRule::Word.matches("Alice Smith", "smi"));
        assert!(MatchRule::Word.matches("Alice Smith", "alice sm"));
        assert!(!MatchRule::Word.matches("Alice Smith", "lice"));
        assert!(!MatchRule::Word.matches("Alice Smith", "smith alice"));
    }

    #[test]
    fn test_match_rule_from_str() {
        assert_eq!("contains".parse::<MatchRule>(), Ok(MatchRule::Contains));
        assert_eq!("EXACT".parse::<MatchRule>(), Ok(MatchRule::Exact));
        assert_eq!("prefix".parse::<MatchRule>(), Ok(MatchRule::Word));
        assert!("fuzzy".parse::<MatchRule>().is_err());
    }

    #[test]
    fn test_match_rule_display_parses_back() {
        for rule in [MatchRule::Contains, MatchRule::Exact, MatchRule::Word] {
            assert_eq!(rule.to_string().parse::<MatchRule>(), Ok(rule));
        }
    }

    #[test]
    fn test_service_get_table() {
        let service = SeatingChartService::new(SeatingChart::from(sample()), MatchRule::default());
        let shared = service.clone();
        assert_eq!(shared.rule(), MatchRule::Contains);

        assert_eq!(service.get_table("jones"), vec![Assignment::new("Bob Jones", "T2")]);
        assert_eq!(shared.get_table("ALICE").len(), 2);
        assert_eq!(service.chart().len(), 3);
    }
}
