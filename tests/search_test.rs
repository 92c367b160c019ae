//! 名前検索テスト
//!
//! サンプルデータに対する検索結果と表示状態を検証

use seating_common::{
    parse_event_data, Assignment, MatchRule, SearchOutcome, SearchState, SeatingChartService,
};
use wedding_seating::report::format_outcome;

fn service(rule: MatchRule) -> SeatingChartService {
    let json = include_str!("../data/wedding.json");
    let data = parse_event_data(json).expect("パース失敗");
    SeatingChartService::new(data.seating_chart, rule)
}

#[test]
fn test_search_case_insensitive() {
    let results = service(MatchRule::Contains).get_table("alice");
    assert_eq!(
        results,
        vec![
            Assignment::new("Alice Smith", "Table 1"),
            Assignment::new("alice Brown", "Table 3"),
        ]
    );
}

#[test]
fn test_search_padded_query() {
    let results = service(MatchRule::Contains).get_table(" Bob ");
    assert_eq!(results, vec![Assignment::new("Bob Jones", "Table 2")]);
}

#[test]
fn test_search_duplicate_names_keep_order() {
    let tables: Vec<String> = service(MatchRule::Exact)
        .get_table("sam lee")
        .into_iter()
        .map(|a| a.table)
        .collect();
    assert_eq!(tables, vec!["Table 4", "Table 5"]);
}

#[test]
fn test_search_word_rule_last_name() {
    let results = service(MatchRule::Word).get_table("riv");
    assert_eq!(results, vec![Assignment::new("Carlos Rivera", "Table 2")]);
    assert!(service(MatchRule::Word).get_table("ivera").is_empty());
}

#[test]
fn test_no_results_display() {
    let service = service(MatchRule::Contains);
    let mut state = SearchState::new("Zephyr");
    state.submit(&service);

    assert_eq!(state.outcome(), SearchOutcome::NoResults);
    assert_eq!(format_outcome(&state), vec!["No results!".to_string()]);
}

#[test]
fn test_empty_query_is_a_search() {
    let service = service(MatchRule::Contains);
    let untouched = SearchState::new("");
    let mut searched = SearchState::new("");
    searched.submit(&service);

    assert_eq!(untouched.outcome(), SearchOutcome::NotSearched);
    assert_eq!(searched.outcome(), SearchOutcome::NoResults);
}
