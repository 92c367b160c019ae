//! ブラウザ上でのURL同期テスト

use seating_wasm::location::{current_query, replace_query};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_replace_query_updates_location() {
    replace_query("Alice Smith");
    assert_eq!(current_query().as_deref(), Some("Alice Smith"));

    replace_query("");
    assert_eq!(current_query().as_deref(), Some(""));
}
