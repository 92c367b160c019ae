//! URLの `q` パラメータと検索文字列の同期

use seating_common::{query_from_search, search_with_query};
use wasm_bindgen::JsValue;

/// 現在のURLから検索文字列を取得
pub fn current_query() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query_from_search(&search)
}

/// URLの `q` を置き換える（履歴は追加しない）
pub fn replace_query(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(e) => {
            gloo::console::warn!("history unavailable:", e);
            return;
        }
    };

    let url = search_with_query(name);
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
        gloo::console::warn!("replaceState failed:", e);
    }
}
