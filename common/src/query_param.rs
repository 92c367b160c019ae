//! URLクエリパラメータ `q` の読み書き
//!
//! 検索文字列をURLに反映し、ページ状態を共有・ブックマーク可能にする

use crate::error::Result;
use url::form_urlencoded;
use url::Url;

pub const QUERY_PARAM: &str = "q";

/// location.search 形式の文字列から `q` を取り出す
///
/// # Examples
/// ```
/// use seating_common::query_from_search;
///
/// assert_eq!(query_from_search("?q=Bob+Jones").as_deref(), Some("Bob Jones"));
/// assert_eq!(query_from_search(""), None);
/// ```
pub fn query_from_search(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(search.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// `?q=...` を生成（既存のパラメータは置き換える）
pub fn search_with_query(name: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair(QUERY_PARAM, name)
        .finish();
    format!("?{}", encoded)
}

/// ページURLに `q` を付けた共有リンクを生成
///
/// `q` 以外のパラメータは保持する
pub fn share_link(base_url: &str, name: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != QUERY_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(QUERY_PARAM, name);
    }
    Ok(url.to_string())
}
