//! Wedding Seating Common Library
//!
//! CLIとWeb(WASM)で共有される型・席次検索ロジック

pub mod types;
pub mod error;
pub mod parser;
pub mod lookup;
pub mod search;
pub mod status;
pub mod query_param;

pub use types::{Assignment, EventData, SeatingChart};
pub use error::{Error, Result};
pub use parser::{parse_event_data, parse_seating_chart};
pub use lookup::{find, normalize_query, MatchRule, SeatingChartService};
pub use search::{SearchOutcome, SearchState, NO_RESULTS_MESSAGE, SEARCH_PLACEHOLDER};
pub use status::LoadStatus;
pub use query_param::{query_from_search, search_with_query, share_link, QUERY_PARAM};
