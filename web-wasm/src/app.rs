//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::event::{fetch_event_data, DATA_URL};
use crate::components::{
    event_header::EventHeader,
    loading::Loading,
    name_search::NameSearch,
};
use seating_common::{LoadStatus, MatchRule, SeatingChartService};

const TITLE_IMAGE_URL: &str = "https://i.ibb.co/QJx1jj0/Seating-Chart-Text.png";

/// メインアプリケーションコンポーネント
///
/// イベントデータを一度だけ取得し、完了後に検索サービスを構築して
/// 名前検索へ明示的に渡す
#[component]
pub fn App() -> impl IntoView {
    let (status, set_status) = signal(LoadStatus::Idle);

    if status.with_untracked(LoadStatus::should_fetch) {
        set_status.update(|s| {
            s.begin();
        });
        spawn_local(async move {
            let result = fetch_event_data(DATA_URL).await;
            match &result {
                Ok(data) => gloo::console::log!(format!(
                    "event data loaded: {} assignments",
                    data.seating_chart.len()
                )),
                Err(message) => gloo::console::error!(format!("event data failed: {}", message)),
            }
            set_status.update(|s| s.resolve(result));
        });
    }

    move || match status.get() {
        LoadStatus::Idle | LoadStatus::Loading => view! {
            <div class="is-center-aligned xs-y-margin-between-2">
                <p class="is-size-4">"Loading..."</p>
                <Loading size="160px" ripple_width="6px" speed="1s" />
            </div>
        }
        .into_any(),
        LoadStatus::Rejected(message) => view! {
            <div class="error">"ERROR: " {message}</div>
        }
        .into_any(),
        LoadStatus::Ready(data) => {
            let service = SeatingChartService::new(data.seating_chart.clone(), MatchRule::default());
            view! {
                <div class="app is-center-aligned xs-y-margin-between-2">
                    <img src=TITLE_IMAGE_URL alt="Seating Chart" />
                    <EventHeader data=data />
                    <div class="content">
                        <NameSearch service=service />
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
