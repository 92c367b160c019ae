//! イベント情報ヘッダー

use leptos::prelude::*;
use seating_common::EventData;

#[component]
pub fn EventHeader(data: EventData) -> impl IntoView {
    let title = data.couple_title();
    let when = [data.date.as_str(), data.time.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <header class="event-header">
            <h1 class="is-size-3">{title}</h1>
            <p class="is-size-5 is-color-secondary">{when}</p>
            <p class="is-size-5 is-color-secondary">{data.location}</p>
        </header>
    }
}
