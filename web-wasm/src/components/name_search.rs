//! 名前検索コンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use crate::components::escort_card::EscortCard;
use crate::location;
use seating_common::{
    SearchOutcome, SearchState, SeatingChartService, NO_RESULTS_MESSAGE, SEARCH_PLACEHOLDER,
};

#[component]
pub fn NameSearch(service: SeatingChartService) -> impl IntoView {
    // URLの q から入力を復元し、空でなければ一度検索する
    let mut initial = SearchState::new(location::current_query().unwrap_or_default());
    if !initial.name.is_empty() {
        initial.submit(&service);
    }
    let (state, set_state) = signal(initial);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = state.with_untracked(|s| s.name.clone());
        location::replace_query(&name);
        set_state.update(|s| s.submit(&service));
    };

    let results = move || {
        state.with(|s| match s.outcome() {
            SearchOutcome::NotSearched => view! { <div class="results" /> }.into_any(),
            SearchOutcome::NoResults => view! {
                <div class="results">
                    <p class="is-size-5">{NO_RESULTS_MESSAGE}</p>
                </div>
            }
            .into_any(),
            SearchOutcome::Found(tables) => {
                let cards = tables
                    .iter()
                    .map(|a| view! { <EscortCard name=a.guest_name.clone() table=a.table.clone() /> })
                    .collect_view();
                view! {
                    <div class="results flex col xs-x-center xs-y-margin-between-5">
                        {cards}
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <div class="name-search xs-y-margin-between-10">
            <form
                class="flex col xs-x-center xs-y-margin-between-4"
                on:submit=on_submit
            >
                <input
                    class="name-input is-size-4 is-color-primary is-center-aligned"
                    type="text"
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=move || state.with(|s| s.name.clone())
                    on:input=move |ev| {
                        set_state.update(|s| s.name = event_target_value(&ev));
                    }
                />
                <button type="submit" class="name-submit is-size-5 xs-x-self-center">"🔍"</button>
            </form>
            <hr />
            {results}
        </div>
    }
}
