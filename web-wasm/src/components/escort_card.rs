//! エスコートカード（ゲスト名とテーブル）

use leptos::prelude::*;

#[component]
pub fn EscortCard(name: String, table: String) -> impl IntoView {
    view! {
        <div class="escort-card">
            <p class="escort-name is-size-4 is-color-primary">{name}</p>
            <p class="escort-table is-size-5">{table}</p>
        </div>
    }
}
