//! 読み込み中インジケーター

use leptos::prelude::*;

#[component]
pub fn Loading(
    #[prop(into)] size: String,
    #[prop(into)] ripple_width: String,
    #[prop(into)] speed: String,
) -> impl IntoView {
    let style = format!(
        "--loading-size: {}; --ripple-width: {}; --ripple-speed: {};",
        size, ripple_width, speed
    );

    view! {
        <div class="loading" style=style>
            <div class="ripple" />
            <div class="ripple delayed" />
        </div>
    }
}
