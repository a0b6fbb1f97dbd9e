//! ヘッダーコンポーネント

use leptos::prelude::*;
use vision_tour_common::config::{PAGE_SUBTITLE, PAGE_TITLE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{PAGE_TITLE}</h1>
            <p class="text-muted">{PAGE_SUBTITLE}</p>
        </header>
    }
}
