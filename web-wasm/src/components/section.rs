//! セクション枠コンポーネント
//!
//! 色付きの見出しバーと本文領域を持つカード。全セクションで共通。

use leptos::prelude::*;
use vision_tour_common::config::DEFAULT_ACCENT_COLOR;

#[component]
pub fn Section(
    #[prop(into)] title: String,
    #[prop(default = DEFAULT_ACCENT_COLOR)] accent_color: &'static str,
    /// DOMのid属性
    #[prop(optional)] anchor: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="tour-section"
            id=anchor
            style=format!("border-color: {}", accent_color)
        >
            <div class="section-header" style=format!("background-color: {}", accent_color)>
                <h2>{title}</h2>
            </div>
            <div class="section-content">
                {children()}
            </div>
        </section>
    }
}
