//! 信頼度バーコンポーネント

use leptos::prelude::*;
use vision_tour_common::catalog::confidence_fill;

#[component]
pub fn ConfidenceBar(
    label: &'static str,
    score: f32,
    #[prop(default = "#0078d4")] color: &'static str,
) -> impl IntoView {
    let fill = confidence_fill(score);

    view! {
        <div class="confidence-row">
            <span class="confidence-label">{label}</span>
            <div class="confidence-bar">
                <div
                    class="confidence-fill"
                    style=format!("width: {}%; background-color: {}", fill, color)
                />
            </div>
            <span class="confidence-text">{format!("{:.1}%", score)}</span>
        </div>
    }
}
