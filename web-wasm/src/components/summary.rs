//! まとめセクション

use leptos::prelude::*;
use vision_tour_common::catalog::{SUMMARY_CLOSING, SUMMARY_POINTS};
use vision_tour_common::SectionId;
use super::section::Section;

#[component]
pub fn SummarySection() -> impl IntoView {
    let id = SectionId::Summary;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <div class="summary-grid">
                {SUMMARY_POINTS
                    .iter()
                    .map(|point| {
                        view! {
                            <div class="summary-card">
                                <div class="summary-icon">{point.icon}</div>
                                <h4>{point.title}</h4>
                                <p>{point.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="summary-closing">{SUMMARY_CLOSING}</p>
        </Section>
    }
}
