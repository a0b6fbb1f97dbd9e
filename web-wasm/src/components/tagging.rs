//! タグ付けセクション

use leptos::prelude::*;
use vision_tour_common::catalog::TAGS;
use vision_tour_common::{Reveal, SectionId};
use super::confidence_bar::ConfidenceBar;
use super::section::Section;

#[component]
pub fn TaggingSection() -> impl IntoView {
    let (reveal, set_reveal) = signal(Reveal::default());
    let is_revealed = move || reveal.get().is_revealed();
    let id = SectionId::Tagging;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <p>
                "Tagging returns keywords for everything the model recognizes: "
                "objects, scenery and actions, each with a confidence score."
            </p>

            <button
                class="btn btn-primary"
                disabled=is_revealed
                on:click=move |_| set_reveal.maybe_update(|r| r.trigger())
            >
                {move || if is_revealed() { "Tags generated" } else { "Generate tags" }}
            </button>

            <Show
                when=is_revealed
                fallback=|| view! {
                    <p class="call-to-action text-muted">"No tags yet."</p>
                }
            >
                <div class="tag-list">
                    {TAGS
                        .iter()
                        .map(|tag| {
                            view! {
                                <ConfidenceBar
                                    label=tag.name
                                    score=tag.confidence_score
                                    color=id.accent_color()
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </Section>
    }
}
