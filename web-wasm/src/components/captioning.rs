//! 画像キャプションセクション

use leptos::prelude::*;
use vision_tour_common::catalog::IMAGE_CAPTION;
use vision_tour_common::{Reveal, SectionId};
use super::section::Section;

#[component]
pub fn ImageCaptioningSection() -> impl IntoView {
    let (reveal, set_reveal) = signal(Reveal::default());
    let is_revealed = move || reveal.get().is_revealed();
    let id = SectionId::Captioning;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <p>"Captioning describes a whole image in one natural-language sentence."</p>

            <div class="demo-panel">
                <div class="sample-image" aria-label="Sample photo of a skateboarder">
                    <span class="sample-figure">"🛹"</span>
                    <span class="sample-backdrop">"🏙️"</span>
                </div>

                <div class="demo-result">
                    <button
                        class="btn btn-primary"
                        disabled=is_revealed
                        on:click=move |_| set_reveal.maybe_update(|r| r.trigger())
                    >
                        {move || if is_revealed() { "Caption generated" } else { "Generate caption" }}
                    </button>

                    <Show
                        when=is_revealed
                        fallback=|| view! {
                            <p class="call-to-action text-muted">
                                "Click the button to ask the model to describe this image."
                            </p>
                        }
                    >
                        <blockquote class="caption-result">{IMAGE_CAPTION}</blockquote>
                    </Show>
                </div>
            </div>
        </Section>
    }
}
