//! 物体検出セクション
//!
//! ホバー状態は `DetectionState` の1か所だけに持ち、結果リストと
//! 画像上の検出枠の両方がそれを読む。

use leptos::prelude::*;
use vision_tour_common::catalog::DETECTED_OBJECTS;
use vision_tour_common::{DetectionState, SectionId};
use super::confidence_bar::ConfidenceBar;
use super::section::Section;

#[component]
pub fn ObjectDetectionSection() -> impl IntoView {
    let (state, set_state) = signal(DetectionState::default());
    let is_revealed = move || state.get().is_revealed();
    let id = SectionId::ObjectDetection;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <p>
                "Object detection finds each object in an image and returns a bounding box "
                "with a confidence score. Hover over a result to highlight its box."
            </p>

            <div class="demo-panel">
                <div class="sample-image detection-canvas">
                    <span class="sample-figure">"🧍"</span>
                    <span class="sample-board">"🛹"</span>
                    <Show when=is_revealed>
                        {DETECTED_OBJECTS
                            .iter()
                            .map(|object| {
                                let b = object.bounding_box;
                                view! {
                                    <div
                                        class="detection-overlay"
                                        data-name=object.name
                                        class:highlighted=move || {
                                            state.get().overlay_style(object).is_highlighted()
                                        }
                                        style=move || {
                                            let style = state.get().overlay_style(object);
                                            format!(
                                                "left: {}%; top: {}%; width: {}%; height: {}%; border: 3px {} {}; opacity: {};",
                                                b.x,
                                                b.y,
                                                b.width,
                                                b.height,
                                                style.outline.as_css(),
                                                object.color,
                                                style.opacity,
                                            )
                                        }
                                    >
                                        <span
                                            class="overlay-label"
                                            style=format!("background-color: {}", object.color)
                                        >
                                            {object.name}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Show>
                </div>

                <div class="demo-result">
                    <button
                        class="btn btn-primary"
                        disabled=is_revealed
                        on:click=move |_| set_state.maybe_update(|s| s.reveal())
                    >
                        {move || if is_revealed() { "Objects detected" } else { "Detect objects" }}
                    </button>

                    <Show
                        when=is_revealed
                        fallback=|| view! {
                            <p class="call-to-action text-muted">
                                "Run detection to see what the model finds."
                            </p>
                        }
                    >
                        <ul class="detection-results">
                            {DETECTED_OBJECTS
                                .iter()
                                .map(|object| {
                                    view! {
                                        <li
                                            class="detection-row"
                                            data-name=object.name
                                            class:hovered=move || state.get().hovered() == Some(object.name)
                                            on:mouseenter=move |_| set_state.maybe_update(|s| s.hover(object.name))
                                            on:mouseleave=move |_| set_state.maybe_update(|s| s.clear_hover())
                                        >
                                            <ConfidenceBar
                                                label=object.name
                                                score=object.confidence_score
                                                color=object.color
                                            />
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            </div>
        </Section>
    }
}
