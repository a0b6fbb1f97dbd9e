//! OCRセクション
//!
//! 開始から `OCR_PROCESSING_DELAY` 後に抽出テキストを表示する。
//! 遅延中にコンポーネントが破棄された場合はタイマーを解除し、
//! 解除が間に合わなくても破棄済みのシグナルには書き込まない。

use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use vision_tour_common::catalog::OCR_TEXT_LINES;
use vision_tour_common::config::OCR_PROCESSING_DELAY;
use vision_tour_common::{OcrCapture, SectionId};
use super::section::Section;

#[component]
pub fn OcrSection() -> impl IntoView {
    let (capture, set_capture) = signal(OcrCapture::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let id = SectionId::Ocr;

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let on_start = move |_: MouseEvent| {
        let started = set_capture.try_update(|c| c.trigger()).unwrap_or(false);
        if !started {
            return;
        }
        let timer = set_timeout_with_handle(
            move || {
                if set_capture.try_update(|c| c.complete()).is_none() {
                    log::debug!("ocr: component disposed before completion");
                }
            },
            OCR_PROCESSING_DELAY,
        );
        match timer {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => log::error!("ocr: failed to schedule completion: {:?}", err),
        }
    };

    let is_processing = move || capture.get().is_processing();
    let is_revealed = move || capture.get().is_revealed();

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <p>
                "OCR reads printed and handwritten text from photos and scanned documents, "
                "line by line."
            </p>

            <div class="demo-panel">
                <div class="sample-image receipt" aria-label="Sample photo of a coffee shop receipt">
                    <span class="sample-figure">"🧾"</span>
                </div>

                <div class="demo-result">
                    <button
                        class="btn btn-primary"
                        disabled=move || capture.get().control_disabled()
                        aria-busy=move || is_processing().to_string()
                        on:click=on_start
                    >
                        {move || {
                            if is_processing() {
                                "Processing..."
                            } else if is_revealed() {
                                "Text extracted"
                            } else {
                                "Extract text"
                            }
                        }}
                    </button>

                    <Show when=is_processing>
                        <div class="processing-indicator">
                            <span class="spinner" />
                            "Reading text from the image..."
                        </div>
                    </Show>

                    <Show
                        when=is_revealed
                        fallback=move || view! {
                            <Show when=move || !is_processing()>
                                <p class="call-to-action text-muted">
                                    "Click the button to extract the text."
                                </p>
                            </Show>
                        }
                    >
                        <ol class="ocr-lines">
                            {OCR_TEXT_LINES
                                .iter()
                                .map(|line| view! { <li class="ocr-line"><code>{*line}</code></li> })
                                .collect_view()}
                        </ol>
                    </Show>
                </div>
            </div>
        </Section>
    }
}
