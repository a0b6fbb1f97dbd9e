//! 導入セクション: 業界別の活用例ピッカー

use leptos::prelude::*;
use vision_tour_common::{IndustryKey, Picker, PickerKey, SectionId};
use super::section::Section;

#[component]
pub fn IntroSection() -> impl IntoView {
    let (picker, set_picker) = signal(Picker::<IndustryKey>::default());
    let id = SectionId::Intro;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <p>
                "Computer vision lets software understand images the way people do. "
                "Pick an industry to see how it is used today."
            </p>

            <div class="picker" role="group">
                {IndustryKey::ALL
                    .iter()
                    .copied()
                    .map(|key| {
                        let example = key.example();
                        let is_active = move || picker.get().is_active(key);
                        view! {
                            <button
                                class="picker-option"
                                class:active=is_active
                                aria-pressed=move || is_active().to_string()
                                data-key=key.id()
                                style=move || {
                                    if is_active() {
                                        format!("border-color: {0}; color: {0}", example.color)
                                    } else {
                                        String::new()
                                    }
                                }
                                on:click=move |_| set_picker.maybe_update(|p| p.select(key))
                            >
                                <span class="option-icon">{example.icon}</span>
                                <span>{example.name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let example = picker.get().selected().example();
                view! {
                    <div class="detail-panel" style=format!("border-left-color: {}", example.color)>
                        <h3>{example.icon}" "{example.title}</h3>
                        <p>{example.description}</p>
                        <p class="benefit">
                            <strong>"Benefit: "</strong>
                            <span class="benefit-text">{example.benefit}</span>
                        </p>
                    </div>
                }
            }}
        </Section>
    }
}
