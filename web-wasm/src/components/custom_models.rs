//! カスタムモデルセクション: 分類と物体検出の図解を切り替える

use leptos::prelude::*;
use vision_tour_common::{ModelKind, ModelTypeDescriptor, Picker, PickerKey, SectionId, VisualKind};
use super::section::Section;

#[component]
pub fn CustomModelsSection() -> impl IntoView {
    let (picker, set_picker) = signal(Picker::<ModelKind>::default());
    let id = SectionId::CustomModels;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <p>
                "When prebuilt models don't know your products or defects, Custom Vision "
                "learns them from a few dozen labeled images."
            </p>

            <div class="picker" role="group">
                {ModelKind::ALL
                    .iter()
                    .copied()
                    .map(|key| {
                        let model = key.descriptor();
                        let is_active = move || picker.get().is_active(key);
                        view! {
                            <button
                                class="picker-option"
                                class:active=is_active
                                aria-pressed=move || is_active().to_string()
                                data-key=key.id()
                                on:click=move |_| set_picker.maybe_update(|p| p.select(key))
                            >
                                <span class="option-icon">{model.icon}</span>
                                <span>{model.name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let model = picker.get().selected().descriptor();
                view! {
                    <div class="detail-panel model-panel" style=format!("border-left-color: {}", model.color)>
                        <h3>{model.icon}" "{model.name}</h3>
                        <p>{model.description}</p>
                        <p class="model-example"><em>{model.example}</em></p>
                        <ModelIllustration model=model />
                    </div>
                }
            }}
        </Section>
    }
}

/// 1枚に1ラベル（分類）か、複数の枠（検出）かの図解
#[component]
fn ModelIllustration(model: &'static ModelTypeDescriptor) -> impl IntoView {
    match model.visual_kind {
        VisualKind::Single => view! {
            <div class="model-illustration single" style=format!("border-color: {}", model.color)>
                <span class="sample-figure">"🍌"</span>
                <span class="model-label" style=format!("background-color: {}", model.color)>
                    "ripe"
                </span>
            </div>
        }
        .into_any(),
        VisualKind::Multiple => view! {
            <div class="model-illustration multiple">
                {["📦", "📦", "📦"]
                    .into_iter()
                    .enumerate()
                    .map(|(i, icon)| {
                        view! {
                            <span
                                class="model-box"
                                style=format!("border-color: {}", model.color)
                            >
                                {icon}
                                <span class="model-label" style=format!("background-color: {}", model.color)>
                                    {if i == 1 { "damaged" } else { "ok" }}
                                </span>
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
