//! サービス概要セクション: サービスピッカーとユースケース一覧

use leptos::prelude::*;
use vision_tour_common::catalog::USE_CASES;
use vision_tour_common::{Picker, PickerKey, SectionId, ServiceKey};
use super::section::Section;

#[component]
pub fn AzureVisionOverviewSection() -> impl IntoView {
    let (picker, set_picker) = signal(Picker::<ServiceKey>::default());
    let id = SectionId::Overview;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <div class="picker" role="group">
                {ServiceKey::ALL
                    .iter()
                    .copied()
                    .map(|key| {
                        let service = key.descriptor();
                        let is_active = move || picker.get().is_active(key);
                        view! {
                            <button
                                class="picker-option"
                                class:active=is_active
                                aria-pressed=move || is_active().to_string()
                                data-key=key.id()
                                on:click=move |_| set_picker.maybe_update(|p| p.select(key))
                            >
                                <span class="option-icon">{service.icon}</span>
                                <span>{service.name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let service = picker.get().selected().descriptor();
                view! {
                    <div class="detail-panel" style=format!("border-left-color: {}", service.color)>
                        <h3>{service.icon}" "{service.name}</h3>
                        <p>{service.description}</p>
                        <ul class="capability-list">
                            {service
                                .capabilities
                                .iter()
                                .map(|capability| view! { <li>{*capability}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                }
            }}

            <h3>"What can you build?"</h3>
            <div class="use-case-grid">
                {USE_CASES
                    .iter()
                    .map(|use_case| {
                        view! {
                            <div class="use-case-card">
                                <div class="use-case-icon">{use_case.icon}</div>
                                <h4>{use_case.name}</h4>
                                <p>{use_case.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
