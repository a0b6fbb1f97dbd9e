//! 機能比較表セクション

use leptos::prelude::*;
use vision_tour_common::catalog::CAPABILITIES;
use vision_tour_common::SectionId;
use super::section::Section;

#[component]
pub fn CapabilitiesComparisonSection() -> impl IntoView {
    let id = SectionId::CapabilitiesComparison;

    view! {
        <Section title=id.title() accent_color=id.accent_color() anchor=id.anchor()>
            <table class="capability-table">
                <thead>
                    <tr>
                        <th>"Capability"</th>
                        <th>"What it does"</th>
                        <th>"Customizable"</th>
                    </tr>
                </thead>
                <tbody>
                    {CAPABILITIES
                        .iter()
                        .map(|row| {
                            view! {
                                <tr class="capability-row" data-name=row.name>
                                    <td>{row.icon}" "{row.name}</td>
                                    <td>{row.description}</td>
                                    <td
                                        class="customizable"
                                        class:checked=row.is_customizable
                                        aria-checked=row.is_customizable.to_string()
                                    >
                                        {if row.is_customizable { "✅" } else { "—" }}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </Section>
    }
}
