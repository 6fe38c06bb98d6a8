use leptos::*;

use crate::components::devices::render_card;
use crate::models::Container;
use crate::state::use_dashboard;

#[component]
pub fn DevicesTable() -> impl IntoView {
    let dashboard = use_dashboard();
    let rows = move || dashboard.cards.with(|registry| registry.cards_in(Container::DevicesTable));

    view! {
        <section class="data-section devices-section">
            <h2>"Other Devices"</h2>
            <table class="devices-table">
                <thead>
                    <tr>
                        <th>"Device"</th>
                        <th>"Status"</th>
                        <th>"Consumption"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=rows key=|card| card.id.clone() children=render_card />
                    <Show when=move || !dashboard.has_loaded()>
                        <tr>
                            <td colspan="4" class="loading">"Loading..."</td>
                        </tr>
                    </Show>
                </tbody>
            </table>
        </section>
    }
}
