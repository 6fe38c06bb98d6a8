use leptos::*;

use crate::components::devices::render_card;
use crate::models::Container;
use crate::state::use_dashboard;

/// Light cards keyed by device id; cards mount once and are patched in place
#[component]
pub fn LightsGrid() -> impl IntoView {
    let dashboard = use_dashboard();
    let cards = move || dashboard.cards.with(|registry| registry.cards_in(Container::LightsGrid));

    view! {
        <section class="data-section lights-section">
            <h2>"Lights"</h2>
            <div class="lights-grid">
                <For each=cards key=|card| card.id.clone() children=render_card />
                <Show when=move || !dashboard.has_loaded()>
                    <p class="loading">"Loading..."</p>
                </Show>
            </div>
        </section>
    }
}
