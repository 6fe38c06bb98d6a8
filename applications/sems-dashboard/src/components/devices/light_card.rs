use leptos::*;

use super::card_model::CardModel;
use super::light_controls::LightControls;
use crate::state::{use_dashboard, Modal, RenderedCard};

/// Card for any light; mounted once per device and patched through its signals
#[component]
pub fn LightCard(card: RenderedCard) -> impl IntoView {
    let dashboard = use_dashboard();
    let RenderedCard {
        id,
        kind,
        state,
        pending,
    } = card.clone();

    let model = create_memo(move |_| state.with(|s| CardModel::build(kind, s)));
    let title = kind.title(&id);

    let settings_id = id.clone();
    let open_settings = move |_| dashboard.open_modal(Modal::Settings(settings_id.clone()));

    let toggle_id = id.clone();
    let toggle = move |_| dashboard.toggle(&toggle_id);

    view! {
        <div class=kind.css_class() id=format!("card-{}", id) data-device=id.to_string()>
            <div class="device-header">
                <span class=move || model.with(|m| m.indicator_class)></span>
                <h3>{title}</h3>
                <button class="settings-btn" aria-label="Device settings" on:click=open_settings>
                    <i class="fas fa-gear"></i>
                </button>
            </div>
            <div class="device-status">
                "Status: "
                <span class="status-text">{move || model.with(|m| m.status_text)}</span>
            </div>
            <div class="device-consumption">
                "Consumption: "
                <span class="consumption-value">
                    {move || model.with(|m| m.consumption_text.clone())}
                </span>
            </div>
            <LightControls card=card model=model />
            <div class="device-actions">
                <span class="toggle-spinner" class:active=move || pending.get()></span>
                <button
                    class="toggle-btn"
                    disabled=move || pending.get()
                    on:click=toggle
                >
                    {move || model.with(|m| m.toggle_label)}
                </button>
            </div>
        </div>
    }
}
