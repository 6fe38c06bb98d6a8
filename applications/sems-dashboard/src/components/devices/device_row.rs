use leptos::*;

use super::card_model::CardModel;
use crate::models::{device_icon, usage_metrics};
use crate::state::{use_dashboard, Modal, RenderedCard};

/// Devices table row for a non-light device
#[component]
pub fn DeviceRow(card: RenderedCard) -> impl IntoView {
    let dashboard = use_dashboard();
    let RenderedCard {
        id,
        kind,
        state,
        pending,
    } = card;

    let model = create_memo(move |_| state.with(|s| CardModel::build(kind, s)));

    let metrics_id = id.clone();
    let metrics = create_memo(move |_| {
        dashboard
            .usage
            .with(|entries| usage_metrics(entries, metrics_id.as_str()))
    });

    let settings_id = id.clone();
    let info_id = id.clone();
    let toggle_id = id.clone();

    view! {
        <tr class=kind.css_class() id=format!("card-{}", id) data-device=id.to_string()>
            <td class="device-name">
                <i class=format!("fas {}", device_icon(id.as_str()))></i>
                " "
                {kind.title(&id)}
            </td>
            <td class="device-status">
                <span class=move || model.with(|m| m.indicator_class)></span>
                <span class="status-text">{move || model.with(|m| m.status_text)}</span>
            </td>
            <td class="device-consumption">
                <span class="consumption-value">
                    {move || model.with(|m| m.consumption_text.clone())}
                </span>
                <div class="usage-metrics">
                    <span class="usage-percentage">
                        {move || metrics.with(|m| format!("{}% of total", m.percentage))}
                    </span>
                    <span class="usage-rank">{move || metrics.with(|m| m.rank_label)}</span>
                    <span class=move || metrics.with(|m| format!("usage-trend {}", m.trend.as_str()))>
                        {move || metrics.with(|m| m.trend.arrow())}
                    </span>
                </div>
            </td>
            <td class="device-actions">
                <button
                    class="settings-btn"
                    aria-label="Device settings"
                    on:click=move |_| dashboard.open_modal(Modal::Settings(settings_id.clone()))
                >
                    <i class="fas fa-gear"></i>
                </button>
                <span class="toggle-spinner" class:active=move || pending.get()></span>
                <button
                    class="toggle-btn"
                    disabled=move || pending.get()
                    on:click=move |_| dashboard.toggle(&toggle_id)
                >
                    {move || model.with(|m| m.toggle_label)}
                </button>
                <button
                    class="info-btn"
                    aria-label="Device info"
                    on:click=move |_| dashboard.open_modal(Modal::DeviceInfo(info_id.clone()))
                >
                    <i class="fas fa-circle-info"></i>
                </button>
            </td>
        </tr>
    }
}
