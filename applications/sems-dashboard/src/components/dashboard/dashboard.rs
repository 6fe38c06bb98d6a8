use leptos::*;

use super::battery_section::BatterySection;
use super::devices_table::DevicesTable;
use super::lights_grid::LightsGrid;
use super::solar_section::SolarSection;
use crate::format::format_data_timestamp;
use crate::state::{use_dashboard, FeedStatus};

/// Dashboard page: the shell is built once and only swapped out for an
/// error message while the latest snapshot is unusable
#[component]
pub fn Dashboard() -> impl IntoView {
    let dashboard = use_dashboard();

    let failure = create_memo(move |_| {
        dashboard.status.with(|status| match status {
            FeedStatus::Failed(message) => Some(message.clone()),
            _ => None,
        })
    });

    view! {
        <div class="dashboard">
            <DashboardHeader />
            {move || match failure.get() {
                Some(message) => view! {
                    <div class="error-banner">{format!("Error: {}", message)}</div>
                }
                .into_view(),
                None => view! {
                    <div class="dashboard-grid">
                        <BatterySection />
                        <SolarSection />
                        <LightsGrid />
                        <DevicesTable />
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    let dashboard = use_dashboard();

    let timestamp = move || {
        dashboard.latest.with(|latest| {
            format_data_timestamp(latest.as_ref().map(|s| s.timestamp.as_str()).unwrap_or(""))
        })
    };
    let loading = move || dashboard.status.with(|s| *s == FeedStatus::Loading);

    view! {
        <div class="dashboard-header">
            <span class="data-timestamp">{timestamp}</span>
            <Show when=loading>
                <span class="loading-indicator">"Loading..."</span>
            </Show>
            <button class="refresh-button" on:click=move |_| dashboard.refresh()>
                "Refresh"
            </button>
        </div>
    }
}
