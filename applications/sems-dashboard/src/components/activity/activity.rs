use leptos::*;

use super::energy_chart::EnergyChart;
use super::log_panel::LogPanel;
use super::usage_panel::UsagePanel;

/// Activity page fed by the secondary push events
#[component]
pub fn Activity() -> impl IntoView {
    view! {
        <div class="activity">
            <div class="activity-grid">
                <UsagePanel />
                <LogPanel />
                <EnergyChart />
            </div>
        </div>
    }
}
