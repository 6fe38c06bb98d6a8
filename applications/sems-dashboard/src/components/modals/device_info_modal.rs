use leptos::*;

use crate::models::{AggregatedConsumptionEntry, DeviceId, DeviceKind};
use crate::state::use_dashboard;

/// Energy statistics for one device from the aggregated feed
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStats {
    pub total_text: String,
    pub daily_average_text: String,
}

impl DeviceStats {
    /// The aggregate covers a week, so the daily average is a seventh of it
    pub fn from_usage(entries: &[AggregatedConsumptionEntry], id: &DeviceId) -> Self {
        let total = entries
            .iter()
            .find(|e| e.device_name == id.as_str())
            .map(|e| e.energy_consumed)
            .unwrap_or(0.0);

        Self {
            total_text: format!("{:.4} kWh", total),
            daily_average_text: format!("{:.4} kWh", total / 7.0),
        }
    }
}

#[component]
pub fn DeviceInfoModal(id: DeviceId) -> impl IntoView {
    let dashboard = use_dashboard();
    let title = format!("{} Information", DeviceKind::resolve(id.as_str()).title(&id));
    let stats = create_memo(move |_| dashboard.usage.with(|entries| DeviceStats::from_usage(entries, &id)));

    view! {
        <div class="info-popup">
            <div class="info-content">
                <div class="info-header">
                    <h3>{title}</h3>
                    <button class="close-modal" aria-label="Close" on:click=move |_| dashboard.close_modal()>
                        "×"
                    </button>
                </div>
                <div class="info-body">
                    <div class="info-group">
                        <h4>"Energy Statistics"</h4>
                        <div class="info-stats">
                            <div class="stat-item">
                                <span>"Total Energy Used:"</span>
                                <span>{move || stats.with(|s| s.total_text.clone())}</span>
                            </div>
                            <div class="stat-item">
                                <span>"Avg. Daily Usage:"</span>
                                <span>{move || stats.with(|s| s.daily_average_text.clone())}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_for_known_device() {
        let entries = vec![AggregatedConsumptionEntry {
            device_name: "tv".to_string(),
            energy_consumed: 7.0,
        }];
        let stats = DeviceStats::from_usage(&entries, &DeviceId::new("tv"));
        assert_eq!(stats.total_text, "7.0000 kWh");
        assert_eq!(stats.daily_average_text, "1.0000 kWh");
    }

    #[test]
    fn test_stats_for_unknown_device() {
        let stats = DeviceStats::from_usage(&[], &DeviceId::new("fridge"));
        assert_eq!(stats.total_text, "0.0000 kWh");
    }
}
