use leptos::*;

use crate::state::{use_dashboard, use_safe_mode};

pub const GAUGE_BARS: usize = 10;

/// Battery gauge derived from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryGauge {
    /// 0-100 share of the configured capacity
    pub percentage: f64,
    pub filled_bars: usize,
    pub charging: bool,
    pub band: &'static str,
}

impl BatteryGauge {
    pub fn build(battery_level: f64, solar_output: f64, capacity: f64) -> Self {
        let percentage = if capacity > 0.0 && battery_level.is_finite() {
            (battery_level / capacity * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let band = if percentage < 20.0 {
            "low"
        } else if percentage < 50.0 {
            "medium"
        } else {
            "high"
        };

        Self {
            percentage,
            filled_bars: (percentage / 100.0 * GAUGE_BARS as f64).round() as usize,
            charging: solar_output > 0.0,
            band,
        }
    }

    pub fn headline(&self) -> String {
        format!("{}%", self.percentage.round())
    }
}

/// Battery section, rebuilt from scratch on every snapshot
#[component]
pub fn BatterySection() -> impl IntoView {
    let dashboard = use_dashboard();
    let safe_mode = use_safe_mode();
    let capacity = dashboard.config.with_value(|c| c.battery_capacity);

    let gauge = move || {
        dashboard.latest.with(|latest| {
            latest
                .as_ref()
                .map(|s| BatteryGauge::build(s.battery_level, s.solar_output, capacity))
        })
    };

    view! {
        <section class="data-section battery-section">
            <div class="battery-header">
                <h2>
                    "Battery Level"
                    <Show when=move || safe_mode.enabled.get()>
                        <span
                            id="safe-mode-indicator"
                            title="Safe Mode enabled: charging disconnects when the battery is full"
                        >
                            <i class="fas fa-shield-halved"></i>
                        </span>
                    </Show>
                </h2>
            </div>
            <div class="battery-info-container">
                {move || match gauge() {
                    Some(gauge) => view! { <BatteryGaugeView gauge=gauge /> }.into_view(),
                    None => view! { <p class="battery-value">"Loading..."</p> }.into_view(),
                }}
                <button
                    class="safe-mode-button"
                    class:enabled=move || safe_mode.enabled.get()
                    title="Safe mode prevents overcharging by disconnecting power when the battery is full"
                    on:click=move |_| safe_mode.toggle()
                >
                    {move || safe_mode.button_label()}
                </button>
                <Show when=move || safe_mode.warning.get()>
                    <div class="safe-mode-warning">"Not recommended to disable"</div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn BatteryGaugeView(gauge: BatteryGauge) -> impl IntoView {
    let body = if gauge.charging {
        (0..GAUGE_BARS)
            .map(|i| {
                let class = if i < gauge.filled_bars {
                    format!("battery-bar filled {}", gauge.band)
                } else {
                    "battery-bar".to_string()
                };
                view! { <div class=class></div> }
            })
            .collect_view()
    } else {
        let width = format!("{}%", gauge.percentage);
        view! {
            <div class=format!("battery-level-solid {}", gauge.band) style:width=width></div>
        }
        .into_view()
    };

    view! {
        <div class="battery-level-row">
            <p class="battery-value">{gauge.headline()}</p>
        </div>
        <div class="battery-visualization" class:charging=gauge.charging>
            <div class="battery-body">
                {gauge.charging.then(|| view! { <div class="charging-indicator">"⚡"</div> })}
                {body}
                <div class="battery-percentage">{gauge.headline()}</div>
            </div>
            <div class="battery-cap"></div>
        </div>
    }
}
