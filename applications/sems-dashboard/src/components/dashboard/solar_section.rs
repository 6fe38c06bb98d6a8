use leptos::*;

use crate::state::use_dashboard;

pub const SOLAR_ROWS: usize = 2;
pub const CELLS_PER_ROW: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct SolarView {
    pub headline: String,
    pub charging: bool,
    /// Output relative to the configured peak, 0-1
    pub intensity: f64,
    pub active_cells: usize,
}

impl SolarView {
    pub fn build(solar_output: f64, peak: f64) -> Self {
        let intensity = if peak > 0.0 && solar_output > 0.0 {
            (solar_output / peak).min(1.0)
        } else {
            0.0
        };

        Self {
            headline: format!("{}W", solar_output),
            charging: solar_output > 0.0,
            intensity,
            active_cells: (intensity * CELLS_PER_ROW as f64).ceil() as usize,
        }
    }

    pub fn status_class(&self) -> &'static str {
        if self.charging {
            "solar-status active"
        } else {
            "solar-status inactive"
        }
    }

    pub fn status_text(&self) -> &'static str {
        if self.charging {
            "Charging"
        } else {
            "Not Charging"
        }
    }

    pub fn orb_class(&self) -> &'static str {
        if self.intensity >= 0.5 {
            "sun-orb bright"
        } else if self.intensity > 0.0 {
            "sun-orb dim"
        } else {
            "sun-orb off"
        }
    }
}

/// Solar section, rebuilt on every snapshot
#[component]
pub fn SolarSection() -> impl IntoView {
    let dashboard = use_dashboard();
    let peak = dashboard.config.with_value(|c| c.solar_peak_w);

    let solar = move || {
        dashboard
            .latest
            .with(|latest| latest.as_ref().map(|s| SolarView::build(s.solar_output, peak)))
    };

    view! {
        <section class="data-section solar-section">
            <div class="solar-header">
                <h2>"Solar Output"</h2>
            </div>
            <div class="solar-info-container">
                {move || match solar() {
                    Some(solar) => view! { <SolarVisualization solar=solar /> }.into_view(),
                    None => view! {
                        <p class="solar-value">"Loading..."</p>
                        <div class="solar-status">"Loading..."</div>
                    }
                    .into_view(),
                }}
            </div>
        </section>
    }
}

#[component]
fn SolarVisualization(solar: SolarView) -> impl IntoView {
    let rows = (0..SOLAR_ROWS)
        .map(|_| {
            view! {
                <div class="solar-row">
                    {(0..CELLS_PER_ROW)
                        .map(|i| {
                            let class = if i < solar.active_cells {
                                "solar-element active"
                            } else {
                                "solar-element"
                            };
                            view! { <div class=class></div> }
                        })
                        .collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="solar-level-row">
            <p class="solar-value">{solar.headline.clone()}</p>
        </div>
        <div class="solar-visualization">
            <div class=solar.orb_class()></div>
            {rows}
        </div>
        <div class=solar.status_class()>{solar.status_text()}</div>
    }
}
