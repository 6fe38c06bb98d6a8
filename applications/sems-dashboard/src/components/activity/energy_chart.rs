use leptos::*;

use crate::format::format_clock;
use crate::state::use_dashboard;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

/// SVG polyline `points` for `values`, spread across the width and scaled
/// so `max` touches the top edge
pub fn polyline_points(values: &[f64], width: f64, height: f64, max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = if max > 0.0 { max } else { 1.0 };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let y = height - (value.clamp(0.0, max) / max * height);
            format!("{:.1},{:.1}", i as f64 * step, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Battery level and solar output over time
#[component]
pub fn EnergyChart() -> impl IntoView {
    let dashboard = use_dashboard();
    let (capacity, peak) = dashboard
        .config
        .with_value(|c| (c.battery_capacity, c.solar_peak_w));

    let lines = create_memo(move |_| {
        dashboard.series.with(|series| {
            let points = series.points();
            let battery: Vec<f64> = points.iter().map(|p| p.battery_level).collect();
            let solar: Vec<f64> = points.iter().map(|p| p.solar_output).collect();
            let solar_max = solar.iter().copied().fold(peak, f64::max);

            let range = match (points.first(), points.last()) {
                (Some(first), Some(last)) => Some((
                    format_clock(&first.timestamp),
                    format_clock(&last.timestamp),
                )),
                _ => None,
            };

            (
                polyline_points(&battery, CHART_WIDTH, CHART_HEIGHT, capacity),
                polyline_points(&solar, CHART_WIDTH, CHART_HEIGHT, solar_max),
                range,
            )
        })
    });

    view! {
        <section class="data-section chart-section">
            <h2>"Battery & Solar"</h2>
            <Show
                when=move || dashboard.series.with(|s| !s.is_empty())
                fallback=|| view! { <p class="no-data">"Waiting for battery and solar data..."</p> }
            >
                <svg
                    id="solarBatteryChart"
                    class="energy-chart"
                    viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                    preserveAspectRatio="none"
                >
                    <polyline class="series-battery" fill="none" points=move || lines.with(|l| l.0.clone()) />
                    <polyline class="series-solar" fill="none" points=move || lines.with(|l| l.1.clone()) />
                </svg>
                <div class="chart-axis">
                    {move || lines.with(|l| l.2.clone()).map(|(start, end)| view! {
                        <span class="axis-start">{start}</span>
                        <span class="axis-end">{end}</span>
                    })}
                </div>
                <div class="chart-legend">
                    <span class="legend-battery">"Battery Level"</span>
                    <span class="legend-solar">"Solar Output (W)"</span>
                </div>
            </Show>
        </section>
    }
}
