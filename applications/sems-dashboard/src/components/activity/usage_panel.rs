use leptos::*;

use crate::models::{rank_usage, UsageRow};
use crate::state::use_dashboard;

/// Devices ranked by aggregated consumption
#[component]
pub fn UsagePanel() -> impl IntoView {
    let dashboard = use_dashboard();
    let rows = create_memo(move |_| dashboard.usage.with(|entries| rank_usage(entries)));

    view! {
        <section class="data-section usage-section">
            <h2>"Energy Usage Ranking"</h2>
            <div id="usage-container" class="usage-list">
                {move || {
                    rows.with(|rows| {
                        if rows.is_empty() {
                            return view! { <p class="no-data">"Waiting for usage data..."</p> }
                                .into_view();
                        }
                        rows.iter().cloned().map(|row| view! { <UsageItem row=row /> }).collect_view()
                    })
                }}
            </div>
        </section>
    }
}

#[component]
fn UsageItem(row: UsageRow) -> impl IntoView {
    view! {
        <div class="usage-item">
            <span class=format!("usage-rank {}", row.rank_class)>{row.rank}</span>
            <i class=format!("fas {} usage-icon", row.icon)></i>
            <div class="usage-details">
                <div class="usage-name">{row.display_name}</div>
                <div class="usage-value">{row.energy_text}</div>
                <div class="usage-bar">
                    <div class="usage-bar-fill" style:width=format!("{:.1}%", row.bar_width)></div>
                </div>
                <div class="usage-percentage">
                    {format!("{}% of total consumption", row.percentage)}
                </div>
            </div>
        </div>
    }
}
