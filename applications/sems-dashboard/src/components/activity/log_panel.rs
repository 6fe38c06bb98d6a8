use leptos::*;

use crate::state::use_dashboard;

/// Activity log; every `log_update` replaces the whole list
#[component]
pub fn LogPanel() -> impl IntoView {
    let dashboard = use_dashboard();

    view! {
        <section class="data-section log-section">
            <h2>"Activity Log"</h2>
            <div id="log-container" class="log-list">
                {move || {
                    dashboard.logs.with(|entries| {
                        if entries.is_empty() {
                            return view! { <p class="no-data">"No recent activity"</p> }.into_view();
                        }

                        entries
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class=entry.entry_class()>
                                        <div class="log-icon">
                                            <i class=format!("fas {}", entry.icon)></i>
                                        </div>
                                        <div class="log-content">
                                            <div class="log-device">
                                                {entry.display_name.clone()}
                                                " "
                                                <span class=entry.status_class()>{entry.state.as_str()}</span>
                                            </div>
                                            <div class="log-time">{entry.time_label.clone()}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}
