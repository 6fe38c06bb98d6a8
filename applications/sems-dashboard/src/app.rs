use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::{Activity, Dashboard};
use crate::config::DashboardConfig;
use crate::feed;
use crate::state::{provide_dashboard, provide_safe_mode_context};

/// Main application component: owns the dashboard state, the initial pull,
/// the push channel and the persistence ping
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_safe_mode_context();
    let dashboard = provide_dashboard(config);

    // Initial pull, re-run by the Refresh button
    let snapshot = create_local_resource(
        move || dashboard.refresh_trigger.get(),
        move |_| {
            let client = dashboard.client.get_value();
            async move { feed::load_initial(&client).await }
        },
    );

    create_effect(move |_| {
        if let Some(result) = snapshot.get() {
            dashboard.apply_feed(result);
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        wasm_bindgen_futures::spawn_local(feed::socket::run(dashboard));

        // Ask the backend to persist its simulated readings; failures are only logged
        let persist_ms = dashboard.config.with_value(|c| c.persist_interval_ms);
        let client = dashboard.client.get_value();
        let persist_interval = Interval::new(persist_ms, move || {
            let client = client.clone();
            spawn_local(async move {
                if let Err(e) = client.save_simulated_data().await {
                    log::error!("Persisting simulated data failed: {}", e);
                }
            });
        });

        on_cleanup(move || drop(persist_interval));
    }

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="dashboard" view=Dashboard />
                    <Route path="activity" view=Activity />
                </Route>
            </Routes>
        </Router>
    }
}
