use leptos::*;
use leptos_router::*;

use crate::components::modals::ModalHost;
use crate::state::use_dashboard;

/// Layout component with navbar, content outlet and modal host
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
            <ModalHost />
        </div>
    }
}

/// Navbar with tabs (shown once the first pull has finished), clock and push status
#[component]
fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let dashboard = use_dashboard();

    // Check if a path is active
    let is_active = move |path: &str| pathname.get().starts_with(path);

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"SEMS Dashboard"</h1>
                <Show when=move || dashboard.has_settled()>
                    <div class="navbar-tabs">
                        <A
                            href="/dashboard"
                            class=move || if is_active("/dashboard") { "tab active" } else { "tab" }
                        >
                            "Dashboard"
                        </A>
                        <A
                            href="/activity"
                            class=move || if is_active("/activity") { "tab active" } else { "tab" }
                        >
                            "Activity"
                        </A>
                    </div>
                </Show>
                <div class="navbar-actions">
                    <CurrentTime />
                    <ConnectionIndicator />
                </div>
            </div>
        </nav>
    }
}

/// Current time display that updates every second
#[component]
fn CurrentTime() -> impl IntoView {
    let (time, set_time) = create_signal(get_current_time());

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1000, move || {
            set_time.set(get_current_time());
        });

        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    view! {
        <span class="current-time">
            {move || time.get()}
        </span>
    }
}

/// Get the current time as a formatted string
fn get_current_time() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        use js_sys::Date;
        let date = Date::new_0();
        format!(
            "{:02}:{:02}:{:02}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds()
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::from("--:--:--")
    }
}

/// Push channel status
#[component]
fn ConnectionIndicator() -> impl IntoView {
    let dashboard = use_dashboard();
    let connected = move || dashboard.connected.get();

    view! {
        <span
            class=move || if connected() { "connection-status online" } else { "connection-status offline" }
            title=move || if connected() { "Live updates connected" } else { "Live updates disconnected" }
        >
            {move || if connected() { "Live" } else { "Offline" }}
        </span>
    }
}
