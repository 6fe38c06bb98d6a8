use gloo_storage::{LocalStorage, Storage};
use leptos::*;

const STORAGE_KEY: &str = "safeMode";

/// How long the "not recommended" note stays up after enabling
pub const WARNING_MS: u32 = 3_000;

/// Safe mode context: the persisted flag and its transient warning
#[derive(Clone, Copy)]
pub struct SafeModeContext {
    pub enabled: ReadSignal<bool>,
    pub set_enabled: WriteSignal<bool>,
    pub warning: RwSignal<bool>,
}

impl SafeModeContext {
    /// Flip safe mode; enabling shows the warning for [`WARNING_MS`]
    pub fn toggle(&self) {
        let now_enabled = !self.enabled.get_untracked();
        self.set_enabled.set(now_enabled);
        log::info!("Safe mode {}", if now_enabled { "enabled" } else { "disabled" });

        if now_enabled {
            self.warning.set(true);

            #[cfg(target_arch = "wasm32")]
            {
                use gloo_timers::callback::Timeout;

                let warning = self.warning;
                Timeout::new(WARNING_MS, move || {
                    warning.try_set(false);
                })
                .forget();
            }
        } else {
            self.warning.set(false);
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.enabled.get() {
            "Disable Safe Mode"
        } else {
            "Enable Safe Mode"
        }
    }
}

/// Saved flag; anything unreadable counts as disabled
#[cfg(target_arch = "wasm32")]
fn load_enabled() -> bool {
    LocalStorage::get::<String>(STORAGE_KEY)
        .map(|saved| saved == "true")
        .unwrap_or(false)
}

fn save_enabled(enabled: bool) {
    let _ = LocalStorage::set(STORAGE_KEY, if enabled { "true" } else { "false" });
}

/// Provide safe mode context; call once at the app root
pub fn provide_safe_mode_context() {
    #[cfg(target_arch = "wasm32")]
    let initial = load_enabled();
    #[cfg(not(target_arch = "wasm32"))]
    let initial = false;

    let (enabled, set_enabled) = create_signal(initial);
    let warning = create_rw_signal(false);

    create_effect(move |previous: Option<bool>| {
        let current = enabled.get();
        if previous.is_some() {
            save_enabled(current);
        }
        current
    });

    provide_context(SafeModeContext {
        enabled,
        set_enabled,
        warning,
    });
}

/// Hook to access safe mode context
pub fn use_safe_mode() -> SafeModeContext {
    use_context::<SafeModeContext>().expect("SafeModeContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_shows_warning_only_when_enabling() {
        let runtime = create_runtime();
        let (enabled, set_enabled) = create_signal(false);
        let ctx = SafeModeContext {
            enabled,
            set_enabled,
            warning: create_rw_signal(false),
        };

        ctx.toggle();
        assert!(ctx.enabled.get_untracked());
        assert!(ctx.warning.get_untracked());
        assert_eq!(ctx.button_label(), "Disable Safe Mode");

        ctx.toggle();
        assert!(!ctx.enabled.get_untracked());
        assert!(!ctx.warning.get_untracked());
        assert_eq!(ctx.button_label(), "Enable Safe Mode");

        runtime.dispose();
    }
}
