#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Runtime configuration, read from `window.ENV` when present
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for HTTP endpoints; empty means same origin
    pub api_url: String,
    /// Push channel endpoint
    pub ws_url: String,
    /// Element the app mounts into
    pub mount_id: String,
    pub persist_interval_ms: u32,
    pub toggle_failsafe_ms: u32,
    pub reconnect_delay_ms: u32,
    /// Battery reading that counts as 100%
    pub battery_capacity: f64,
    /// Solar output that saturates the visualization
    pub solar_peak_w: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            ws_url: default_ws_url(),
            mount_id: "data-container".to_string(),
            persist_interval_ms: 3_000,
            toggle_failsafe_ms: 10_000,
            reconnect_delay_ms: 3_000,
            battery_capacity: 1_000.0,
            solar_peak_w: 1_000.0,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from window.ENV, falling back to defaults per key
    pub fn from_env() -> Self {
        #[allow(unused_mut)]
        let mut config = Self::default();

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(env) = window_env() {
                if let Some(url) = env_string(&env, "API_URL") {
                    config.api_url = url.trim_end_matches('/').to_string();
                }
                if let Some(url) = env_string(&env, "WS_URL") {
                    config.ws_url = url;
                }
                if let Some(id) = env_string(&env, "MOUNT_ID") {
                    config.mount_id = id;
                }
                if let Some(ms) = env_number(&env, "PERSIST_INTERVAL_MS").and_then(interval_ms) {
                    config.persist_interval_ms = ms;
                }
                if let Some(ms) = env_number(&env, "TOGGLE_FAILSAFE_MS").and_then(interval_ms) {
                    config.toggle_failsafe_ms = ms;
                }
                if let Some(ms) = env_number(&env, "RECONNECT_DELAY_MS").and_then(interval_ms) {
                    config.reconnect_delay_ms = ms;
                }
                if let Some(capacity) = env_number(&env, "BATTERY_CAPACITY").filter(|c| *c > 0.0) {
                    config.battery_capacity = capacity;
                }
                if let Some(peak) = env_number(&env, "SOLAR_PEAK_W").filter(|p| *p > 0.0) {
                    config.solar_peak_w = peak;
                }
            }
        }

        config
    }
}

#[cfg(target_arch = "wasm32")]
fn window_env() -> Option<JsValue> {
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
    (!env.is_undefined() && !env.is_null()).then_some(env)
}

#[cfg(target_arch = "wasm32")]
fn env_string(env: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(env, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn env_number(env: &JsValue, key: &str) -> Option<f64> {
    let value = js_sys::Reflect::get(env, &JsValue::from_str(key)).ok()?;
    value
        .as_f64()
        .or_else(|| value.as_string().and_then(|s| s.parse().ok()))
        .filter(|n| n.is_finite() && *n >= 0.0)
}

/// Timer periods must be at least 1ms; a zero period would fire nonstop
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn interval_ms(raw: f64) -> Option<u32> {
    (raw.is_finite() && raw >= 1.0).then(|| raw.min(u32::MAX as f64) as u32)
}

/// `ws(s)://<host>/ws` for the page's own origin
fn default_ws_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            if let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) {
                let scheme = if protocol == "https:" { "wss" } else { "ws" };
                return format!("{}://{}/ws", scheme, host);
            }
        }
    }

    "ws://localhost:5000/ws".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();

        assert_eq!(config.api_url, "");
        assert_eq!(config.mount_id, "data-container");
        assert_eq!(config.persist_interval_ms, 3_000);
        assert_eq!(config.toggle_failsafe_ms, 10_000);
        assert_eq!(config.battery_capacity, 1_000.0);
    }

    #[test]
    fn test_interval_rejects_zero() {
        assert_eq!(interval_ms(0.0), None);
        assert_eq!(interval_ms(0.5), None);
        assert_eq!(interval_ms(f64::NAN), None);
        assert_eq!(interval_ms(1.0), Some(1));
        assert_eq!(interval_ms(2500.7), Some(2500));
        assert_eq!(interval_ms(1e12), Some(u32::MAX));
    }

    #[test]
    fn test_from_env_without_window_uses_defaults() {
        assert_eq!(DashboardConfig::from_env(), DashboardConfig::default());
    }
}
