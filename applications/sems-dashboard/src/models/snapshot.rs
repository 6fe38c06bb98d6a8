use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One complete picture of battery, solar and device state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    #[serde(default)]
    pub timestamp: String,
    /// Required, but a null or non-numeric reading counts as empty
    #[serde(deserialize_with = "lenient_reading")]
    pub battery_level: f64,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub solar_output: f64,
    pub devices: BTreeMap<String, DeviceState>,
}

/// On/off state as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerState {
    #[serde(rename = "ON")]
    On,
    #[default]
    #[serde(rename = "OFF")]
    Off,
}

impl PowerState {
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

/// State of a single device within a snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    #[serde(default, deserialize_with = "lenient_power_state")]
    pub state: PowerState,
    #[serde(default, deserialize_with = "lenient_number")]
    pub consumption: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_mode: Option<bool>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub sleep_timer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion_detection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_schedule: Option<bool>,
}

impl DeviceState {
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }
}

/// Anything but the literal "ON" (null, missing, garbage) reads as OFF
fn lenient_power_state<'de, D>(deserializer: D) -> Result<PowerState, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if s == "ON" => PowerState::On,
        _ => PowerState::Off,
    })
}

/// Any finite JSON number (or numeric string); everything else is absent
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(number_of).filter(|n| n.is_finite()))
}

/// Snapshot-level reading; unusable values read as 0
fn lenient_reading<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}

/// Non-negative whole number, rounded; negative or non-numeric values are
/// absent and fall back to the kind default
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?
        .map(f64::round)
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserialization() {
        let json = r#"{
            "timestamp": "2025-03-01 14:05:09",
            "battery_level": 640,
            "solar_output": 210.5,
            "devices": {
                "kitchen_light": {"state": "ON", "consumption": 0.0042, "brightness": 40},
                "tv": {"state": "OFF", "consumption": 1.5}
            }
        }"#;

        let snapshot: DeviceSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.battery_level, 640.0);
        assert_eq!(snapshot.devices.len(), 2);
        let kitchen = &snapshot.devices["kitchen_light"];
        assert!(kitchen.is_on());
        assert_eq!(kitchen.brightness, Some(40));
        assert!(!snapshot.devices["tv"].is_on());
    }

    #[test]
    fn test_null_state_and_consumption() {
        let json = r#"{"state": null, "consumption": null}"#;
        let state: DeviceState = serde_json::from_str(json).unwrap();

        assert_eq!(state.state, PowerState::Off);
        assert_eq!(state.consumption, None);
    }

    #[test]
    fn test_unknown_state_is_off() {
        let state: DeviceState = serde_json::from_str(r#"{"state": "on"}"#).unwrap();
        assert_eq!(state.state, PowerState::Off);
    }

    #[test]
    fn test_camel_case_kind_fields() {
        let json = r#"{"state": "ON", "colorTemp": "warm", "sleepMode": true, "sleepTimer": 30,
                       "motionDetection": false, "sensitivity": "high", "autoSchedule": false}"#;
        let state: DeviceState = serde_json::from_str(json).unwrap();

        assert_eq!(state.color_temp.as_deref(), Some("warm"));
        assert_eq!(state.sleep_mode, Some(true));
        assert_eq!(state.sleep_timer, Some(30));
        assert_eq!(state.motion_detection, Some(false));
        assert_eq!(state.sensitivity.as_deref(), Some("high"));
        assert_eq!(state.auto_schedule, Some(false));
    }

    #[test]
    fn test_missing_devices_is_rejected() {
        let json = r#"{"timestamp": "x", "battery_level": 10}"#;
        assert!(serde_json::from_str::<DeviceSnapshot>(json).is_err());
    }

    #[test]
    fn test_float_and_string_kind_numbers() {
        let json = r#"{"state": "ON", "brightness": 50.0, "sleepTimer": "30"}"#;
        let state: DeviceState = serde_json::from_str(json).unwrap();

        assert_eq!(state.brightness, Some(50));
        assert_eq!(state.sleep_timer, Some(30));

        let state: DeviceState = serde_json::from_str(r#"{"brightness": 49.6}"#).unwrap();
        assert_eq!(state.brightness, Some(50));
    }

    #[test]
    fn test_unusable_kind_numbers_are_absent() {
        let json = r#"{"state": "ON", "brightness": "abc", "sleepTimer": -1, "consumption": "abc"}"#;
        let state: DeviceState = serde_json::from_str(json).unwrap();

        assert!(state.is_on());
        assert_eq!(state.brightness, None);
        assert_eq!(state.sleep_timer, None);
        assert_eq!(state.consumption, None);

        let state: DeviceState = serde_json::from_str(r#"{"brightness": null, "sleepTimer": true}"#).unwrap();
        assert_eq!(state.brightness, None);
        assert_eq!(state.sleep_timer, None);
    }

    #[test]
    fn test_null_battery_level_reads_as_empty() {
        let json = r#"{"battery_level": null, "solar_output": "n/a", "devices": {}}"#;
        let snapshot: DeviceSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.battery_level, 0.0);
        assert_eq!(snapshot.solar_output, 0.0);
    }

    #[test]
    fn test_missing_battery_level_is_rejected() {
        let json = r#"{"devices": {}}"#;
        assert!(serde_json::from_str::<DeviceSnapshot>(json).is_err());
    }

    #[test]
    fn test_power_state_toggle() {
        assert_eq!(PowerState::On.toggled(), PowerState::Off);
        assert_eq!(PowerState::Off.toggled(), PowerState::On);
    }
}
