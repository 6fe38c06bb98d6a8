use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FeedError;
use crate::models::{AggregatedConsumption, BatterySolarBatch, DeviceSnapshot, LogBatch};

/// Messages pushed by the backend, `{"event": ..., "data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PushMessage {
    /// Snapshot or `{"error": ...}`; validated by [`parse_snapshot`]
    DatabaseUpdate(Value),
    AggregatedConsumptionUpdate(AggregatedConsumption),
    LogUpdate(LogBatch),
    BatterySolarUpdate(BatterySolarBatch),
}

impl PushMessage {
    pub fn decode(text: &str) -> Result<Self, FeedError> {
        serde_json::from_str(text).map_err(|e| FeedError::Decode(e.to_string()))
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            Self::DatabaseUpdate(_) => "database_update",
            Self::AggregatedConsumptionUpdate(_) => "aggregated_consumption_update",
            Self::LogUpdate(_) => "log_update",
            Self::BatterySolarUpdate(_) => "battery_solar_update",
        }
    }
}

/// Turn a pulled or pushed payload into a snapshot, rejecting error-flagged
/// and malformed bodies
pub fn parse_snapshot(payload: Value) -> Result<DeviceSnapshot, FeedError> {
    if let Some(error) = payload.get("error").filter(|e| !e.is_null()) {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(FeedError::Backend(message));
    }

    serde_json::from_value(payload).map_err(|e| FeedError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_database_update_decoding() {
        let text = r#"{"event": "database_update", "data": {"battery_level": 10, "devices": {}}}"#;
        let msg = PushMessage::decode(text).unwrap();

        match msg {
            PushMessage::DatabaseUpdate(payload) => {
                let snapshot = parse_snapshot(payload).unwrap();
                assert_eq!(snapshot.battery_level, 10.0);
                assert!(snapshot.devices.is_empty());
            }
            _ => panic!("Expected DatabaseUpdate message"),
        }
    }

    #[test]
    fn test_aggregated_update_decoding() {
        let text = r#"{"event": "aggregated_consumption_update",
                       "data": {"devices": [{"device_name": "tv", "energy_consumed": 6}]}}"#;
        let msg = PushMessage::decode(text).unwrap();

        match msg {
            PushMessage::AggregatedConsumptionUpdate(update) => {
                assert_eq!(update.devices.len(), 1);
                assert_eq!(update.devices[0].energy_consumed, 6.0);
            }
            _ => panic!("Expected AggregatedConsumptionUpdate message"),
        }
    }

    #[test]
    fn test_log_and_series_decoding() {
        let log = r#"{"event": "log_update", "data": {"logs": [{"timestamp": "t", "changes": "tv turned ON"}]}}"#;
        assert!(matches!(PushMessage::decode(log).unwrap(), PushMessage::LogUpdate(_)));

        let series = r#"{"event": "battery_solar_update",
                         "data": {"data": [{"timestamp": "t", "battery_level": 1, "solar_output": 2}]}}"#;
        let msg = PushMessage::decode(series).unwrap();
        assert_eq!(msg.event_name(), "battery_solar_update");
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let text = r#"{"event": "data_update", "data": {}}"#;
        assert!(matches!(PushMessage::decode(text), Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_error_flagged_snapshot() {
        let result = parse_snapshot(json!({"error": "device_ID is required"}));
        match result {
            Err(FeedError::Backend(message)) => assert_eq!(message, "device_ID is required"),
            other => panic!("Expected backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_snapshot() {
        let result = parse_snapshot(json!({"timestamp": "2025-03-01 10:00:00"}));
        assert!(matches!(result, Err(FeedError::Malformed(_))));

        let result = parse_snapshot(json!([1, 2, 3]));
        assert!(matches!(result, Err(FeedError::Malformed(_))));
    }

    #[test]
    fn test_odd_device_numbers_keep_snapshot() {
        let result = parse_snapshot(json!({
            "battery_level": null,
            "devices": {
                "kitchen_light": {"state": "ON", "brightness": 50.0},
                "bed_light": {"state": "ON", "sleepMode": true, "sleepTimer": -1},
                "tv": {"state": "OFF", "consumption": "abc"}
            }
        }));

        let snapshot = result.unwrap();
        assert_eq!(snapshot.battery_level, 0.0);
        assert_eq!(snapshot.devices["kitchen_light"].brightness, Some(50));
        assert_eq!(snapshot.devices["bed_light"].sleep_timer, None);
        assert_eq!(snapshot.devices["tv"].consumption, None);
    }

    #[test]
    fn test_null_error_field_is_ignored() {
        let result = parse_snapshot(json!({"error": null, "battery_level": 5, "devices": {}}));
        assert!(result.is_ok());
    }
}
