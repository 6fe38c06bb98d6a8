use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::device::device_icon;
use super::snapshot::PowerState;
use crate::format::{format_device_name, format_log_time};

/// One stored log record; `changes` holds newline-separated transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub changes: String,
}

/// Payload of `log_update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogBatch {
    pub logs: Vec<LogRecord>,
}

/// Rendered activity log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub device_name: String,
    pub display_name: String,
    pub state: PowerState,
    pub icon: &'static str,
    pub time_label: String,
}

impl LogEntry {
    pub fn entry_class(&self) -> &'static str {
        if self.state.is_on() {
            "log-entry log-on"
        } else {
            "log-entry log-off"
        }
    }

    pub fn status_class(&self) -> &'static str {
        if self.state.is_on() {
            "log-status status-on"
        } else {
            "log-status status-off"
        }
    }
}

const TURNED: &str = " turned ";

/// Parse `<deviceName> turned <ON|OFF>`.
///
/// The device name is everything before the last " turned " that is
/// followed by ON or OFF; trailing text after the state is ignored.
pub fn parse_change(line: &str) -> Option<(String, PowerState)> {
    line.rmatch_indices(TURNED).find_map(|(idx, _)| {
        let name = &line[..idx];
        let rest = &line[idx + TURNED.len()..];
        let state = if rest.starts_with("ON") {
            PowerState::On
        } else if rest.starts_with("OFF") {
            PowerState::Off
        } else {
            return None;
        };
        (!name.is_empty()).then(|| (name.to_string(), state))
    })
}

impl LogBatch {
    /// Flatten every record into display entries, skipping unparseable lines
    pub fn entries(&self, today: NaiveDate) -> Vec<LogEntry> {
        self.logs
            .iter()
            .flat_map(|record| {
                let time_label = format_log_time(&record.timestamp, today);
                record
                    .changes
                    .split('\n')
                    .filter_map(parse_change)
                    .map(move |(device_name, state)| LogEntry {
                        display_name: format_device_name(&device_name),
                        icon: device_icon(&device_name),
                        device_name,
                        state,
                        time_label: time_label.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
