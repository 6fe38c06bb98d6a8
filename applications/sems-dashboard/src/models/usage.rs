use serde::{Deserialize, Serialize};

use crate::format::{format_device_name, format_percentage};
use crate::models::device_icon;

/// Aggregated energy use for one device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedConsumptionEntry {
    pub device_name: String,
    #[serde(default)]
    pub energy_consumed: f64,
}

/// Payload of `aggregated_consumption_update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedConsumption {
    pub devices: Vec<AggregatedConsumptionEntry>,
}

/// One line of the usage ranking panel
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRow {
    pub rank: usize,
    pub rank_class: &'static str,
    pub device_name: String,
    pub display_name: String,
    pub icon: &'static str,
    pub energy_text: String,
    pub percentage: String,
    /// Bar width relative to the top consumer, 0-100
    pub bar_width: f64,
}

/// Rank entries in the order the backend sent them (already sorted descending)
pub fn rank_usage(entries: &[AggregatedConsumptionEntry]) -> Vec<UsageRow> {
    let total: f64 = entries.iter().map(|e| e.energy_consumed).sum();
    let max = entries
        .iter()
        .map(|e| e.energy_consumed)
        .fold(0.0_f64, f64::max);

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| UsageRow {
            rank: index + 1,
            rank_class: match index {
                0 => "rank-1",
                1 => "rank-2",
                2 => "rank-3",
                _ => "rank-other",
            },
            device_name: entry.device_name.clone(),
            display_name: format_device_name(&entry.device_name),
            icon: device_icon(&entry.device_name),
            energy_text: format!("{:.4} kWh", entry.energy_consumed),
            percentage: format_percentage(entry.energy_consumed, total),
            bar_width: if max > 0.0 {
                entry.energy_consumed / max * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Consumption trend against the household average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTrend {
    Up,
    Down,
    Neutral,
}

impl UsageTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral",
        }
    }

    pub fn arrow(&self) -> Option<&'static str> {
        match self {
            Self::Up => Some("↑"),
            Self::Down => Some("↓"),
            Self::Neutral => None,
        }
    }
}

/// Usage figures shown next to an appliance's consumption
#[derive(Debug, Clone, PartialEq)]
pub struct UsageMetrics {
    pub percentage: String,
    pub rank_label: &'static str,
    pub trend: UsageTrend,
}

impl Default for UsageMetrics {
    fn default() -> Self {
        Self {
            percentage: "0".to_string(),
            rank_label: "Low Consumer",
            trend: UsageTrend::Neutral,
        }
    }
}

pub fn usage_metrics(entries: &[AggregatedConsumptionEntry], device: &str) -> UsageMetrics {
    let total: f64 = entries.iter().map(|e| e.energy_consumed).sum();
    let Some(entry) = entries.iter().find(|e| e.device_name == device) else {
        return UsageMetrics::default();
    };
    if total <= 0.0 {
        return UsageMetrics::default();
    }

    let share = entry.energy_consumed / total * 100.0;
    let average = total / entries.len() as f64;
    let trend = if entry.energy_consumed > average * 1.2 {
        UsageTrend::Up
    } else if entry.energy_consumed < average * 0.8 {
        UsageTrend::Down
    } else {
        UsageTrend::Neutral
    };

    UsageMetrics {
        percentage: format_percentage(entry.energy_consumed, total),
        rank_label: rank_label(share),
        trend,
    }
}

fn rank_label(percentage: f64) -> &'static str {
    if percentage > 40.0 {
        "High Consumer"
    } else if percentage > 20.0 {
        "Medium Consumer"
    } else {
        "Low Consumer"
    }
}
