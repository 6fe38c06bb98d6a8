use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::format_device_name;

/// Backend device name, e.g. `kitchen_light`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for DeviceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Device category, resolved once when a device first shows up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    KitchenLight,
    DiningLight,
    BedLight,
    SecurityLight,
    GenericLight,
    Appliance,
}

/// Where a card lives in the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    LightsGrid,
    DevicesTable,
}

impl DeviceKind {
    /// Resolve the kind from a device id
    pub fn resolve(id: &str) -> Self {
        match id {
            "kitchen_light" => Self::KitchenLight,
            "dining_light" => Self::DiningLight,
            "bed_light" => Self::BedLight,
            "security_light" => Self::SecurityLight,
            other if other.contains("light") => Self::GenericLight,
            _ => Self::Appliance,
        }
    }

    pub fn is_light(&self) -> bool {
        !matches!(self, Self::Appliance)
    }

    pub fn container(&self) -> Container {
        if self.is_light() {
            Container::LightsGrid
        } else {
            Container::DevicesTable
        }
    }

    /// Header shown on the card
    pub fn title(&self, id: &DeviceId) -> String {
        match self {
            Self::KitchenLight => "Kitchen Light".to_string(),
            Self::DiningLight => "Dining Light".to_string(),
            Self::BedLight => "Bedroom Light".to_string(),
            Self::SecurityLight => "Security Light".to_string(),
            Self::GenericLight | Self::Appliance => format_device_name(id.as_str()),
        }
    }

    /// Card class for the kind
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::KitchenLight => "device-card kitchen-light-card",
            Self::DiningLight => "device-card dining-light-card",
            Self::BedLight => "device-card bed-light-card",
            Self::SecurityLight => "device-card security-light-card",
            Self::GenericLight => "device-card",
            Self::Appliance => "device-row",
        }
    }
}

/// Dining light colour temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTemp {
    Warm,
    #[default]
    Neutral,
    Cool,
}

impl ColorTemp {
    pub const ALL: [ColorTemp; 3] = [ColorTemp::Warm, ColorTemp::Neutral, ColorTemp::Cool];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "warm" => Some(Self::Warm),
            "neutral" => Some(Self::Neutral),
            "cool" => Some(Self::Cool),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Neutral => "neutral",
            Self::Cool => "cool",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Warm => "Warm",
            Self::Neutral => "Neutral",
            Self::Cool => "Cool",
        }
    }
}

/// Security light motion sensitivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sensitivity {
    Low,
    #[default]
    Medium,
    High,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 3] = [Sensitivity::Low, Sensitivity::Medium, Sensitivity::High];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Bed light auto-off choices in minutes, 0 meaning disabled
pub const SLEEP_TIMER_OPTIONS: [u32; 4] = [0, 30, 60, 120];

pub fn sleep_timer_label(minutes: u32) -> String {
    match minutes {
        0 => "Disabled".to_string(),
        60 => "1 hour".to_string(),
        m if m % 60 == 0 => format!("{} hours", m / 60),
        m => format!("{} minutes", m),
    }
}

/// Font Awesome icon class for a device, accepting ids or display names
pub fn device_icon(name: &str) -> &'static str {
    let key = name.trim().to_lowercase().replace(' ', "_");
    match key.as_str() {
        "tv" => "fa-tv",
        "sound_system" => "fa-volume-high",
        "kitchen_light" | "dining_light" | "bed_light" => "fa-lightbulb",
        "security_light" => "fa-shield",
        _ => "fa-plug",
    }
}
