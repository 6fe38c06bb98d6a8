//! Pure view model for a device card
//!
//! Everything a card displays is derived here from `(kind, state)` so the
//! components only bind values; disabled flags travel with their values.

use crate::format::format_consumption;
use crate::models::{ColorTemp, DeviceKind, DeviceState, Sensitivity};

pub const DEFAULT_BRIGHTNESS: u32 = 75;

#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub indicator_class: &'static str,
    pub status_text: &'static str,
    pub consumption_text: String,
    pub toggle_label: &'static str,
    pub controls: KindControls,
}

/// Kind-specific controls with current values and disabled flags
#[derive(Debug, Clone, PartialEq)]
pub enum KindControls {
    None,
    Brightness {
        value: u32,
        disabled: bool,
    },
    ColorTemperature {
        value: ColorTemp,
        disabled: bool,
    },
    SleepMode {
        sleep_mode: bool,
        timer: u32,
        mode_disabled: bool,
        timer_disabled: bool,
    },
    Security {
        motion_detection: bool,
        sensitivity: Sensitivity,
        auto_schedule: bool,
        motion_disabled: bool,
        sensitivity_disabled: bool,
        schedule_disabled: bool,
    },
}

impl CardModel {
    pub fn build(kind: DeviceKind, state: &DeviceState) -> Self {
        let on = state.is_on();

        let indicator_class = match (kind, on) {
            (DeviceKind::SecurityLight, true) => "power-indicator security-on",
            (_, true) => "power-indicator on",
            (_, false) => "power-indicator off",
        };

        Self {
            indicator_class,
            status_text: state.state.as_str(),
            consumption_text: format!("{} kWh", format_consumption(state.consumption)),
            toggle_label: if on { "Turn Off" } else { "Turn On" },
            controls: KindControls::build(kind, state),
        }
    }
}

impl KindControls {
    fn build(kind: DeviceKind, state: &DeviceState) -> Self {
        let off = !state.is_on();

        match kind {
            DeviceKind::KitchenLight => Self::Brightness {
                value: state
                    .brightness
                    .unwrap_or(DEFAULT_BRIGHTNESS)
                    .clamp(1, 100),
                disabled: off,
            },
            DeviceKind::DiningLight => Self::ColorTemperature {
                value: state
                    .color_temp
                    .as_deref()
                    .and_then(ColorTemp::parse)
                    .unwrap_or_default(),
                disabled: off,
            },
            DeviceKind::BedLight => {
                let sleep_mode = state.sleep_mode.unwrap_or(false);
                Self::SleepMode {
                    sleep_mode,
                    timer: state.sleep_timer.unwrap_or(0),
                    mode_disabled: off,
                    timer_disabled: off || !sleep_mode,
                }
            }
            DeviceKind::SecurityLight => {
                let motion_detection = state.motion_detection.unwrap_or(true);
                Self::Security {
                    motion_detection,
                    sensitivity: state
                        .sensitivity
                        .as_deref()
                        .and_then(Sensitivity::parse)
                        .unwrap_or_default(),
                    auto_schedule: state.auto_schedule.unwrap_or(true),
                    motion_disabled: off,
                    sensitivity_disabled: off || !motion_detection,
                    schedule_disabled: off,
                }
            }
            DeviceKind::GenericLight | DeviceKind::Appliance => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PowerState;

    fn on() -> DeviceState {
        DeviceState {
            state: PowerState::On,
            ..Default::default()
        }
    }

    #[test]
    fn test_common_fields() {
        let state = DeviceState {
            state: PowerState::On,
            consumption: Some(0.0042),
            ..Default::default()
        };
        let model = CardModel::build(DeviceKind::Appliance, &state);

        assert_eq!(model.indicator_class, "power-indicator on");
        assert_eq!(model.status_text, "ON");
        assert_eq!(model.consumption_text, "4.20e-3 kWh");
        assert_eq!(model.toggle_label, "Turn Off");
        assert_eq!(model.controls, KindControls::None);
    }

    #[test]
    fn test_off_card_and_missing_consumption() {
        let model = CardModel::build(DeviceKind::GenericLight, &DeviceState::default());

        assert_eq!(model.indicator_class, "power-indicator off");
        assert_eq!(model.status_text, "OFF");
        assert_eq!(model.consumption_text, "0.00 kWh");
        assert_eq!(model.toggle_label, "Turn On");
    }

    #[test]
    fn test_security_indicator() {
        let model = CardModel::build(DeviceKind::SecurityLight, &on());
        assert_eq!(model.indicator_class, "power-indicator security-on");

        let model = CardModel::build(DeviceKind::SecurityLight, &DeviceState::default());
        assert_eq!(model.indicator_class, "power-indicator off");
    }

    #[test]
    fn test_brightness_defaults_and_clamp() {
        let model = CardModel::build(DeviceKind::KitchenLight, &on());
        assert_eq!(
            model.controls,
            KindControls::Brightness {
                value: 75,
                disabled: false
            }
        );

        let state = DeviceState {
            brightness: Some(250),
            ..Default::default()
        };
        assert_eq!(
            CardModel::build(DeviceKind::KitchenLight, &state).controls,
            KindControls::Brightness {
                value: 100,
                disabled: true
            }
        );
    }

    #[test]
    fn test_unknown_color_temp_is_neutral() {
        let state = DeviceState {
            state: PowerState::On,
            color_temp: Some("purple".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CardModel::build(DeviceKind::DiningLight, &state).controls,
            KindControls::ColorTemperature {
                value: ColorTemp::Neutral,
                disabled: false
            }
        );
    }

    #[test]
    fn test_sleep_timer_follows_sleep_mode() {
        let model = CardModel::build(DeviceKind::BedLight, &on());
        assert_eq!(
            model.controls,
            KindControls::SleepMode {
                sleep_mode: false,
                timer: 0,
                mode_disabled: false,
                timer_disabled: true
            }
        );

        let state = DeviceState {
            sleep_mode: Some(true),
            sleep_timer: Some(30),
            ..on()
        };
        assert_eq!(
            CardModel::build(DeviceKind::BedLight, &state).controls,
            KindControls::SleepMode {
                sleep_mode: true,
                timer: 30,
                mode_disabled: false,
                timer_disabled: false
            }
        );
    }

    #[test]
    fn test_security_controls() {
        let model = CardModel::build(DeviceKind::SecurityLight, &on());
        assert_eq!(
            model.controls,
            KindControls::Security {
                motion_detection: true,
                sensitivity: Sensitivity::Medium,
                auto_schedule: true,
                motion_disabled: false,
                sensitivity_disabled: false,
                schedule_disabled: false
            }
        );

        let state = DeviceState {
            motion_detection: Some(false),
            ..on()
        };
        match CardModel::build(DeviceKind::SecurityLight, &state).controls {
            KindControls::Security {
                sensitivity_disabled,
                ..
            } => assert!(sensitivity_disabled),
            other => panic!("Expected security controls, got {:?}", other),
        }
    }

    #[test]
    fn test_everything_disabled_when_off() {
        let state = DeviceState {
            sleep_mode: Some(true),
            ..Default::default()
        };
        match CardModel::build(DeviceKind::BedLight, &state).controls {
            KindControls::SleepMode {
                mode_disabled,
                timer_disabled,
                ..
            } => assert!(mode_disabled && timer_disabled),
            other => panic!("Expected sleep controls, got {:?}", other),
        }
    }
}
