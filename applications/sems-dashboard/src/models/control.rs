use serde::{Deserialize, Serialize};

use super::device::DeviceId;
use super::snapshot::{DeviceState, PowerState};

/// Body of the device-control proxy request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlRequest {
    pub device_name: DeviceId,
    pub control_action: PowerState,
}

impl ControlRequest {
    /// Request the opposite of what the card currently shows
    pub fn toggle(device: &DeviceId, current: &DeviceState) -> Self {
        Self {
            device_name: device.clone(),
            control_action: current.state.toggled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inverts_state() {
        let device = DeviceId::new("tv");
        let on = DeviceState {
            state: PowerState::On,
            ..Default::default()
        };

        let request = ControlRequest::toggle(&device, &on);
        assert_eq!(request.control_action, PowerState::Off);

        let request = ControlRequest::toggle(&device, &DeviceState::default());
        assert_eq!(request.control_action, PowerState::On);
    }

    #[test]
    fn test_control_request_serialization() {
        let request = ControlRequest {
            device_name: DeviceId::new("kitchen_light"),
            control_action: PowerState::On,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"device_name":"kitchen_light","control_action":"ON"}"#
        );
    }
}
