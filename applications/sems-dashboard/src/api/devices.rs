use super::client::{ApiClient, ApiError};
use crate::models::ControlRequest;

const FETCH_DATA_PATH: &str = "/sems_in/fetch_database_data";
const DEVICE_CONTROL_PATH: &str = "/sems_in/proxy_device_control";

impl ApiClient {
    /// Get the latest snapshot as raw JSON; the feed decides whether it is usable
    pub async fn fetch_snapshot_payload(&self) -> Result<serde_json::Value, ApiError> {
        self.get(FETCH_DATA_PATH).await
    }

    /// Ask the backend to switch a device
    pub async fn control_device(
        &self,
        request: &ControlRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post(DEVICE_CONTROL_PATH, request).await
    }
}
