use super::client::{ApiClient, ApiError};

const SAVE_DATA_PATH: &str = "/sems_in/save_simulated_data";

impl ApiClient {
    /// Ask the backend to persist its current simulated readings
    pub async fn save_simulated_data(&self) -> Result<u16, ApiError> {
        self.get_status(SAVE_DATA_PATH).await
    }
}
