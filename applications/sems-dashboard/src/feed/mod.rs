//! Snapshot intake: the initial pull and the push stream
//!
//! Both paths end in [`parse_snapshot`], so a pulled body and a pushed
//! `database_update` are validated the same way before reaching the
//! reconciler.

pub mod protocol;
pub mod socket;

use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::models::DeviceSnapshot;

pub use protocol::{parse_snapshot, PushMessage};

/// Reasons a snapshot (or a push frame) could not be used
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The backend flagged the payload with an `error` field
    #[error("{0}")]
    Backend(String),
    #[error("Malformed snapshot: {0}")]
    Malformed(String),
    #[error("Undecodable push frame: {0}")]
    Decode(String),
    #[error("Connection error: {0}")]
    Transport(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Pull the current snapshot over HTTP
pub async fn load_initial(client: &ApiClient) -> Result<DeviceSnapshot, FeedError> {
    let payload = client.fetch_snapshot_payload().await?;
    parse_snapshot(payload)
}
