pub mod client;
pub mod devices;
pub mod persistence;

pub use client::{ApiClient, ApiError};
