use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Backend(String),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// `{"error": "..."}` bodies the backend returns on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// API client for the SEMS backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (empty for same origin)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include) // Session cookie carries the device id
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a GET request, caring only about the status
    pub async fn get_status(&self, path: &str) -> Result<u16, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await?;

        let status = response.status();
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(status)
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    error_from_body(status, text)
}

/// Prefer the backend's own `error` message over the raw body
fn error_from_body(status: u16, text: String) -> ApiError {
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => ApiError::Backend(body.error),
        Err(_) => ApiError::Http {
            status,
            message: text,
        },
    }
}
