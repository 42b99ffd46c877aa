use reqwest::Client as HttpClient;
use tracing::{info, warn};

use super::models::{AccountRecord, ApiError};

/// HTTP client for the remote account store
#[derive(Debug, Clone)]
pub struct AccountClient {
    http_client: HttpClient,
    base_url: String,
}

impl AccountClient {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";

    /// Create a new account store client against the default base URL
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                // Try to parse JSON error
                if let Ok(err_json) = serde_json::from_str::<serde_json::Value>(&body_text) {
                    let message = err_json
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or(&body_text);
                    ApiError::BadRequest(message.to_string())
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code as i32, body_text)
            }
            _ => ApiError::HttpError(status_code as i32, body_text),
        }
    }

    /// GET /account/{action}/{email}/{amount}
    ///
    /// Records a deposit or withdraw against the remote account store and
    /// returns the updated account document.
    pub async fn record_transaction(
        &self,
        action: &str,
        email: &str,
        amount: f64,
    ) -> Result<AccountRecord, ApiError> {
        let url = format!(
            "{}/account/{}/{}/{:.2}",
            self.base_url, action, email, amount
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<AccountRecord>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// Fire-and-forget variant of `record_transaction`: the call is spawned
    /// onto the runtime, cannot be awaited or cancelled by the caller, and
    /// its outcome is only logged. The local balance stands either way.
    pub fn sync_in_background(&self, action: &'static str, email: &str, amount: f64) {
        let client = self.clone();
        let email = email.to_string();
        tokio::spawn(async move {
            match client.record_transaction(action, &email, amount).await {
                Ok(record) => info!("Account data from server: {:?}", record),
                Err(e) => warn!("Account sync for {} of {:.2} failed: {}", action, amount, e),
            }
        });
    }
}

impl Default for AccountClient {
    fn default() -> Self {
        Self::new()
    }
}
