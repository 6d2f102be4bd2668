//! HTTP plumbing shared by the provider adapters

use reqwest::{Client, StatusCode};
use std::time::Duration;
use verdict_application::GatewayError;
use verdict_domain::core::string::truncate;

/// Longest error body excerpt kept in a gateway error
const BODY_EXCERPT_LEN: usize = 300;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, GatewayError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::ConnectionError(e.to_string()))
}

/// Classify a transport-level failure
pub(crate) fn map_transport_error(error: &reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(error.to_string())
    }
}

/// Classify a non-2xx response
pub(crate) fn map_status(provider: &str, status: StatusCode, body: &str) -> GatewayError {
    let excerpt = truncate(body.trim(), BODY_EXCERPT_LEN);
    if status == StatusCode::TOO_MANY_REQUESTS {
        GatewayError::RateLimited(format!("{}: {}", provider, excerpt))
    } else {
        GatewayError::RequestFailed(format!("{} API error: {} - {}", provider, status, excerpt))
    }
}

/// Reject missing or whitespace-only text
pub(crate) fn non_empty(text: Option<String>) -> Result<String, GatewayError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(GatewayError::EmptyResponse),
    }
}
