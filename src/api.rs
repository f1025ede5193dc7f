//! Auth backend client for the Google sign-up endpoint.
//!
//! Thin HTTP wrapper for `POST /auth/google/signup`. Body decoding lives in
//! `parse_response` / `parse_error_message` so it can be tested without a
//! server.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`SignUpError`]; nothing is retried here.

use std::time::Duration;

use crate::config::AuthConfig;
use crate::types::{ErrorBody, SignUpError, SignUpRequest, SignUpResponse};

// =============================================================================
// TRAIT
// =============================================================================

/// Async seam for the sign-up call. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Submit a Google sign-up request.
    ///
    /// # Errors
    ///
    /// Returns a [`SignUpError`] if the request cannot be sent, the backend
    /// rejects it, or the success body is malformed.
    async fn google_sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, SignUpError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpAuthApi {
    http: reqwest::Client,
    signup_url: String,
}

impl HttpAuthApi {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &AuthConfig) -> Result<Self, SignUpError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| SignUpError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, signup_url: config.signup_url() })
    }

    #[must_use]
    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn google_sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, SignUpError> {
        tracing::debug!(url = %self.signup_url, "google sign-up request");

        let response = self
            .http
            .post(&self.signup_url)
            .json(request)
            .send()
            .await
            .map_err(|e| SignUpError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SignUpError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(SignUpError::Response { status: status.as_u16(), message: parse_error_message(&text) });
        }

        parse_response(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<SignUpResponse, SignUpError> {
    serde_json::from_str(json).map_err(|e| SignUpError::Parse(e.to_string()))
}

/// Extract a user-facing message from a rejected request's body, if any.
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
