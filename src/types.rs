//! Sign-up wire types and errors.
//!
//! Field names mirror the auth backend's JSON (camelCase) so the request
//! body carries the caller's form values unchanged.

use serde::{Deserialize, Serialize};

/// Shown when a failed sign-up carries no usable server message.
pub const SIGN_UP_FAILURE_MESSAGE: &str = "Google 회원가입에 실패했습니다";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the sign-up call.
#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    /// A required configuration variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a readable response.
    #[error("sign-up request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("sign-up rejected: status {status}")]
    Response { status: u16, message: Option<String> },

    /// A success response body did not match the expected shape.
    #[error("sign-up response parse failed: {0}")]
    Parse(String),
}

impl SignUpError {
    /// Text to show the user: the server's message when it sent one,
    /// otherwise [`SIGN_UP_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Response { message: Some(message), .. } if !message.is_empty() => message,
            _ => SIGN_UP_FAILURE_MESSAGE,
        }
    }
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// Form data submitted after the user signed in with Google.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Google identity credential obtained by the caller.
    pub token: String,
    pub name: String,
    pub employee_number: String,
    pub phone_number: String,
    pub company_code: String,
}

/// Successful sign-up: the new account plus its session tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

impl SignUpResponse {
    /// Split into the token pair and the profile.
    #[must_use]
    pub fn into_parts(self) -> (SessionTokens, User) {
        let tokens = SessionTokens { access_token: self.access_token, refresh_token: self.refresh_token };
        (tokens, self.user)
    }
}

/// Optional body the backend sends with a rejected request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The message, if it is a non-empty string. A list of strings
    /// (validation errors) is joined one per line.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        let message = match self.message? {
            serde_json::Value::String(message) => message,
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            _ => return None,
        };
        (!message.is_empty()).then_some(message)
    }
}

// =============================================================================
// SESSION DATA
// =============================================================================

/// Access/refresh token pair. Kept as one value so neither is ever stored
/// without the other.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Signed-up user profile as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub employee_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_admin: bool,
    /// Identity provider tag (e.g. `"google"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<String>,
    pub company: Company,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_name: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
