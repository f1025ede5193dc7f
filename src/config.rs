//! Auth backend configuration parsed from environment variables.

use crate::types::SignUpError;

pub const BASE_URL_VAR: &str = "AUTH_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "AUTH_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "AUTH_CONNECT_TIMEOUT_SECS";

/// Path of the Google sign-up endpoint, relative to the base URL.
pub const GOOGLE_SIGNUP_PATH: &str = "/auth/google/signup";

/// Optional transport timeouts. `None` keeps the HTTP client default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

impl AuthConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeouts: HttpTimeouts::default() }
    }

    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `AUTH_BASE_URL`
    ///
    /// Optional:
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: client default when absent
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: client default when absent
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::MissingConfig`] if the base URL is unset or empty.
    pub fn from_env() -> Result<Self, SignUpError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same resolution as [`AuthConfig::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::MissingConfig`] if the base URL is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SignUpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| SignUpError::MissingConfig { var: BASE_URL_VAR.into() })?;

        let timeouts = HttpTimeouts {
            request_secs: parse_secs(lookup(REQUEST_TIMEOUT_VAR)),
            connect_secs: parse_secs(lookup(CONNECT_TIMEOUT_VAR)),
        };

        Ok(Self { timeouts, ..Self::new(base_url) })
    }

    /// Full URL of the Google sign-up endpoint.
    #[must_use]
    pub fn signup_url(&self) -> String {
        format!("{}{GOOGLE_SIGNUP_PATH}", self.base_url)
    }
}

fn parse_secs(raw: Option<String>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
