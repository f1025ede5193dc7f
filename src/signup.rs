//! Google sign-up action.
//!
//! DESIGN
//! ======
//! One call of [`SignUpAction::sign_up`] makes one request and runs exactly
//! one outcome branch:
//!
//! - success: tokens, then user, into the session store; then a confirmation
//!   modal whose dismissal routes to `/`.
//! - failure: an error modal with the server message or a fixed fallback.
//!   The session is untouched and nothing navigates.
//!
//! Double submits are not deduplicated here; the caller disables its submit
//! control while [`MutationStatus::Pending`].

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::{AuthApi, HttpAuthApi};
use crate::config::AuthConfig;
use crate::session::SessionStore;
use crate::types::{SignUpError, SignUpRequest, SignUpResponse, User};
use crate::ui::{Navigator, Notifier, ROOT_PATH};

/// Confirmation shown after a completed sign-up.
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "회원가입이 완료되었습니다!";

/// Lifecycle of the most recent invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Terminal result of one sign-up.
#[derive(Debug)]
pub enum SignUpOutcome {
    /// Session stored; confirmation shown.
    Succeeded { user: User },
    /// Error shown with `message`.
    Failed { error: SignUpError, message: String },
}

impl SignUpOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

pub struct SignUpAction {
    api: Arc<dyn AuthApi>,
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    status: Mutex<MutationStatus>,
}

impl SignUpAction {
    #[must_use]
    pub fn new(
        api: Arc<dyn AuthApi>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { api, session, notifier, navigator, status: Mutex::new(MutationStatus::Idle) }
    }

    /// Wire the action to the HTTP backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn from_config(
        config: &AuthConfig,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, SignUpError> {
        let api = HttpAuthApi::new(config)?;
        Ok(Self::new(Arc::new(api), session, notifier, navigator))
    }

    #[must_use]
    pub fn status(&self) -> MutationStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return to [`MutationStatus::Idle`].
    pub fn reset(&self) {
        self.set_status(MutationStatus::Idle);
    }

    /// Submit `request` and run the matching outcome branch.
    pub async fn sign_up(&self, request: &SignUpRequest) -> SignUpOutcome {
        self.set_status(MutationStatus::Pending);

        match self.api.google_sign_up(request).await {
            Ok(response) => self.on_success(response),
            Err(error) => self.on_error(error),
        }
    }

    fn on_success(&self, response: SignUpResponse) -> SignUpOutcome {
        let (tokens, user) = response.into_parts();
        tracing::info!(user_id = user.id, "google sign-up succeeded");

        self.session.set_tokens(tokens);
        self.session.set_user(user.clone());

        let navigator = Arc::clone(&self.navigator);
        self.notifier.show(
            SIGN_UP_SUCCESS_MESSAGE,
            Some(Box::new(move || navigator.go_to(ROOT_PATH))),
        );

        self.set_status(MutationStatus::Succeeded);
        SignUpOutcome::Succeeded { user }
    }

    fn on_error(&self, error: SignUpError) -> SignUpOutcome {
        tracing::warn!(error = %error, "google sign-up failed");

        let message = error.user_message().to_string();
        self.notifier.show(&message, None);

        self.set_status(MutationStatus::Failed);
        SignUpOutcome::Failed { error, message }
    }

    fn set_status(&self, status: MutationStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }
}

#[cfg(test)]
#[path = "signup_test.rs"]
mod tests;
