//! Session store capability and an in-memory implementation.
//!
//! The host application owns the session (cookies, a global store, a
//! keychain...). The sign-up action only writes to it through
//! [`SessionStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{PoisonError, RwLock};

use crate::types::{SessionTokens, User};

/// Write side of the client session.
///
/// Calls are synchronous and infallible from the caller's point of view.
pub trait SessionStore: Send + Sync {
    /// Persist the access/refresh token pair.
    fn set_tokens(&self, tokens: SessionTokens);

    /// Persist the current user's profile.
    fn set_user(&self, user: User);
}

/// Current tokens and user for the running client.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub tokens: Option<SessionTokens>,
    pub user: Option<User>,
}

/// Process-local [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: RwLock<SessionState>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn tokens(&self) -> Option<SessionTokens> {
        self.snapshot().tokens
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.snapshot().user
    }

    /// True once both a token pair and a user are stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.tokens.is_some() && state.user.is_some()
    }

    /// Drop tokens and user (logout).
    pub fn clear(&self) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = SessionState::default();
    }
}

impl SessionStore for MemorySessionStore {
    fn set_tokens(&self, tokens: SessionTokens) {
        self.state.write().unwrap_or_else(PoisonError::into_inner).tokens = Some(tokens);
    }

    fn set_user(&self, user: User) {
        tracing::debug!(user_id = user.id, "session user set");
        self.state.write().unwrap_or_else(PoisonError::into_inner).user = Some(user);
    }
}
