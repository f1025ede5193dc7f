//! # google-signup
//!
//! Client-side Google sign-up action. Posts the sign-up form to the auth
//! backend, then stores the issued session and tells the user how it went.
//!
//! DESIGN
//! ======
//! Every outside concern is a capability passed in by the host: the HTTP
//! call (`api::AuthApi`), the session store (`session::SessionStore`),
//! the modal (`ui::Notifier`) and routing (`ui::Navigator`). The action in
//! `signup` only sequences them.

pub mod api;
pub mod config;
pub mod session;
pub mod signup;
pub mod types;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use api::{AuthApi, HttpAuthApi};
pub use config::AuthConfig;
pub use session::{MemorySessionStore, SessionStore};
pub use signup::{MutationStatus, SignUpAction, SignUpOutcome};
pub use types::{Company, SessionTokens, SignUpError, SignUpRequest, SignUpResponse, User};
pub use ui::{DismissCallback, Navigator, Notifier};
