//! Shared fixtures: sample payloads, recording collaborators, and an
//! in-process auth backend.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;

use crate::api::AuthApi;
use crate::session::SessionStore;
use crate::types::{Company, SessionTokens, SignUpError, SignUpRequest, SignUpResponse, User};
use crate::ui::{DismissCallback, Navigator, Notifier};

// =============================================================================
// FIXTURES
// =============================================================================

pub fn sample_user() -> User {
    User {
        id: 42,
        name: "Kim Minsu".into(),
        email: "minsu@example.com".into(),
        employee_number: "E-0042".into(),
        phone_number: Some("010-1234-5678".into()),
        image_url: None,
        is_admin: false,
        auth_provider: Some("google".into()),
        company: Company { company_name: "Acme".into() },
    }
}

pub fn sample_request() -> SignUpRequest {
    SignUpRequest {
        token: "google-id-token".into(),
        name: "Kim Minsu".into(),
        employee_number: "E-0042".into(),
        phone_number: "010-1234-5678".into(),
        company_code: "ACME".into(),
    }
}

pub fn sample_response() -> SignUpResponse {
    SignUpResponse { user: sample_user(), access_token: "A".into(), refresh_token: "R".into() }
}

pub fn success_body() -> String {
    serde_json::to_string(&sample_response()).unwrap()
}

// =============================================================================
// RECORDING COLLABORATORS
// =============================================================================

/// Side effects in the order they happened, shared across collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetTokens(SessionTokens),
    SetUser(User),
    Show { message: String, has_dismiss: bool },
    GoTo(String),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub struct RecordingSession {
    pub log: CallLog,
}

impl SessionStore for RecordingSession {
    fn set_tokens(&self, tokens: SessionTokens) {
        self.log.lock().unwrap().push(Call::SetTokens(tokens));
    }

    fn set_user(&self, user: User) {
        self.log.lock().unwrap().push(Call::SetUser(user));
    }
}

/// Records each notification and keeps its dismissal callback so tests
/// can play the user closing the modal.
pub struct RecordingNotifier {
    pub log: CallLog,
    pub pending_dismiss: Mutex<Vec<DismissCallback>>,
}

impl RecordingNotifier {
    pub fn dismiss_all(&self) {
        let callbacks: Vec<DismissCallback> = self.pending_dismiss.lock().unwrap().drain(..).collect();
        for cb in callbacks {
            cb();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, on_dismiss: Option<DismissCallback>) {
        self.log
            .lock()
            .unwrap()
            .push(Call::Show { message: message.to_string(), has_dismiss: on_dismiss.is_some() });
        if let Some(cb) = on_dismiss {
            self.pending_dismiss.lock().unwrap().push(cb);
        }
    }
}

pub struct RecordingNavigator {
    pub log: CallLog,
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.log.lock().unwrap().push(Call::GoTo(path.to_string()));
    }
}

/// Recording session, notifier and navigator sharing one log.
pub struct Recorders {
    pub log: CallLog,
    pub session: Arc<RecordingSession>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Recorders {
    pub fn new() -> Self {
        let log: CallLog = Arc::default();
        Self {
            session: Arc::new(RecordingSession { log: log.clone() }),
            notifier: Arc::new(RecordingNotifier { log: log.clone(), pending_dismiss: Mutex::new(Vec::new()) }),
            navigator: Arc::new(RecordingNavigator { log: log.clone() }),
            log,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }
}

// =============================================================================
// MOCK API
// =============================================================================

/// Scripted [`AuthApi`] that hands out queued results in order.
pub struct MockApi {
    results: Mutex<Vec<Result<SignUpResponse, SignUpError>>>,
    pub requests: Mutex<Vec<SignUpRequest>>,
}

impl MockApi {
    pub fn new(results: Vec<Result<SignUpResponse, SignUpError>>) -> Self {
        Self { results: Mutex::new(results), requests: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl AuthApi for MockApi {
    async fn google_sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, SignUpError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            Err(SignUpError::Request("no scripted result".into()))
        } else {
            results.remove(0)
        }
    }
}

// =============================================================================
// IN-PROCESS BACKEND
// =============================================================================

#[derive(Clone)]
struct Backend {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

async fn handle_signup(State(backend): State<Backend>, body: String) -> impl IntoResponse {
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
    backend.received.lock().unwrap().push(parsed);
    (backend.status, [(header::CONTENT_TYPE, "application/json")], backend.body)
}

/// Handle to a running fake auth backend.
pub struct TestBackend {
    pub base_url: String,
    pub received: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl TestBackend {
    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.received.lock().unwrap().clone()
    }
}

/// Serve `POST /auth/google/signup` on an ephemeral port, always answering
/// with `status` and `body`.
pub async fn spawn_backend(status: StatusCode, body: impl Into<String>) -> TestBackend {
    let received = Arc::new(Mutex::new(Vec::new()));
    let backend = Backend { status, body: body.into(), received: received.clone() };
    let app = Router::new()
        .route("/auth/google/signup", post(handle_signup))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestBackend { base_url: format!("http://{addr}"), received }
}

/// A local address with nothing listening on it.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
