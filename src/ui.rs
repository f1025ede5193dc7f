//! UI capabilities the sign-up action drives: a modal notifier and a router.

/// Application root; where a completed sign-up lands.
pub const ROOT_PATH: &str = "/";

/// Runs once when the user closes a notification.
pub type DismissCallback = Box<dyn FnOnce() + Send + 'static>;

/// Shows a modal message to the user.
pub trait Notifier: Send + Sync {
    /// Display `message`. If `on_dismiss` is given, the implementation must
    /// call it when the user closes the modal.
    fn show(&self, message: &str, on_dismiss: Option<DismissCallback>);
}

/// Client-side routing.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}
