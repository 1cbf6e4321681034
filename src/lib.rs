pub mod actions;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod events;
pub mod header;
pub mod listing;
pub mod modal;
pub mod session;
pub mod validators;

pub use api::ApiClient;
pub use api::HttpApiClient;
pub use config::ClientConfig;
pub use config::PagePaths;
pub use events::register_event_listeners;
pub use header::HeaderView;
pub use session::FileSessionStore;
pub use session::InMemorySessionStore;
pub use session::Role;
pub use session::RoleState;
pub use session::Session;
pub use session::SessionStore;

#[cfg(any(test, feature = "mocks"))]
pub use api::MockApiClient;
#[cfg(any(test, feature = "mocks"))]
pub use modal::RecordingModal;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// The request never produced a response (DNS, connect, timeout).
    Network(String),
    /// The server answered with a non-2xx status and an optional message body.
    Rejected { status: u16, message: String },
    /// An authenticated action was attempted with no token in the store.
    MissingToken,
    /// The response body could not be decoded into the expected shape.
    InvalidResponse(String),
    /// Client-side form validation failed before any network call.
    Invalid(String),
}

impl UiError {
    /// The blocking notice shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            UiError::Network(_) | UiError::InvalidResponse(_) => {
                "Something went wrong. Please try again later.".to_owned()
            }
            UiError::Rejected { message, .. } if !message.is_empty() => message.clone(),
            UiError::Rejected { .. } => "Request failed. Please try again.".to_owned(),
            UiError::MissingToken => {
                "Authentication token not found. Please log in again.".to_owned()
            }
            UiError::Invalid(reason) => reason.clone(),
        }
    }
}

impl std::error::Error for UiError {}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Network(detail) => write!(f, "Network or server error: {}", detail),
            UiError::Rejected { status, message } => {
                write!(f, "Request rejected with HTTP {}: {}", status, message)
            }
            UiError::MissingToken => write!(f, "Authentication token not found"),
            UiError::InvalidResponse(detail) => write!(f, "Malformed response: {}", detail),
            UiError::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}
