//! Typed client for the hospital CMS REST API.

mod client;
mod http;
#[cfg(any(test, feature = "mocks"))]
mod mock;
pub mod types;

pub use client::ApiClient;
pub use http::HttpApiClient;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockApiClient;
