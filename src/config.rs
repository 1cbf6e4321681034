//! Configuration for the presentation layer.
//!
//! Holds the deployment-specific API base URL, the HTTP request timeout,
//! and the page paths the header and dashboards navigate between.
//!
//! # Example
//!
//! ```rust
//! use mediboard::config::ClientConfig;
//!
//! let config = ClientConfig {
//!     api_base_url: "https://cms.example.org:8080".to_owned(),
//!     ..Default::default()
//! };
//! ```

use std::time::Duration;

/// Top-level configuration for the client layer.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all API requests, without a trailing slash.
    pub api_base_url: String,

    /// Timeout applied to every HTTP request.
    ///
    /// Default: 10 seconds
    pub request_timeout: Duration,

    /// Paths of the pages the UI navigates between.
    pub paths: PagePaths,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_owned(),
            request_timeout: Duration::from_secs(10),
            paths: PagePaths::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at the given deployment.
    ///
    /// A trailing slash on the base URL is stripped so path building can
    /// always insert its own separators.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut base = api_base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            api_base_url: base,
            ..Default::default()
        }
    }
}

/// Paths of the role-specific pages.
///
/// These mirror the static page layout served next to the API: the site
/// root acts as the landing page and wipes the session when visited.
#[derive(Debug, Clone)]
pub struct PagePaths {
    /// Landing page. Rendering here always clears the session.
    pub root: String,
    /// Anonymous patient dashboard (login/signup entry points).
    pub patient_dashboard: String,
    /// Dashboard shown to an authenticated doctor.
    pub doctor_dashboard: String,
    /// Dashboard shown to an authenticated patient.
    pub logged_patient_dashboard: String,
    /// Appointment list for an authenticated patient.
    pub patient_appointments: String,
}

impl Default for PagePaths {
    fn default() -> Self {
        Self {
            root: "/".to_owned(),
            patient_dashboard: "/pages/patientDashboard.html".to_owned(),
            doctor_dashboard: "/pages/doctorDashboard.html".to_owned(),
            logged_patient_dashboard: "/pages/loggedPatientDashboard.html".to_owned(),
            patient_appointments: "/pages/patientAppointments.html".to_owned(),
        }
    }
}

impl PagePaths {
    /// True when `path` addresses the site root (landing page).
    ///
    /// Matches any directory-style path: the landing check in the original
    /// UI treats every path ending in `/` as the landing page, and all
    /// dashboard pages are `.html` files.
    pub fn is_site_root(&self, path: &str) -> bool {
        path.ends_with('/')
    }
}
