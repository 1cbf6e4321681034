//! Role-aware header rendering.
//!
//! The header is rebuilt from session state on every page load. Rendering
//! decides between three outcomes: the anonymous landing header (site
//! root, which also wipes the session), a forced logout/redirect (expired
//! session), or one of four role-specific navigation variants. The
//! returned [`Control`] descriptors are what the host binds activation
//! handlers to; a re-render fully replaces both markup and descriptors, so
//! stale handlers die with their DOM nodes.

mod binder;

pub use binder::{Activation, ButtonBinder};

use chrono::Utc;

use crate::config::PagePaths;
use crate::events::{dispatch, SessionEvent};
use crate::modal;
use crate::session::{Role, RoleState, SessionStore, ROLE_KEY};

/// Notice shown when a privileged role has lost its token.
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired or invalid login. Please log in again.";

/// What a rendered control does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Opens a named overlay dialog; no session mutation.
    OpenModal(&'static str),
    /// Admin/doctor logout: clears role and token, returns to the root.
    StaffLogout,
    /// Patient logout: clears the token only, keeps the anonymous patient
    /// role, and returns to the patient dashboard.
    PatientLogout,
    /// Pure navigation.
    Navigate(String),
}

/// One interactive element of the rendered header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Element id in the markup.
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
}

/// Terminal outcome of a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    /// Mount the markup and bind the controls.
    Mount,
    /// Expired session: surface the notice as a blocking dialog, then
    /// navigate to `to`. Nothing is mounted.
    Redirect { to: String, notice: String },
}

/// Result of rendering the header for the current page and session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub action: HeaderAction,
    pub markup: String,
    pub controls: Vec<Control>,
}

/// Renders the header for `current_path` against the live session state.
///
/// Follows the landing-page guard, the expired-session check, and the
/// role branch in that order; the first two are terminal.
pub async fn render(
    current_path: &str,
    store: &dyn SessionStore,
    paths: &PagePaths,
) -> HeaderView {
    // Landing page: always drop the session and show the brand alone.
    if paths.is_site_root(current_path) {
        store.clear_session();
        return HeaderView {
            action: HeaderAction::Mount,
            markup: format!("<header class=\"header\">\n{}</header>", brand_block()),
            controls: Vec::new(),
        };
    }

    let session = store.snapshot();

    if session.is_expired() {
        // is_expired only holds for a known role
        let role = session.role.role().unwrap_or(Role::Patient);
        store.remove(ROLE_KEY);
        log::warn!(
            target: "mediboard_session",
            "msg=\"expired session, forcing logout\" role={}",
            role
        );
        dispatch(SessionEvent::SessionExpired {
            role,
            at: Utc::now(),
        })
        .await;

        return HeaderView {
            action: HeaderAction::Redirect {
                to: paths.root.clone(),
                notice: SESSION_EXPIRED_NOTICE.to_owned(),
            },
            markup: String::new(),
            controls: Vec::new(),
        };
    }

    let controls = controls_for(&session.role, paths);

    let mut markup = String::from("<header class=\"header\">\n");
    markup.push_str(&brand_block());
    markup.push_str("  <nav>\n");
    for control in &controls {
        markup.push_str(&control_markup(control));
    }
    markup.push_str("  </nav>\n</header>");

    HeaderView {
        action: HeaderAction::Mount,
        markup,
        controls,
    }
}

fn controls_for(role: &RoleState, paths: &PagePaths) -> Vec<Control> {
    match role {
        RoleState::Known(Role::Admin) => vec![
            Control {
                id: "addDocBtn",
                label: "Add Doctor",
                kind: ControlKind::OpenModal(modal::names::ADD_DOCTOR),
            },
            Control {
                id: "logoutBtn",
                label: "Logout",
                kind: ControlKind::StaffLogout,
            },
        ],
        RoleState::Known(Role::Doctor) => vec![
            Control {
                id: "homeBtn",
                label: "Home",
                kind: ControlKind::Navigate(paths.doctor_dashboard.clone()),
            },
            Control {
                id: "logoutBtn",
                label: "Logout",
                kind: ControlKind::StaffLogout,
            },
        ],
        RoleState::Known(Role::Patient) => vec![
            Control {
                id: "patientLogin",
                label: "Login",
                kind: ControlKind::OpenModal(modal::names::PATIENT_LOGIN),
            },
            Control {
                id: "patientSignup",
                label: "Sign Up",
                kind: ControlKind::OpenModal(modal::names::PATIENT_SIGNUP),
            },
        ],
        RoleState::Known(Role::LoggedPatient) => vec![
            Control {
                id: "homeBtn",
                label: "Home",
                kind: ControlKind::Navigate(paths.logged_patient_dashboard.clone()),
            },
            Control {
                id: "patientAppointments",
                label: "Appointments",
                kind: ControlKind::Navigate(paths.patient_appointments.clone()),
            },
            Control {
                id: "logoutPatientBtn",
                label: "Logout",
                kind: ControlKind::PatientLogout,
            },
        ],
        // No role match degrades to a brand-only header, not an error.
        RoleState::Unrecognized(_) | RoleState::Absent => Vec::new(),
    }
}

fn brand_block() -> String {
    concat!(
        "  <div class=\"logo-section\">\n",
        "    <img src=\"../assets/images/logo/logo.png\" alt=\"Hospital CMS Logo\" class=\"logo-img\">\n",
        "    <span class=\"logo-title\">Hospital CMS</span>\n",
        "  </div>\n"
    )
    .to_owned()
}

fn control_markup(control: &Control) -> String {
    match control.kind {
        ControlKind::StaffLogout | ControlKind::PatientLogout => format!(
            "    <a href=\"#\" id=\"{}\">{}</a>\n",
            control.id, control.label
        ),
        ControlKind::OpenModal(_) | ControlKind::Navigate(_) => format!(
            "    <button id=\"{}\" class=\"adminBtn\">{}</button>\n",
            control.id, control.label
        ),
    }
}
