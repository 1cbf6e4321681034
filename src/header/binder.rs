//! Button binder: one activation effect per rendered control.

use chrono::Utc;

use crate::config::PagePaths;
use crate::events::{dispatch, SessionEvent};
use crate::modal::ModalController;
use crate::session::{Role, RoleState, SessionStore, TOKEN_KEY};

use super::{Control, ControlKind};

/// What happened when a control was activated.
///
/// Modal opening is performed against the injected controller before this
/// is returned; navigation is left to the host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The host should navigate to this path.
    Navigate(String),
    /// The named modal was opened; stay on the page.
    ModalOpened(&'static str),
}

/// Binds header controls to their activation effects.
///
/// Owned by whoever mounted the render pass that produced the controls;
/// a new render replaces the binder along with the markup, which is what
/// keeps binding idempotent per render cycle.
pub struct ButtonBinder<'a, S: SessionStore, M: ModalController> {
    store: &'a S,
    modal: &'a M,
    paths: &'a PagePaths,
}

impl<'a, S: SessionStore, M: ModalController> ButtonBinder<'a, S, M> {
    pub fn new(store: &'a S, modal: &'a M, paths: &'a PagePaths) -> Self {
        Self { store, modal, paths }
    }

    /// Runs the activation effect for `control`.
    pub async fn activate(&self, control: &Control) -> Activation {
        match &control.kind {
            ControlKind::OpenModal(name) => {
                self.modal.open(name);
                Activation::ModalOpened(name)
            }
            ControlKind::StaffLogout => {
                let role = match self.store.role_state() {
                    RoleState::Known(role) => role,
                    RoleState::Unrecognized(_) | RoleState::Absent => Role::Patient,
                };
                self.store.clear_session();
                log::info!(
                    target: "mediboard_session",
                    "msg=\"logout success\" role={}",
                    role
                );
                dispatch(SessionEvent::LogoutSuccess {
                    role,
                    at: Utc::now(),
                })
                .await;
                Activation::Navigate(self.paths.root.clone())
            }
            ControlKind::PatientLogout => {
                // Token goes, the anonymous patient identity stays.
                self.store.remove(TOKEN_KEY);
                self.store.set_role(Role::Patient);
                log::info!(
                    target: "mediboard_session",
                    "msg=\"logout success\" role={}",
                    Role::LoggedPatient
                );
                dispatch(SessionEvent::LogoutSuccess {
                    role: Role::LoggedPatient,
                    at: Utc::now(),
                })
                .await;
                Activation::Navigate(self.paths.patient_dashboard.clone())
            }
            ControlKind::Navigate(to) => Activation::Navigate(to.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::render;
    use crate::modal::{names, RecordingModal};
    use crate::session::InMemorySessionStore;

    fn find<'c>(controls: &'c [Control], id: &str) -> &'c Control {
        controls
            .iter()
            .find(|control| control.id == id)
            .expect("control present")
    }

    #[tokio::test]
    async fn test_staff_logout_clears_both_keys_and_returns_to_root() {
        let store = InMemorySessionStore::new();
        store.set_role(Role::Admin);
        store.set_token("tok");
        let modal = RecordingModal::new();
        let paths = PagePaths::default();

        let view = render("/pages/adminDashboard.html", &store, &paths).await;
        let binder = ButtonBinder::new(&store, &modal, &paths);

        let activation = binder.activate(find(&view.controls, "logoutBtn")).await;

        assert_eq!(activation, Activation::Navigate("/".to_owned()));
        assert_eq!(store.role_state(), RoleState::Absent);
        assert_eq!(store.token(), None);
    }

    #[tokio::test]
    async fn test_patient_logout_keeps_patient_role() {
        let store = InMemorySessionStore::new();
        store.set_role(Role::LoggedPatient);
        store.set_token("tok");
        let modal = RecordingModal::new();
        let paths = PagePaths::default();

        let view = render("/pages/loggedPatientDashboard.html", &store, &paths).await;
        let binder = ButtonBinder::new(&store, &modal, &paths);

        let activation = binder
            .activate(find(&view.controls, "logoutPatientBtn"))
            .await;

        assert_eq!(
            activation,
            Activation::Navigate(paths.patient_dashboard.clone())
        );
        assert_eq!(store.role_state(), RoleState::Known(Role::Patient));
        assert_eq!(store.token(), None);
    }

    #[tokio::test]
    async fn test_login_trigger_opens_modal_without_session_mutation() {
        let store = InMemorySessionStore::new();
        store.set_role(Role::Patient);
        let modal = RecordingModal::new();
        let paths = PagePaths::default();

        let view = render("/pages/patientDashboard.html", &store, &paths).await;
        let binder = ButtonBinder::new(&store, &modal, &paths);

        let activation = binder.activate(find(&view.controls, "patientLogin")).await;

        assert_eq!(activation, Activation::ModalOpened(names::PATIENT_LOGIN));
        assert_eq!(modal.opened_names(), vec![names::PATIENT_LOGIN]);
        assert_eq!(store.role_state(), RoleState::Known(Role::Patient));
    }

    #[tokio::test]
    async fn test_add_doctor_trigger_opens_modal() {
        let store = InMemorySessionStore::new();
        store.set_role(Role::Admin);
        store.set_token("tok");
        let modal = RecordingModal::new();
        let paths = PagePaths::default();

        let view = render("/pages/adminDashboard.html", &store, &paths).await;
        let binder = ButtonBinder::new(&store, &modal, &paths);

        binder.activate(find(&view.controls, "addDocBtn")).await;

        assert_eq!(modal.opened_names(), vec![names::ADD_DOCTOR]);
    }

    #[tokio::test]
    async fn test_navigation_controls_do_not_touch_session() {
        let store = InMemorySessionStore::new();
        store.set_role(Role::LoggedPatient);
        store.set_token("tok");
        let modal = RecordingModal::new();
        let paths = PagePaths::default();

        let view = render("/pages/loggedPatientDashboard.html", &store, &paths).await;
        let binder = ButtonBinder::new(&store, &modal, &paths);

        let activation = binder
            .activate(find(&view.controls, "patientAppointments"))
            .await;

        assert_eq!(
            activation,
            Activation::Navigate(paths.patient_appointments.clone())
        );
        assert_eq!(store.token(), Some("tok".to_owned()));
        assert_eq!(store.role_state(), RoleState::Known(Role::LoggedPatient));
    }
}
