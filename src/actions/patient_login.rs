use chrono::Utc;

use crate::api::ApiClient;
use crate::events::{dispatch, SessionEvent};
use crate::session::{Role, SessionStore};
use crate::UiError;

/// Patient login: on success the token is stored and the role becomes
/// `loggedPatient`. The caller navigates to the logged-patient dashboard.
pub struct PatientLoginAction<A, S> {
    api: A,
    store: S,
}

impl<A: ApiClient, S: SessionStore> PatientLoginAction<A, S> {
    pub fn new(api: A, store: S) -> Self {
        PatientLoginAction { api, store }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "patient_login", skip_all, err)
    )]
    pub async fn execute(&self, email: &str, password: &str) -> Result<(), UiError> {
        match self.api.patient_login(email, password).await {
            Ok(token) => {
                self.store.set_token(&token);
                self.store.set_role(Role::LoggedPatient);

                dispatch(SessionEvent::LoginSuccess {
                    role: Role::LoggedPatient,
                    at: Utc::now(),
                })
                .await;

                log::info!(
                    target: "mediboard_session",
                    "msg=\"login success\" role=loggedPatient"
                );

                Ok(())
            }
            Err(err) => {
                dispatch(SessionEvent::LoginFailed {
                    role: Role::LoggedPatient,
                    reason: err.to_string(),
                    at: Utc::now(),
                })
                .await;

                log::warn!(
                    target: "mediboard_session",
                    "msg=\"login failed\" role=loggedPatient err={}",
                    err
                );

                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use crate::session::{InMemorySessionStore, RoleState};

    #[tokio::test]
    async fn test_login_upgrades_role_to_logged_patient() {
        let api = MockApiClient::with_token("pat-token");
        let store = InMemorySessionStore::new();
        store.set_role(Role::Patient);

        let login = PatientLoginAction::new(api, store.clone());
        login.execute("lena@example.com", "secret").await.unwrap();

        assert_eq!(store.token(), Some("pat-token".to_owned()));
        assert_eq!(store.role_state(), RoleState::Known(Role::LoggedPatient));
    }

    #[tokio::test]
    async fn test_login_failure_keeps_anonymous_role() {
        let api = MockApiClient::new();
        let store = InMemorySessionStore::new();
        store.set_role(Role::Patient);

        let login = PatientLoginAction::new(api, store.clone());
        assert!(login.execute("lena@example.com", "wrong").await.is_err());
        assert_eq!(store.role_state(), RoleState::Known(Role::Patient));
        assert_eq!(store.token(), None);
    }
}
