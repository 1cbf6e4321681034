use chrono::Utc;

use crate::api::ApiClient;
use crate::events::{dispatch, SessionEvent};
use crate::session::{Role, SessionStore};
use crate::UiError;

/// Doctor login: on success the token and `doctor` role are written to
/// the session store.
pub struct DoctorLoginAction<A, S> {
    api: A,
    store: S,
}

impl<A: ApiClient, S: SessionStore> DoctorLoginAction<A, S> {
    pub fn new(api: A, store: S) -> Self {
        DoctorLoginAction { api, store }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "doctor_login", skip_all, err)
    )]
    pub async fn execute(&self, email: &str, password: &str) -> Result<(), UiError> {
        match self.api.doctor_login(email, password).await {
            Ok(token) => {
                self.store.set_token(&token);
                self.store.set_role(Role::Doctor);

                dispatch(SessionEvent::LoginSuccess {
                    role: Role::Doctor,
                    at: Utc::now(),
                })
                .await;

                log::info!(
                    target: "mediboard_session",
                    "msg=\"login success\" role=doctor"
                );

                Ok(())
            }
            Err(err) => {
                dispatch(SessionEvent::LoginFailed {
                    role: Role::Doctor,
                    reason: err.to_string(),
                    at: Utc::now(),
                })
                .await;

                log::warn!(
                    target: "mediboard_session",
                    "msg=\"login failed\" role=doctor err={}",
                    err
                );

                Err(err)
            }
        }
    }
}
