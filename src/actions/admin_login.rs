use chrono::Utc;

use crate::api::ApiClient;
use crate::events::{dispatch, SessionEvent};
use crate::session::{Role, SessionStore};
use crate::UiError;

/// Admin credential check: on success the token and `admin` role are
/// written to the session store.
pub struct AdminLoginAction<A, S> {
    api: A,
    store: S,
}

impl<A: ApiClient, S: SessionStore> AdminLoginAction<A, S> {
    pub fn new(api: A, store: S) -> Self {
        AdminLoginAction { api, store }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "admin_login", skip_all, err)
    )]
    pub async fn execute(&self, username: &str, password: &str) -> Result<(), UiError> {
        match self.api.admin_login(username, password).await {
            Ok(token) => {
                self.store.set_token(&token);
                self.store.set_role(Role::Admin);

                dispatch(SessionEvent::LoginSuccess {
                    role: Role::Admin,
                    at: Utc::now(),
                })
                .await;

                log::info!(
                    target: "mediboard_session",
                    "msg=\"login success\" role=admin"
                );

                Ok(())
            }
            Err(err) => {
                dispatch(SessionEvent::LoginFailed {
                    role: Role::Admin,
                    reason: err.to_string(),
                    at: Utc::now(),
                })
                .await;

                log::warn!(
                    target: "mediboard_session",
                    "msg=\"login failed\" role=admin err={}",
                    err
                );

                Err(err)
            }
        }
    }
}
