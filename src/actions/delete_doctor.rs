use chrono::Utc;

use crate::api::ApiClient;
use crate::events::{dispatch, SessionEvent};
use crate::session::SessionStore;
use crate::UiError;

/// Removes a doctor from the roster. Requires an admin token in the
/// store; the missing-token precondition short-circuits before any
/// network call.
pub struct DeleteDoctorAction<A, S> {
    api: A,
    store: S,
}

impl<A: ApiClient, S: SessionStore> DeleteDoctorAction<A, S> {
    pub fn new(api: A, store: S) -> Self {
        DeleteDoctorAction { api, store }
    }

    /// Returns the server's confirmation message.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_doctor", skip_all, err)
    )]
    pub async fn execute(&self, doctor_id: i64) -> Result<String, UiError> {
        let Some(token) = self.store.token() else {
            log::warn!(
                target: "mediboard_session",
                "msg=\"delete doctor without token\""
            );
            return Err(UiError::MissingToken);
        };

        let message = self.api.delete_doctor(doctor_id, &token).await?;

        dispatch(SessionEvent::DoctorDeleted {
            doctor_id,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "mediboard_session",
            "msg=\"doctor deleted\" doctor_id={}",
            doctor_id
        );

        Ok(message)
    }
}
