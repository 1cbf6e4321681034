use chrono::Utc;

use crate::api::types::Doctor;
use crate::api::ApiClient;
use crate::events::{dispatch, SessionEvent};
use crate::session::SessionStore;
use crate::validators::{validate_email, validate_name, validate_phone};
use crate::UiError;

/// Adds a doctor to the roster. Requires an admin token in the store;
/// the missing-token precondition short-circuits before any network call.
pub struct AddDoctorAction<A, S> {
    api: A,
    store: S,
}

impl<A: ApiClient, S: SessionStore> AddDoctorAction<A, S> {
    pub fn new(api: A, store: S) -> Self {
        AddDoctorAction { api, store }
    }

    /// Returns the server's confirmation message.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "add_doctor", skip_all, err)
    )]
    pub async fn execute(&self, doctor: &Doctor) -> Result<String, UiError> {
        let Some(token) = self.store.token() else {
            log::warn!(
                target: "mediboard_session",
                "msg=\"add doctor without token\""
            );
            return Err(UiError::MissingToken);
        };

        validate_name(&doctor.name).map_err(|err| UiError::Invalid(err.to_string()))?;
        validate_email(&doctor.email).map_err(|err| UiError::Invalid(err.to_string()))?;
        validate_phone(&doctor.phone).map_err(|err| UiError::Invalid(err.to_string()))?;

        let message = self.api.save_doctor(doctor, &token).await?;

        dispatch(SessionEvent::DoctorAdded {
            name: doctor.name.clone(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "mediboard_session",
            "msg=\"doctor added\""
        );

        Ok(message)
    }
}
