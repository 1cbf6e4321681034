use chrono::Utc;

use crate::api::types::PatientRegistration;
use crate::api::ApiClient;
use crate::events::{dispatch, SessionEvent};
use crate::validators::{validate_email, validate_name, validate_password, validate_phone};
use crate::UiError;

/// Patient signup. Validates the form before any network call; never
/// mutates the session (the new patient still has to log in).
pub struct PatientSignupAction<A> {
    api: A,
}

impl<A: ApiClient> PatientSignupAction<A> {
    pub fn new(api: A) -> Self {
        PatientSignupAction { api }
    }

    /// Returns the server's confirmation message.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "patient_signup", skip_all, err)
    )]
    pub async fn execute(&self, registration: &PatientRegistration) -> Result<String, UiError> {
        validate(registration)?;

        let message = self.api.patient_signup(registration).await?;

        dispatch(SessionEvent::PatientRegistered {
            email: registration.email.clone(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "mediboard_session",
            "msg=\"patient registered\""
        );

        Ok(message)
    }
}

fn validate(registration: &PatientRegistration) -> Result<(), UiError> {
    validate_name(&registration.name).map_err(|err| UiError::Invalid(err.to_string()))?;
    validate_email(&registration.email).map_err(|err| UiError::Invalid(err.to_string()))?;
    validate_password(&registration.password).map_err(|err| UiError::Invalid(err.to_string()))?;
    validate_phone(&registration.phone).map_err(|err| UiError::Invalid(err.to_string()))?;
    Ok(())
}
