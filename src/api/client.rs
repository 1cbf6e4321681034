//! API client trait.

use async_trait::async_trait;

use crate::UiError;

use super::types::{Appointment, Doctor, Patient, PatientRegistration};

/// Typed client for the hospital CMS REST API.
///
/// Implementations:
/// - [`HttpApiClient`](super::HttpApiClient): reqwest-backed client for a
///   real deployment
/// - [`MockApiClient`](super::MockApiClient): canned in-memory client for
///   tests
///
/// Every method maps to one endpoint. `Option` filter parameters mean "no
/// constraint" and translate to the wildcard (empty) path segment on the
/// wire.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// `GET /doctor` — the full doctor roster.
    async fn get_doctors(&self) -> Result<Vec<Doctor>, UiError>;

    /// `GET /doctor/filter/{name}/{time}/{specialty}`.
    async fn filter_doctors(
        &self,
        name: Option<&str>,
        time: Option<&str>,
        specialty: Option<&str>,
    ) -> Result<Vec<Doctor>, UiError>;

    /// `POST /doctor/{token}` — save a new doctor. Returns the server message.
    async fn save_doctor(&self, doctor: &Doctor, token: &str) -> Result<String, UiError>;

    /// `DELETE /doctor/{id}/{token}`. Returns the server message.
    async fn delete_doctor(&self, id: i64, token: &str) -> Result<String, UiError>;

    /// `POST /admin` — admin credential check. Returns the session token.
    async fn admin_login(&self, username: &str, password: &str) -> Result<String, UiError>;

    /// `POST /doctor/login`. Returns the session token.
    async fn doctor_login(&self, email: &str, password: &str) -> Result<String, UiError>;

    /// `POST /patient` — patient signup. Returns the server message.
    async fn patient_signup(&self, registration: &PatientRegistration)
        -> Result<String, UiError>;

    /// `POST /patient/login`. Returns the session token.
    async fn patient_login(&self, email: &str, password: &str) -> Result<String, UiError>;

    /// `GET /patient/{token}` — the patient the token belongs to.
    async fn get_patient(&self, token: &str) -> Result<Patient, UiError>;

    /// `GET /patient/{id}/{user}/{token}` — appointments for a patient or
    /// doctor dashboard (`user` is `"patient"` or `"doctor"`).
    async fn get_patient_appointments(
        &self,
        id: i64,
        user: &str,
        token: &str,
    ) -> Result<Vec<Appointment>, UiError>;

    /// `GET /patient/filter/{condition}/{name}/{token}` — appointments
    /// filtered by condition (`future`/`past`) and doctor name.
    async fn filter_appointments(
        &self,
        condition: Option<&str>,
        name: Option<&str>,
        token: &str,
    ) -> Result<Vec<Appointment>, UiError>;
}
