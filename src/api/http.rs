//! reqwest-backed API client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::UiError;

use super::client::ApiClient;
use super::types::{
    AdminCredentials, Appointment, AppointmentListResponse, Doctor, DoctorCredentials,
    DoctorListResponse, MessageResponse, Patient, PatientCredentials, PatientRegistration,
    PatientResponse, TokenResponse,
};

/// HTTP client for the hospital CMS API.
///
/// Thin request/response plumbing: every method issues one request, checks
/// the status, and decodes the JSON body. No retries (failed calls surface
/// straight to the caller as a user notice).
#[derive(Clone)]
pub struct HttpApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Builds a client from the deployment configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, UiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| UiError::Network(err.to_string()))?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            client,
        })
    }

    /// Joins percent-encoded path segments onto the base URL.
    ///
    /// Empty segments are kept: `filter/{name}/{time}/{specialty}` with an
    /// absent filter becomes `filter//...`, the API's wildcard form.
    fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, UiError> {
        let status = resp.status();
        if status.is_success() {
            resp.json::<T>()
                .await
                .map_err(|err| UiError::InvalidResponse(err.to_string()))
        } else {
            // Rejection bodies carry `{ "message": ... }` when the server has
            // something to say; anything else degrades to an empty message.
            let message = resp
                .json::<MessageResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            Err(UiError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, UiError> {
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| UiError::Network(err.to_string()))?;
        Self::decode(resp).await
    }

    async fn post_json<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<T, UiError> {
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| UiError::Network(err.to_string()))?;
        Self::decode(resp).await
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_doctors(&self) -> Result<Vec<Doctor>, UiError> {
        let url = self.endpoint(&["doctor"]);
        let body: DoctorListResponse = self.get_json(url).await?;
        Ok(body.doctors)
    }

    async fn filter_doctors(
        &self,
        name: Option<&str>,
        time: Option<&str>,
        specialty: Option<&str>,
    ) -> Result<Vec<Doctor>, UiError> {
        let url = self.endpoint(&[
            "doctor",
            "filter",
            name.unwrap_or(""),
            time.unwrap_or(""),
            specialty.unwrap_or(""),
        ]);
        let body: DoctorListResponse = self.get_json(url).await?;
        Ok(body.doctors)
    }

    async fn save_doctor(&self, doctor: &Doctor, token: &str) -> Result<String, UiError> {
        let url = self.endpoint(&["doctor", token]);
        let body: MessageResponse = self.post_json(url, doctor).await?;
        Ok(body.message)
    }

    async fn delete_doctor(&self, id: i64, token: &str) -> Result<String, UiError> {
        let url = self.endpoint(&["doctor", &id.to_string(), token]);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|err| UiError::Network(err.to_string()))?;
        let body: MessageResponse = Self::decode(resp).await?;
        Ok(body.message)
    }

    async fn admin_login(&self, username: &str, password: &str) -> Result<String, UiError> {
        let url = self.endpoint(&["admin"]);
        let credentials = AdminCredentials {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let body: TokenResponse = self.post_json(url, &credentials).await?;
        Ok(body.token)
    }

    async fn doctor_login(&self, email: &str, password: &str) -> Result<String, UiError> {
        let url = self.endpoint(&["doctor", "login"]);
        let credentials = DoctorCredentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let body: TokenResponse = self.post_json(url, &credentials).await?;
        Ok(body.token)
    }

    async fn patient_signup(
        &self,
        registration: &PatientRegistration,
    ) -> Result<String, UiError> {
        let url = self.endpoint(&["patient"]);
        let body: MessageResponse = self.post_json(url, registration).await?;
        Ok(body.message)
    }

    async fn patient_login(&self, email: &str, password: &str) -> Result<String, UiError> {
        let url = self.endpoint(&["patient", "login"]);
        let credentials = PatientCredentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let body: TokenResponse = self.post_json(url, &credentials).await?;
        Ok(body.token)
    }

    async fn get_patient(&self, token: &str) -> Result<Patient, UiError> {
        let url = self.endpoint(&["patient", token]);
        let body: PatientResponse = self.get_json(url).await?;
        Ok(body.patient)
    }

    async fn get_patient_appointments(
        &self,
        id: i64,
        user: &str,
        token: &str,
    ) -> Result<Vec<Appointment>, UiError> {
        let url = self.endpoint(&["patient", &id.to_string(), user, token]);
        let body: AppointmentListResponse = self.get_json(url).await?;
        Ok(body.appointments)
    }

    async fn filter_appointments(
        &self,
        condition: Option<&str>,
        name: Option<&str>,
        token: &str,
    ) -> Result<Vec<Appointment>, UiError> {
        let url = self.endpoint(&[
            "patient",
            "filter",
            condition.unwrap_or(""),
            name.unwrap_or(""),
            token,
        ]);
        let body: AppointmentListResponse = self.get_json(url).await?;
        Ok(body.appointments)
    }
}
