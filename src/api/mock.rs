#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::UiError;

use super::client::ApiClient;
use super::types::{
    Appointment, Doctor, Patient, PatientRegistration, STATUS_COMPLETED, STATUS_SCHEDULED,
};

/// Canned in-memory API client for tests.
///
/// State is shared across clones so a test can seed data and inspect the
/// recorded calls through its own handle.
#[derive(Clone, Default)]
pub struct MockApiClient {
    pub doctors: Arc<Mutex<Vec<Doctor>>>,
    pub appointments: Arc<Mutex<Vec<Appointment>>>,
    pub patient: Arc<Mutex<Option<Patient>>>,
    /// Token handed out by all three login endpoints; `None` rejects logins.
    pub issued_token: Arc<Mutex<Option<String>>>,
    /// While set, every call fails with a clone of this error.
    pub fail_with: Arc<Mutex<Option<UiError>>>,
    /// Names of the endpoint methods invoked, in order.
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose logins succeed with `token`.
    pub fn with_token(token: &str) -> Self {
        let mock = Self::default();
        *mock.issued_token.lock().unwrap() = Some(token.to_owned());
        mock
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<(), UiError> {
        self.calls.lock().unwrap().push(call.to_owned());
        match self.fail_with.lock().unwrap().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn login(&self, call: &str) -> Result<String, UiError> {
        self.record(call)?;
        self.issued_token
            .lock()
            .unwrap()
            .clone()
            .ok_or(UiError::Rejected {
                status: 401,
                message: "Invalid credentials!".to_owned(),
            })
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn get_doctors(&self) -> Result<Vec<Doctor>, UiError> {
        self.record("get_doctors")?;
        Ok(self.doctors.lock().unwrap().clone())
    }

    async fn filter_doctors(
        &self,
        name: Option<&str>,
        time: Option<&str>,
        specialty: Option<&str>,
    ) -> Result<Vec<Doctor>, UiError> {
        self.record("filter_doctors")?;
        let doctors = self.doctors.lock().unwrap();
        Ok(doctors
            .iter()
            .filter(|doctor| {
                name.is_none_or(|n| doctor.name.to_lowercase().contains(&n.to_lowercase()))
                    && time.is_none_or(|t| {
                        doctor.available_times.iter().any(|slot| slot.contains(t))
                    })
                    && specialty.is_none_or(|s| doctor.specialty.eq_ignore_ascii_case(s))
            })
            .cloned()
            .collect())
    }

    async fn save_doctor(&self, doctor: &Doctor, _token: &str) -> Result<String, UiError> {
        self.record("save_doctor")?;
        let mut doctors = self.doctors.lock().unwrap();
        let mut saved = doctor.clone();
        saved.id = Some(doctors.len() as i64 + 1);
        saved.password = None;
        doctors.push(saved);
        Ok("Doctor added to db".to_owned())
    }

    async fn delete_doctor(&self, id: i64, _token: &str) -> Result<String, UiError> {
        self.record("delete_doctor")?;
        let mut doctors = self.doctors.lock().unwrap();
        let len_before = doctors.len();
        doctors.retain(|doctor| doctor.id != Some(id));
        if doctors.len() < len_before {
            Ok("Doctor deleted successfully".to_owned())
        } else {
            Err(UiError::Rejected {
                status: 404,
                message: "Doctor not found".to_owned(),
            })
        }
    }

    async fn admin_login(&self, _username: &str, _password: &str) -> Result<String, UiError> {
        self.login("admin_login")
    }

    async fn doctor_login(&self, _email: &str, _password: &str) -> Result<String, UiError> {
        self.login("doctor_login")
    }

    async fn patient_signup(
        &self,
        _registration: &PatientRegistration,
    ) -> Result<String, UiError> {
        self.record("patient_signup")?;
        Ok("Signup successful".to_owned())
    }

    async fn patient_login(&self, _email: &str, _password: &str) -> Result<String, UiError> {
        self.login("patient_login")
    }

    async fn get_patient(&self, _token: &str) -> Result<Patient, UiError> {
        self.record("get_patient")?;
        self.patient
            .lock()
            .unwrap()
            .clone()
            .ok_or(UiError::Rejected {
                status: 404,
                message: "Patient not found".to_owned(),
            })
    }

    async fn get_patient_appointments(
        &self,
        id: i64,
        user: &str,
        _token: &str,
    ) -> Result<Vec<Appointment>, UiError> {
        self.record("get_patient_appointments")?;
        let appointments = self.appointments.lock().unwrap();
        Ok(appointments
            .iter()
            .filter(|appointment| match user {
                "doctor" => appointment.doctor_id == id,
                _ => appointment.patient_id == id,
            })
            .cloned()
            .collect())
    }

    async fn filter_appointments(
        &self,
        condition: Option<&str>,
        name: Option<&str>,
        _token: &str,
    ) -> Result<Vec<Appointment>, UiError> {
        self.record("filter_appointments")?;

        let status = match condition {
            None => None,
            Some(c) if c.eq_ignore_ascii_case("future") => Some(STATUS_SCHEDULED),
            Some(c) if c.eq_ignore_ascii_case("past") => Some(STATUS_COMPLETED),
            Some(_) => {
                return Err(UiError::Rejected {
                    status: 400,
                    message: "Invalid condition".to_owned(),
                })
            }
        };

        let appointments = self.appointments.lock().unwrap();
        Ok(appointments
            .iter()
            .filter(|appointment| {
                status.is_none_or(|s| appointment.status == s)
                    && name.is_none_or(|n| {
                        appointment
                            .doctor_name
                            .to_lowercase()
                            .contains(&n.to_lowercase())
                    })
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn doctor(id: i64, name: &str, specialty: &str, slots: &[&str]) -> Doctor {
        Doctor {
            id: Some(id),
            name: name.to_owned(),
            email: format!("doc{id}@clinic.com"),
            phone: String::new(),
            password: None,
            specialty: specialty.to_owned(),
            available_times: slots.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    fn appointment(id: i64, doctor: &str, status: i32) -> Appointment {
        Appointment {
            id,
            doctor_id: 1,
            doctor_name: doctor.to_owned(),
            patient_id: 1,
            patient_name: "Lena Fischer".to_owned(),
            patient_email: String::new(),
            patient_phone: String::new(),
            patient_address: String::new(),
            appointment_time: NaiveDate::from_ymd_opt(2025, 6, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            status,
        }
    }

    #[tokio::test]
    async fn test_filter_doctors_wildcards_return_all() {
        let mock = MockApiClient::new();
        mock.doctors.lock().unwrap().extend([
            doctor(1, "Dr. Amira Hassan", "Cardiology", &["09:00-10:00"]),
            doctor(2, "Dr. Jonas Weber", "Dermatology", &["14:00-15:00"]),
        ]);

        let all = mock.filter_doctors(None, None, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_filter_doctors_by_each_dimension() {
        let mock = MockApiClient::new();
        mock.doctors.lock().unwrap().extend([
            doctor(1, "Dr. Amira Hassan", "Cardiology", &["09:00-10:00"]),
            doctor(2, "Dr. Jonas Weber", "Dermatology", &["14:00-15:00"]),
        ]);

        let by_name = mock.filter_doctors(Some("amira"), None, None).await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Dr. Amira Hassan");

        let by_time = mock.filter_doctors(None, Some("14:00"), None).await.unwrap();
        assert_eq!(by_time.len(), 1);
        assert_eq!(by_time[0].name, "Dr. Jonas Weber");

        let by_specialty = mock
            .filter_doctors(None, None, Some("cardiology"))
            .await
            .unwrap();
        assert_eq!(by_specialty.len(), 1);
    }

    #[tokio::test]
    async fn test_login_rejected_without_issued_token() {
        let mock = MockApiClient::new();
        let result = mock.admin_login("admin", "secret").await;
        assert_eq!(
            result.unwrap_err(),
            UiError::Rejected {
                status: 401,
                message: "Invalid credentials!".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn test_filter_appointments_by_condition() {
        let mock = MockApiClient::with_token("tok");
        mock.appointments.lock().unwrap().extend([
            appointment(1, "Dr. Amira Hassan", STATUS_SCHEDULED),
            appointment(2, "Dr. Amira Hassan", STATUS_COMPLETED),
        ]);

        let future = mock
            .filter_appointments(Some("future"), None, "tok")
            .await
            .unwrap();
        assert_eq!(future.len(), 1);
        assert_eq!(future[0].status, STATUS_SCHEDULED);

        let invalid = mock.filter_appointments(Some("soon"), None, "tok").await;
        assert!(invalid.is_err());
    }

    #[tokio::test]
    async fn test_forced_failure() {
        let mock = MockApiClient::new();
        *mock.fail_with.lock().unwrap() = Some(UiError::Network("connection refused".to_owned()));

        assert!(mock.get_doctors().await.is_err());
        assert_eq!(mock.recorded_calls(), vec!["get_doctors"]);
    }
}
