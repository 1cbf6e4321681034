//! Wire types for the REST API.
//!
//! Field names follow the backend's JSON exactly (camelCase).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A doctor record as exchanged with the API.
///
/// `password` is only present when saving a new doctor and is never
/// echoed back by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub specialty: String,
    #[serde(default)]
    pub available_times: Vec<String>,
}

/// A patient record as returned by `GET /patient/{token}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Appointment status: scheduled (upcoming) or completed.
pub const STATUS_SCHEDULED: i32 = 0;
pub const STATUS_COMPLETED: i32 = 1;

/// A flattened appointment record (the API joins doctor and patient in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub patient_id: i64,
    pub patient_name: String,
    #[serde(default)]
    pub patient_email: String,
    #[serde(default)]
    pub patient_phone: String,
    #[serde(default)]
    pub patient_address: String,
    pub appointment_time: NaiveDateTime,
    pub status: i32,
}

impl Appointment {
    /// Calendar date of the appointment, for date-based row filtering.
    pub fn appointment_date(&self) -> NaiveDate {
        self.appointment_time.date()
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            STATUS_SCHEDULED => "Scheduled",
            STATUS_COMPLETED => "Completed",
            _ => "Unknown",
        }
    }
}

// Request bodies

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientCredentials {
    pub email: String,
    pub password: String,
}

/// Patient signup form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

// Response bodies

#[derive(Debug, Deserialize)]
pub struct DoctorListResponse {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentListResponse {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
pub struct PatientResponse {
    pub patient: Patient,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_wire_format() {
        let json = r#"{
            "id": 3,
            "name": "Dr. Amira Hassan",
            "email": "amira@clinic.com",
            "phone": "5551234567",
            "specialty": "Cardiology",
            "availableTimes": ["09:00-10:00", "10:00-11:00"]
        }"#;

        let doctor: Doctor = serde_json::from_str(json).unwrap();
        assert_eq!(doctor.id, Some(3));
        assert_eq!(doctor.specialty, "Cardiology");
        assert_eq!(doctor.available_times.len(), 2);
        assert_eq!(doctor.password, None);
    }

    #[test]
    fn test_doctor_password_not_serialized_when_absent() {
        let doctor = Doctor {
            id: None,
            name: "Dr. Amira Hassan".to_owned(),
            email: "amira@clinic.com".to_owned(),
            phone: String::new(),
            password: None,
            specialty: "Cardiology".to_owned(),
            available_times: vec![],
        };

        let json = serde_json::to_string(&doctor).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_appointment_wire_format() {
        let json = r#"{
            "id": 11,
            "doctorId": 3,
            "doctorName": "Dr. Amira Hassan",
            "patientId": 8,
            "patientName": "Lena Fischer",
            "patientEmail": "lena@example.com",
            "patientPhone": "5559876543",
            "appointmentTime": "2025-06-02T10:30:00",
            "status": 0
        }"#;

        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(
            appointment.appointment_date(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert_eq!(appointment.status_label(), "Scheduled");
    }

    #[test]
    fn test_empty_list_responses_default() {
        let doctors: DoctorListResponse = serde_json::from_str("{}").unwrap();
        assert!(doctors.doctors.is_empty());

        let appointments: AppointmentListResponse = serde_json::from_str("{}").unwrap();
        assert!(appointments.appointments.is_empty());
    }
}
