//! Doctor dashboard controller: the day's appointment table.

use chrono::NaiveDate;

use crate::api::types::Appointment;
use crate::api::ApiClient;
use crate::listing::{render_records, Generations, ListingUpdate};
use crate::session::SessionStore;
use crate::UiError;

use super::{escape_html, NO_APPOINTMENTS_ROW};

/// Controller for the doctor dashboard page.
///
/// Appointments come from the shared patient-appointments endpoint with
/// `user=doctor`; the date and patient-name filters are applied to the
/// returned rows.
pub struct DoctorDashboard<A, S> {
    api: A,
    store: S,
    generations: Generations,
}

impl<A, S> DoctorDashboard<A, S>
where
    A: ApiClient,
    S: SessionStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            generations: Generations::new(),
        }
    }

    /// Loads the appointment table for `selected_date` (the host defaults
    /// this to today) and an optional patient-name search.
    pub async fn load_appointments(
        &self,
        doctor_id: i64,
        selected_date: NaiveDate,
        patient_name: Option<&str>,
    ) -> Result<ListingUpdate, UiError> {
        let Some(token) = self.store.token() else {
            log::warn!(
                target: "mediboard_session",
                "msg=\"appointment load without token\""
            );
            return Err(UiError::MissingToken);
        };

        let ticket = self.generations.begin();

        let appointments = self
            .api
            .get_patient_appointments(doctor_id, "doctor", &token)
            .await?;

        if !self.generations.commit(ticket) {
            return Ok(ListingUpdate::Stale);
        }

        let rows: Vec<&Appointment> = appointments
            .iter()
            .filter(|appointment| {
                appointment.appointment_date() == selected_date
                    && patient_name.is_none_or(|name| {
                        appointment
                            .patient_name
                            .to_lowercase()
                            .contains(&name.to_lowercase())
                    })
            })
            .collect();

        Ok(ListingUpdate::Replace(render_records(
            &rows,
            NO_APPOINTMENTS_ROW,
            |appointment| patient_row(appointment),
        )))
    }
}

fn patient_row(appointment: &Appointment) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&appointment.patient_name),
        escape_html(&appointment.patient_phone),
        escape_html(&appointment.patient_email),
        appointment.appointment_time.format("%H:%M"),
        appointment.status_label(),
    )
}
