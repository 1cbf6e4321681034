//! Logged-in patient controller: own appointments and booking handoff.

use crate::api::types::{Appointment, Doctor};
use crate::api::ApiClient;
use crate::listing::{render_records, Generations, ListingUpdate};
use crate::session::SessionStore;
use crate::UiError;

use super::doctor_card::BookingHandoff;
use super::{escape_html, NO_APPOINTMENTS_FOUND};

/// Controller for the logged-patient appointment views.
pub struct LoggedPatientDashboard<A, S> {
    api: A,
    store: S,
    generations: Generations,
}

impl<A, S> LoggedPatientDashboard<A, S>
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

    fn token(&self, context: &str) -> Result<String, UiError> {
        self.store.token().ok_or_else(|| {
            log::warn!(
                target: "mediboard_session",
                "msg=\"{} without token\"",
                context
            );
            UiError::MissingToken
        })
    }

    /// All appointments for the logged-in patient.
    ///
    /// The patient id comes from the token lookup, then the shared
    /// appointments endpoint is queried with `user=patient`.
    pub async fn load_appointments(&self) -> Result<ListingUpdate, UiError> {
        let token = self.token("appointment load")?;

        let ticket = self.generations.begin();

        let patient = self.api.get_patient(&token).await?;
        let patient_id = patient.id.ok_or_else(|| {
            UiError::InvalidResponse("patient record without id".to_owned())
        })?;
        let appointments = self
            .api
            .get_patient_appointments(patient_id, "patient", &token)
            .await?;

        if !self.generations.commit(ticket) {
            return Ok(ListingUpdate::Stale);
        }

        Ok(Self::rows(&appointments))
    }

    /// Appointments filtered by condition (`future`/`past`) and doctor
    /// name; `None` means no constraint on that dimension.
    pub async fn filter_appointments(
        &self,
        condition: Option<&str>,
        doctor_name: Option<&str>,
    ) -> Result<ListingUpdate, UiError> {
        let token = self.token("appointment filter")?;

        let ticket = self.generations.begin();

        let appointments = self
            .api
            .filter_appointments(condition, doctor_name, &token)
            .await?;

        if !self.generations.commit(ticket) {
            return Ok(ListingUpdate::Stale);
        }

        Ok(Self::rows(&appointments))
    }

    /// Starts the booking flow for a doctor card: fetches the patient
    /// snapshot and hands both records to the host's booking overlay.
    pub async fn book(&self, doctor: &Doctor) -> Result<BookingHandoff, UiError> {
        let token = self.token("booking")?;
        let patient = self.api.get_patient(&token).await?;
        Ok(BookingHandoff {
            doctor: doctor.clone(),
            patient,
        })
    }

    fn rows(appointments: &[Appointment]) -> ListingUpdate {
        ListingUpdate::Replace(render_records(
            appointments,
            NO_APPOINTMENTS_FOUND,
            appointment_row,
        ))
    }
}

fn appointment_row(appointment: &Appointment) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&appointment.doctor_name),
        appointment.appointment_time.format("%Y-%m-%d %H:%M"),
        appointment.status_label(),
    )
}
