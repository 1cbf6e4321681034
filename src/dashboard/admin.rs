//! Admin dashboard controller: doctor roster management.

use crate::actions::{AddDoctorAction, DeleteDoctorAction};
use crate::api::types::Doctor;
use crate::api::ApiClient;
use crate::listing::{render_records, Generations, ListingUpdate};
use crate::modal::{self, ModalController};
use crate::session::{Role, RoleState, SessionStore};
use crate::UiError;

use super::doctor_card::doctor_card;
use super::{NO_DOCTORS_AVAILABLE, NO_DOCTORS_FOUND};

/// Controller for the admin dashboard page.
pub struct AdminDashboard<A, S, M> {
    api: A,
    store: S,
    modal: M,
    generations: Generations,
}

impl<A, S, M> AdminDashboard<A, S, M>
where
    A: ApiClient + Clone,
    S: SessionStore + Clone,
    M: ModalController,
{
    pub fn new(api: A, store: S, modal: M) -> Self {
        Self {
            api,
            store,
            modal,
            generations: Generations::new(),
        }
    }

    fn cards_markup(&self, doctors: &[Doctor], empty_markup: &str) -> String {
        let role = RoleState::Known(Role::Admin);
        render_records(doctors, empty_markup, |doctor| {
            doctor_card(doctor, &role).markup
        })
    }

    /// Full roster for the initial page load.
    pub async fn load_doctors(&self) -> Result<String, UiError> {
        let doctors = self.api.get_doctors().await.inspect_err(|err| {
            log::error!(
                target: "mediboard_dashboard",
                "msg=\"failed to load doctors\" err={}",
                err
            );
        })?;
        Ok(self.cards_markup(&doctors, NO_DOCTORS_AVAILABLE))
    }

    /// Re-filters the roster on every search/filter input change.
    ///
    /// A response superseded by a later call comes back as
    /// [`ListingUpdate::Stale`] and must not touch the container.
    pub async fn filter_doctors(
        &self,
        name: Option<&str>,
        time: Option<&str>,
        specialty: Option<&str>,
    ) -> Result<ListingUpdate, UiError> {
        let ticket = self.generations.begin();

        let doctors = self.api.filter_doctors(name, time, specialty).await?;

        if !self.generations.commit(ticket) {
            return Ok(ListingUpdate::Stale);
        }

        Ok(ListingUpdate::Replace(
            self.cards_markup(&doctors, NO_DOCTORS_FOUND),
        ))
    }

    /// Saves a new doctor collected from the add-doctor modal, closing the
    /// modal on success. Returns the server message.
    pub async fn add_doctor(&self, doctor: &Doctor) -> Result<String, UiError> {
        let action = AddDoctorAction::new(self.api.clone(), self.store.clone());
        let message = action.execute(doctor).await?;
        self.modal.close(modal::names::ADD_DOCTOR);
        Ok(message)
    }

    /// Deletes a doctor after the host confirmed the prompt.
    pub async fn delete_doctor(&self, doctor_id: i64) -> Result<String, UiError> {
        let action = DeleteDoctorAction::new(self.api.clone(), self.store.clone());
        action.execute(doctor_id).await
    }
}
