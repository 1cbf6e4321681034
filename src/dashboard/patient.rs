//! Patient dashboard controller: doctor browsing plus signup/login entry.
//!
//! Serves both the anonymous and the logged-in patient variants; card
//! actions follow whatever role is currently in the store.

use crate::actions::{PatientLoginAction, PatientSignupAction};
use crate::api::types::{Doctor, PatientRegistration};
use crate::api::ApiClient;
use crate::config::PagePaths;
use crate::listing::{render_records, Generations, ListingUpdate};
use crate::modal::{self, ModalController};
use crate::session::SessionStore;
use crate::UiError;

use super::doctor_card::doctor_card;
use super::{NO_DOCTORS_AVAILABLE, NO_DOCTORS_FOUND};

/// Controller for the patient dashboard page.
pub struct PatientDashboard<A, S, M> {
    api: A,
    store: S,
    modal: M,
    paths: PagePaths,
    generations: Generations,
}

impl<A, S, M> PatientDashboard<A, S, M>
where
    A: ApiClient + Clone,
    S: SessionStore + Clone,
    M: ModalController,
{
    pub fn new(api: A, store: S, modal: M, paths: PagePaths) -> Self {
        Self {
            api,
            store,
            modal,
            paths,
            generations: Generations::new(),
        }
    }

    fn cards_markup(&self, doctors: &[Doctor], empty_markup: &str) -> String {
        let role = self.store.role_state();
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

    /// Signs a new patient up, closing the signup modal on success.
    /// Returns the server message; the host reloads the page.
    pub async fn signup(&self, registration: &PatientRegistration) -> Result<String, UiError> {
        let action = PatientSignupAction::new(self.api.clone());
        let message = action.execute(registration).await?;
        self.modal.close(modal::names::PATIENT_SIGNUP);
        Ok(message)
    }

    /// Logs a patient in. On success the login modal is closed and the
    /// returned path is where the host should navigate.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, UiError> {
        let action = PatientLoginAction::new(self.api.clone(), self.store.clone());
        action.execute(email, password).await?;
        self.modal.close(modal::names::PATIENT_LOGIN);
        Ok(self.paths.logged_patient_dashboard.clone())
    }
}
