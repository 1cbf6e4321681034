//! Modal controller collaborator.
//!
//! The overlay dialogs themselves live in the host shell; this layer only
//! toggles them by name.

/// Names of the overlay dialogs the UI opens.
pub mod names {
    pub const ADMIN_LOGIN: &str = "adminLogin";
    pub const DOCTOR_LOGIN: &str = "doctorLogin";
    pub const PATIENT_LOGIN: &str = "patientLogin";
    pub const PATIENT_SIGNUP: &str = "patientSignup";
    pub const ADD_DOCTOR: &str = "addDoctor";
}

/// External component toggling named overlay dialogs.
///
/// No payload validation happens here; unknown names are the host's
/// problem.
pub trait ModalController: Send + Sync {
    fn open(&self, name: &str);
    fn close(&self, name: &str);
}

impl<M: ModalController + ?Sized> ModalController for &M {
    fn open(&self, name: &str) {
        (**self).open(name);
    }

    fn close(&self, name: &str) {
        (**self).close(name);
    }
}

/// Modal controller that records every call, for tests.
#[cfg(any(test, feature = "mocks"))]
#[derive(Clone, Default)]
pub struct RecordingModal {
    pub opened: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    pub closed: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(any(test, feature = "mocks"))]
impl RecordingModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened_names(&self) -> Vec<String> {
        self.opened.lock().map(|names| names.clone()).unwrap_or_default()
    }

    pub fn closed_names(&self) -> Vec<String> {
        self.closed.lock().map(|names| names.clone()).unwrap_or_default()
    }
}

#[cfg(any(test, feature = "mocks"))]
impl ModalController for RecordingModal {
    fn open(&self, name: &str) {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(name.to_owned());
        }
    }

    fn close(&self, name: &str) {
        if let Ok(mut closed) = self.closed.lock() {
            closed.push(name.to_owned());
        }
    }
}
