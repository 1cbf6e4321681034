//! Network-backed flows over the injected API client and session store.
//!
//! Each action owns its collaborators and exposes one `execute` method.
//! Actions mutate the session on success, dispatch events either way, and
//! hand the error back to the caller for the user-facing notice.

pub mod add_doctor;
pub mod admin_login;
pub mod delete_doctor;
pub mod doctor_login;
pub mod patient_login;
pub mod patient_signup;

pub use add_doctor::AddDoctorAction;
pub use admin_login::AdminLoginAction;
pub use delete_doctor::DeleteDoctorAction;
pub use doctor_login::DoctorLoginAction;
pub use patient_login::PatientLoginAction;
pub use patient_signup::PatientSignupAction;
