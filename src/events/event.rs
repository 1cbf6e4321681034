use chrono::{DateTime, Utc};

use crate::session::Role;

/// Events emitted by session and dashboard flows.
///
/// Events are always fired. If no listeners are registered they are
/// silently ignored (no-op). Register listeners via
/// [`register_event_listeners`](crate::register_event_listeners) to handle
/// them.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    // authentication
    LoginSuccess {
        role: Role,
        at: DateTime<Utc>,
    },
    LoginFailed {
        role: Role,
        reason: String,
        at: DateTime<Utc>,
    },
    LogoutSuccess {
        role: Role,
        at: DateTime<Utc>,
    },
    SessionExpired {
        role: Role,
        at: DateTime<Utc>,
    },

    // patient lifecycle
    PatientRegistered {
        email: String,
        at: DateTime<Utc>,
    },

    // doctor roster
    DoctorAdded {
        name: String,
        at: DateTime<Utc>,
    },
    DoctorDeleted {
        doctor_id: i64,
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Returns a dot-separated event name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSuccess { .. } => "session.login.success",
            Self::LoginFailed { .. } => "session.login.failed",
            Self::LogoutSuccess { .. } => "session.logout.success",
            Self::SessionExpired { .. } => "session.expired",
            Self::PatientRegistered { .. } => "patient.registered",
            Self::DoctorAdded { .. } => "doctor.added",
            Self::DoctorDeleted { .. } => "doctor.deleted",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::LoginSuccess { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::LogoutSuccess { at, .. }
            | Self::SessionExpired { at, .. }
            | Self::PatientRegistered { at, .. }
            | Self::DoctorAdded { at, .. }
            | Self::DoctorDeleted { at, .. } => *at,
        }
    }
}
