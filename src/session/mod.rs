//! Session state: the persisted `(role, token)` pair.

mod file_store;
mod memory_store;
mod store;

pub use file_store::FileSessionStore;
pub use memory_store::InMemorySessionStore;
pub use store::SessionStore;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key for the role value.
pub const ROLE_KEY: &str = "userRole";
/// Storage key for the authentication token.
pub const TOKEN_KEY: &str = "token";

/// One of the four session identities governing which UI controls render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
    LoggedPatient,
}

impl Role {
    /// The exact string persisted in the session store for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
            Role::LoggedPatient => "loggedPatient",
        }
    }

    /// Parses a stored role value. Case-sensitive: anything but the four
    /// canonical strings is an unrecognized role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "patient" => Some(Role::Patient),
            "loggedPatient" => Some(Role::LoggedPatient),
            _ => None,
        }
    }

    /// Roles that must hold a token to be valid. A privileged role with no
    /// token is an expired session.
    pub fn requires_token(&self) -> bool {
        matches!(self, Role::Admin | Role::Doctor | Role::LoggedPatient)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role slot of the store, with absence and unrecognized values
/// modeled explicitly rather than falling through a string comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleState {
    Known(Role),
    /// A value was stored but it is not one of the four roles.
    Unrecognized(String),
    Absent,
}

impl RoleState {
    /// Classifies a raw stored value.
    pub fn from_stored(value: Option<String>) -> Self {
        match value {
            None => RoleState::Absent,
            Some(raw) => match Role::parse(&raw) {
                Some(role) => RoleState::Known(role),
                None => RoleState::Unrecognized(raw),
            },
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            RoleState::Known(role) => Some(*role),
            RoleState::Unrecognized(_) | RoleState::Absent => None,
        }
    }
}

/// Snapshot of the persisted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: RoleState,
    pub token: Option<String>,
}

impl Session {
    /// True when the session violates the role/token invariant: a
    /// privileged role with no token present.
    pub fn is_expired(&self) -> bool {
        match &self.role {
            RoleState::Known(role) => role.requires_token() && self.token.is_none(),
            RoleState::Unrecognized(_) | RoleState::Absent => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Doctor, Role::Patient, Role::LoggedPatient] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("loggedpatient"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_requires_token() {
        assert!(Role::Admin.requires_token());
        assert!(Role::Doctor.requires_token());
        assert!(Role::LoggedPatient.requires_token());
        assert!(!Role::Patient.requires_token());
    }

    #[test]
    fn test_role_state_classification() {
        assert_eq!(RoleState::from_stored(None), RoleState::Absent);
        assert_eq!(
            RoleState::from_stored(Some("admin".to_owned())),
            RoleState::Known(Role::Admin)
        );
        assert_eq!(
            RoleState::from_stored(Some("superuser".to_owned())),
            RoleState::Unrecognized("superuser".to_owned())
        );
    }

    #[test]
    fn test_session_expired_only_for_privileged_without_token() {
        let expired = Session {
            role: RoleState::Known(Role::Admin),
            token: None,
        };
        assert!(expired.is_expired());

        let valid = Session {
            role: RoleState::Known(Role::Admin),
            token: Some("tok".to_owned()),
        };
        assert!(!valid.is_expired());

        let anonymous = Session {
            role: RoleState::Known(Role::Patient),
            token: None,
        };
        assert!(!anonymous.is_expired());

        let unknown = Session {
            role: RoleState::Unrecognized("superuser".to_owned()),
            token: None,
        };
        assert!(!unknown.is_expired());
    }
}
