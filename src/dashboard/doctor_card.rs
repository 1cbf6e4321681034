//! Doctor card component with role-dependent actions.

use crate::api::types::{Doctor, Patient};
use crate::session::{Role, RoleState};

use super::escape_html;

/// What the card's action button does, by viewer role.
#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    /// Admin: remove this doctor from the roster (after confirmation).
    Delete { doctor_id: Option<i64> },
    /// Anonymous patient: booking requires login first.
    LoginRequired,
    /// Logged-in patient: start the booking flow for this doctor.
    Book { doctor: Doctor },
}

/// A rendered doctor card: info markup plus the action its button triggers.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorCard {
    pub markup: String,
    pub action: Option<CardAction>,
}

/// Payload handed to the host's booking overlay once the patient snapshot
/// has been fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingHandoff {
    pub doctor: Doctor,
    pub patient: Patient,
}

/// Renders one doctor card for the given viewer role.
///
/// A doctor (or unknown/absent role) sees the info block with no action
/// button.
pub fn doctor_card(doctor: &Doctor, role: &RoleState) -> DoctorCard {
    let (button, action) = match role {
        RoleState::Known(Role::Admin) => (
            Some(("delete-btn", "Delete")),
            Some(CardAction::Delete { doctor_id: doctor.id }),
        ),
        RoleState::Known(Role::Patient) => (
            Some(("book-btn", "Book Now")),
            Some(CardAction::LoginRequired),
        ),
        RoleState::Known(Role::LoggedPatient) => (
            Some(("book-btn", "Book Now")),
            Some(CardAction::Book {
                doctor: doctor.clone(),
            }),
        ),
        RoleState::Known(Role::Doctor) | RoleState::Unrecognized(_) | RoleState::Absent => {
            (None, None)
        }
    };

    let mut markup = String::from("<div class=\"doctor-card\">\n  <div class=\"doctor-info\">\n");
    markup.push_str(&format!("    <h3>{}</h3>\n", escape_html(&doctor.name)));
    markup.push_str(&format!(
        "    <p>Specialization: {}</p>\n",
        escape_html(&doctor.specialty)
    ));
    markup.push_str(&format!("    <p>Email: {}</p>\n", escape_html(&doctor.email)));
    markup.push_str(&format!(
        "    <p>Available Slots: {}</p>\n",
        escape_html(&doctor.available_times.join(", "))
    ));
    markup.push_str("  </div>\n  <div class=\"card-actions\">\n");
    if let Some((class, label)) = button {
        markup.push_str(&format!(
            "    <button class=\"{}\">{}</button>\n",
            class, label
        ));
    }
    markup.push_str("  </div>\n</div>");

    DoctorCard { markup, action }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> Doctor {
        Doctor {
            id: Some(3),
            name: "Dr. Amira Hassan".to_owned(),
            email: "amira@clinic.com".to_owned(),
            phone: String::new(),
            password: None,
            specialty: "Cardiology".to_owned(),
            available_times: vec!["09:00-10:00".to_owned(), "10:00-11:00".to_owned()],
        }
    }

    #[test]
    fn test_admin_card_has_delete_action() {
        let card = doctor_card(&doctor(), &RoleState::Known(Role::Admin));
        assert_eq!(card.action, Some(CardAction::Delete { doctor_id: Some(3) }));
        assert!(card.markup.contains("Delete"));
        assert!(card.markup.contains("Available Slots: 09:00-10:00, 10:00-11:00"));
    }

    #[test]
    fn test_anonymous_patient_card_requires_login() {
        let card = doctor_card(&doctor(), &RoleState::Known(Role::Patient));
        assert_eq!(card.action, Some(CardAction::LoginRequired));
        assert!(card.markup.contains("Book Now"));
    }

    #[test]
    fn test_logged_patient_card_books() {
        let card = doctor_card(&doctor(), &RoleState::Known(Role::LoggedPatient));
        assert!(matches!(card.action, Some(CardAction::Book { .. })));
    }

    #[test]
    fn test_doctor_and_unknown_roles_get_no_action() {
        for role in [
            RoleState::Known(Role::Doctor),
            RoleState::Unrecognized("superuser".to_owned()),
            RoleState::Absent,
        ] {
            let card = doctor_card(&doctor(), &role);
            assert_eq!(card.action, None);
            assert!(!card.markup.contains("<button"));
        }
    }

    #[test]
    fn test_card_escapes_doctor_fields() {
        let mut sneaky = doctor();
        sneaky.name = "<b>Dr</b>".to_owned();
        let card = doctor_card(&sneaky, &RoleState::Absent);
        assert!(card.markup.contains("&lt;b&gt;Dr&lt;/b&gt;"));
    }
}
