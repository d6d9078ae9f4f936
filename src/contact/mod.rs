//! Contact form state and the submission workflow behind it.
//!
//! A submission is attempted through the EmailJS API first and falls back to
//! a pre-filled `mailto:` link when that fails.

pub mod browser;
pub mod config;
pub mod coordinator;
pub mod delivery;
pub mod mailto;

use serde::{Deserialize, Serialize};

pub use config::{EmailJsConfig, CONTACT_ADDRESS};
pub use coordinator::{FormStore, Notifier, SubmissionCoordinator, SubmissionOutcome, SubmitError};
pub use delivery::{DeliveryError, EmailJsClient, EmailSender, TemplateParams};
pub use mailto::{build_mailto, FallbackError, MailClient};

/// The values currently entered into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Returns a copy with `field` set to `value`, leaving every other field untouched.
    #[must_use]
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            ContactField::FirstName => next.first_name = value,
            ContactField::LastName => next.last_name = value,
            ContactField::Email => next.email = value,
            ContactField::Phone => next.phone = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    /// First and last name joined with a single space
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// One of the fixed set of contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// The `name` attribute used on the rendered input
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.input_name())
    }
}

impl std::str::FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "").as_str() {
            "firstname" => Ok(ContactField::FirstName),
            "lastname" => Ok(ContactField::LastName),
            "email" => Ok(ContactField::Email),
            "phone" => Ok(ContactField::Phone),
            "message" => Ok(ContactField::Message),
            _ => Err(format!("unknown contact field: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn with_field_replaces_only_that_field() {
        let before = jane();
        let after = before.with_field(ContactField::Phone, "555-0100");

        assert_eq!(after.phone, "555-0100");
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.last_name, before.last_name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.message, before.message);
        // original value is not touched
        assert!(before.phone.is_empty());
    }

    #[test]
    fn last_write_to_each_field_wins() {
        let updates = [
            (ContactField::FirstName, "J"),
            (ContactField::Message, "first draft"),
            (ContactField::FirstName, "Ja"),
            (ContactField::Email, "jane@"),
            (ContactField::FirstName, "Jane"),
            (ContactField::Email, "jane@x.com"),
            (ContactField::Message, "Hi"),
        ];

        let state = updates
            .iter()
            .fold(ContactSubmission::default(), |state, (field, value)| {
                state.with_field(*field, *value)
            });

        assert_eq!(state.first_name, "Jane");
        assert_eq!(state.email, "jane@x.com");
        assert_eq!(state.message, "Hi");
        assert!(state.last_name.is_empty());
        assert!(state.phone.is_empty());
    }

    #[test]
    fn full_name_joins_and_trims() {
        assert_eq!(jane().full_name(), "Jane Doe");

        let only_first = ContactSubmission::default().with_field(ContactField::FirstName, " Jane ");
        assert_eq!(only_first.full_name(), "Jane");
    }

    #[test]
    fn default_submission_is_empty() {
        assert!(ContactSubmission::default().is_empty());
        assert!(!jane().is_empty());
    }

    #[test]
    fn contact_field_from_input_name() {
        for field in ContactField::ALL {
            assert_eq!(field.input_name().parse::<ContactField>().unwrap(), field);
        }
    }

    #[test]
    fn contact_field_from_str_accepts_snake_case() {
        assert_eq!(
            "first_name".parse::<ContactField>().unwrap(),
            ContactField::FirstName
        );
        assert_eq!(
            "LAST_NAME".parse::<ContactField>().unwrap(),
            ContactField::LastName
        );
    }

    #[test]
    fn contact_field_from_str_invalid() {
        assert!("subject".parse::<ContactField>().is_err());
        assert!("".parse::<ContactField>().is_err());
    }
}
