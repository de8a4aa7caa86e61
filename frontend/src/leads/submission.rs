use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// local-part "@" domain, where the domain carries at least one dot
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LeadValidationError {
    #[error("Please enter your first name.")]
    MissingFirstName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// A visitor's contact details, exactly as typed, ready to be sent to `/api/leads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub first_name: String,
    pub email: String,
    pub country: String,
}

impl LeadSubmission {
    /// Checks the required fields and the email shape. `country` is never checked.
    pub fn parse(first_name: &str, email: &str, country: &str) -> Result<Self, LeadValidationError> {
        if first_name.trim().is_empty() {
            return Err(LeadValidationError::MissingFirstName);
        }
        if email.trim().is_empty() {
            return Err(LeadValidationError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(LeadValidationError::InvalidEmail);
        }

        Ok(Self {
            first_name: first_name.to_string(),
            email: email.to_string(),
            country: country.to_string(),
        })
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_complete_lead() {
        let lead = LeadSubmission::parse("Alex", "alex@example.com", "Greece").unwrap();
        assert_eq!(lead.first_name, "Alex");
        assert_eq!(lead.email, "alex@example.com");
        assert_eq!(lead.country, "Greece");
    }

    #[test]
    fn test_country_is_optional() {
        let lead = LeadSubmission::parse("Alex", "alex@example.com", "").unwrap();
        assert_eq!(lead.country, "");
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            LeadSubmission::parse("", "alex@example.com", "Greece"),
            Err(LeadValidationError::MissingFirstName)
        );
        assert_eq!(
            LeadSubmission::parse("   ", "alex@example.com", ""),
            Err(LeadValidationError::MissingFirstName)
        );
        assert_eq!(
            LeadSubmission::parse("Alex", "", "Greece"),
            Err(LeadValidationError::MissingEmail)
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("alex@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co.uk"));
        assert!(!is_valid_email("alex"));
        assert!(!is_valid_email("alex@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alex@@example.com"));
        assert!(!is_valid_email("alex smith@example.com"));
        assert_eq!(
            LeadSubmission::parse("Alex", "alex@localhost", ""),
            Err(LeadValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let lead = LeadSubmission::parse(" Alex ", "Alex@Example.com", " Greece").unwrap();
        assert_eq!(lead.first_name, " Alex ");
        assert_eq!(lead.email, "Alex@Example.com");
        assert_eq!(lead.country, " Greece");
    }

    #[test]
    fn test_wire_shape() {
        let lead = LeadSubmission::parse("Alex", "alex@example.com", "Greece").unwrap();
        assert_eq!(
            serde_json::to_string(&lead).unwrap(),
            r#"{"first_name":"Alex","email":"alex@example.com","country":"Greece"}"#
        );
    }
}
