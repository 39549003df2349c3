use thiserror::Error;

use super::lead::LeadField;

/// Shown when the endpoint gives us nothing better.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Shown when client-side validation stops a submission.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Local problems: never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<LeadField>),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("this lead was already sent; reset the form to send another")]
    AlreadySubmitted,
}

/// Remote problems: the endpoint was contacted (or tried).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Request never produced a response (network, CORS, DNS...).
    #[error("{0}")]
    Transport(String),
    /// Non-2xx reply; carries the server's `error` string when present.
    #[error("{0}")]
    Rejected(String),
    /// 2xx reply whose body was not JSON.
    #[error("{0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Message for the error banner; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

fn field_list(fields: &[LeadField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_wire_names() {
        let err = FormError::MissingFields(vec![LeadField::Name, LeadField::ContactPreference]);
        assert_eq!(err.to_string(), "missing required fields: name, contactPreference");
    }

    #[test]
    fn blank_submit_errors_get_generic_message() {
        assert_eq!(SubmitError::Transport(String::new()).user_message(), GENERIC_FAILURE);
        assert_eq!(SubmitError::Rejected("Invalid email".into()).user_message(), "Invalid email");
    }
}
