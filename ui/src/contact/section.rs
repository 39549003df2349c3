use crate::i18n::Locale;

use super::error::{FormError, SubmitError, REQUIRED_FIELDS_MESSAGE};
use super::lead::{LeadField, LeadPayload, LeadRecord};
use super::status::SubmissionStatus;
use super::LeadForm;

/// Single-page contact form embedded in the home page.
///
/// No steps: everything is validated when the visitor presses send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSectionForm {
    record: LeadRecord,
    status: SubmissionStatus,
    locale: Option<Locale>,
}

impl ContactSectionForm {
    pub const REQUIRED: [LeadField; 3] = [LeadField::Name, LeadField::Email, LeadField::Description];

    pub fn new(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
            ..Self::default()
        }
    }

    pub fn record(&self) -> &LeadRecord {
        &self.record
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.record.set(field, value);
    }

    pub fn is_required(field: LeadField) -> bool {
        Self::REQUIRED.contains(&field)
    }
}

impl LeadForm for ContactSectionForm {
    fn begin_submission(&mut self) -> Result<LeadPayload, FormError> {
        self.status.ensure_can_begin()?;
        let missing = self.record.missing(&Self::REQUIRED);
        if !missing.is_empty() {
            self.status.reject(REQUIRED_FIELDS_MESSAGE);
            return Err(FormError::MissingFields(missing));
        }
        self.status.begin()?;
        Ok(self.record.to_payload(self.locale, false))
    }

    fn finish_submission(&mut self, outcome: Result<(), SubmitError>) {
        self.status.settle(outcome);
        match &self.status {
            SubmissionStatus::Success => tracing::info!("contact section lead submitted"),
            SubmissionStatus::Error(message) => {
                tracing::warn!("contact section submission failed: {message}")
            }
            _ => {}
        }
    }

    fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    fn reset(&mut self) {
        *self = Self {
            locale: self.locale,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_fail_without_a_request() {
        let mut form = ContactSectionForm::new(Locale::En);
        form.set_field(LeadField::Name, "Linus");
        form.set_field(LeadField::Service, "website");
        assert_eq!(
            form.begin_submission(),
            Err(FormError::MissingFields(vec![LeadField::Email, LeadField::Description]))
        );
        assert_eq!(form.status().error_message(), Some(REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn complete_form_carries_the_extra_fields() {
        let mut form = ContactSectionForm::new(Locale::Fr);
        form.set_field(LeadField::Name, "Linus");
        form.set_field(LeadField::Email, "linus@example.com");
        form.set_field(LeadField::Description, "Rebrand");
        form.set_field(LeadField::Timeframe, "1-3 months");
        let payload = form.begin_submission().unwrap();
        assert_eq!(payload.timeframe.as_deref(), Some("1-3 months"));
        assert_eq!(payload.contact_preference, None);
        assert!(form.status().is_submitting());
    }

    #[test]
    fn locale_set_before_sending_is_reported() {
        let mut form = ContactSectionForm::new(Locale::En);
        form.set_field(LeadField::Name, "Linus");
        form.set_field(LeadField::Email, "linus@example.com");
        form.set_field(LeadField::Description, "Rebrand");
        form.set_locale(Locale::Fr);
        assert_eq!(form.begin_submission().unwrap().locale, Some(Locale::Fr));
    }

    #[test]
    fn failed_send_can_be_reset() {
        let mut form = ContactSectionForm::new(Locale::En);
        form.set_field(LeadField::Name, "Linus");
        form.set_field(LeadField::Email, "linus@example.com");
        form.set_field(LeadField::Description, "Rebrand");
        form.begin_submission().unwrap();
        form.finish_submission(Err(SubmitError::Rejected("Invalid email".into())));
        form.reset();
        assert!(form.record().is_empty());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn record_survives_success_until_reset() {
        let mut form = ContactSectionForm::new(Locale::En);
        form.set_field(LeadField::Name, "Linus");
        form.set_field(LeadField::Email, "linus@example.com");
        form.set_field(LeadField::Description, "Rebrand");
        form.begin_submission().unwrap();
        form.finish_submission(Ok(()));
        assert!(form.status().is_success());
        assert_eq!(form.record().name, "Linus");
        form.reset();
        assert!(form.record().is_empty());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }
}
