//! Multi-step lead wizard.
//!
//! Steps form a fixed sequence with `next`/`previous` as the transition
//! table. A step can only be left forwards once its required fields are
//! filled; leaving the last step starts the submission instead.

use crate::i18n::Locale;

use super::error::{FormError, SubmitError, REQUIRED_FIELDS_MESSAGE};
use super::lead::{ContactPreference, LeadField, LeadPayload, LeadRecord};
use super::status::SubmissionStatus;
use super::LeadForm;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    Name,
    ContactPreference,
    ContactDetail,
    Description,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Name,
        WizardStep::ContactPreference,
        WizardStep::ContactDetail,
        WizardStep::Description,
    ];

    /// Zero-based position, for the progress indicator.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Name => 0,
            WizardStep::ContactPreference => 1,
            WizardStep::ContactDetail => 2,
            WizardStep::Description => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Name => Some(WizardStep::ContactPreference),
            WizardStep::ContactPreference => Some(WizardStep::ContactDetail),
            WizardStep::ContactDetail => Some(WizardStep::Description),
            WizardStep::Description => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Name => None,
            WizardStep::ContactPreference => Some(WizardStep::Name),
            WizardStep::ContactDetail => Some(WizardStep::ContactPreference),
            WizardStep::Description => Some(WizardStep::ContactDetail),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Fields that gate leaving this step. The detail step depends on the
    /// chosen preference; without one it is gated on the preference itself.
    pub fn required_fields(self, record: &LeadRecord) -> Vec<LeadField> {
        match self {
            WizardStep::Name => vec![LeadField::Name],
            WizardStep::ContactPreference => vec![LeadField::ContactPreference],
            WizardStep::ContactDetail => match record.contact_preference {
                Some(pref) => vec![pref.detail_field()],
                None => vec![LeadField::ContactPreference],
            },
            WizardStep::Description => vec![LeadField::Description],
        }
    }

    /// Dictionary key prefix for this step's copy (`.title`, `.hint`).
    pub fn key(self) -> &'static str {
        match self {
            WizardStep::Name => "contact.wizard.steps.name",
            WizardStep::ContactPreference => "contact.wizard.steps.preference",
            WizardStep::ContactDetail => "contact.wizard.steps.detail",
            WizardStep::Description => "contact.wizard.steps.description",
        }
    }
}

/// Result of a successful `Wizard::advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to this step.
    Moved(WizardStep),
    /// Left the last step; the payload must now be sent.
    Submit(LeadPayload),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    record: LeadRecord,
    status: SubmissionStatus,
    locale: Option<Locale>,
}

impl Wizard {
    /// Empty wizard; `locale` is attached to the submitted payload.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
            ..Self::default()
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &LeadRecord {
        &self.record
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Follow the page language; the payload carries whatever is set when sending.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.record.set(field, value);
    }

    pub fn choose_preference(&mut self, preference: ContactPreference) {
        self.record.contact_preference = Some(preference);
    }

    /// Required fields of the current step that are still empty.
    pub fn missing_for_step(&self) -> Vec<LeadField> {
        self.record.missing(&self.step.required_fields(&self.record))
    }

    /// Move forward, or start the submission from the last step.
    ///
    /// Gating failures leave step and status untouched.
    pub fn advance(&mut self) -> Result<Advance, FormError> {
        let missing = self.missing_for_step();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(Advance::Moved(next))
            }
            None => self.begin_submission().map(Advance::Submit),
        }
    }

    /// Step back. Entered data is kept; a failed send's error is dropped
    /// since it belongs to the last step. Returns `false` on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) if !self.status.is_submitting() => {
                self.step = previous;
                self.status.clear_error();
                true
            }
            _ => false,
        }
    }

    fn all_required(&self) -> Vec<LeadField> {
        let mut missing = Vec::new();
        for step in WizardStep::ALL {
            for field in self.record.missing(&step.required_fields(&self.record)) {
                if !missing.contains(&field) {
                    missing.push(field);
                }
            }
        }
        missing
    }
}

impl LeadForm for Wizard {
    fn begin_submission(&mut self) -> Result<LeadPayload, FormError> {
        self.status.ensure_can_begin()?;
        let missing = self.all_required();
        if !missing.is_empty() {
            self.status.reject(REQUIRED_FIELDS_MESSAGE);
            return Err(FormError::MissingFields(missing));
        }
        self.status.begin()?;
        Ok(self.record.to_payload(self.locale, true))
    }

    fn finish_submission(&mut self, outcome: Result<(), SubmitError>) {
        self.status.settle(outcome);
        match &self.status {
            SubmissionStatus::Success => tracing::info!("lead submitted"),
            SubmissionStatus::Error(message) => tracing::warn!("lead submission failed: {message}"),
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
