//! Lead capture: the multi-step wizard, the single-page contact section, and
//! the endpoint they submit to.
//!
//! Both forms share one lifecycle (`SubmissionStatus`) and one policy: the
//! record stays on screen after a successful submission and is only cleared
//! by an explicit reset ("send another message") or a remount.
//!
//! Submitting is split in three so components can release their signal borrow
//! while the request is in flight:
//! ```ignore
//! let payload = form.with_mut(|f| f.begin_submission())?;   // Idle/Error -> Submitting
//! let outcome = endpoint::send(&endpoint, &payload).await;  // one POST
//! form.with_mut(|f| f.finish_submission(outcome));          // -> Success / Error
//! ```
//! `endpoint::submit` does all three for callers that own the form.

pub mod endpoint;
mod error;
mod lead;
mod section;
mod status;
mod wizard;

pub use endpoint::{EndpointReply, HttpLeadEndpoint, LeadEndpoint};
pub use error::{FormError, SubmitError, GENERIC_FAILURE, REQUIRED_FIELDS_MESSAGE};
pub use lead::{ContactPreference, LeadField, LeadPayload, LeadRecord};
pub use section::ContactSectionForm;
pub use status::SubmissionStatus;
pub use wizard::{Advance, Wizard, WizardStep};

/// The part of a form the submission flow drives.
pub trait LeadForm {
    /// Validate, move to `Submitting`, and hand back the wire payload.
    fn begin_submission(&mut self) -> Result<LeadPayload, FormError>;

    /// Record the endpoint outcome. Ignored unless a submission is in flight.
    fn finish_submission(&mut self, outcome: Result<(), SubmitError>);

    fn status(&self) -> &SubmissionStatus;

    /// Clear the record and return to the initial state.
    fn reset(&mut self);
}
