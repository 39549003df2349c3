use super::error::{FormError, SubmitError};

/// Submission lifecycle shared by both contact forms.
///
/// `Idle -> Submitting -> Success | Error`; `Error -> Submitting` on retry;
/// `Success | Error -> Idle` only through `reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether a new submission may start from here.
    pub(crate) fn ensure_can_begin(&self) -> Result<(), FormError> {
        match self {
            SubmissionStatus::Submitting => Err(FormError::SubmissionInFlight),
            SubmissionStatus::Success => Err(FormError::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => Ok(()),
        }
    }

    pub(crate) fn begin(&mut self) -> Result<(), FormError> {
        self.ensure_can_begin()?;
        *self = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Settle an in-flight submission. Stale outcomes (after a reset) are dropped.
    pub(crate) fn settle(&mut self, outcome: Result<(), SubmitError>) {
        if !self.is_submitting() {
            tracing::debug!("dropping submission outcome; no submission in flight");
            return;
        }
        *self = match outcome {
            Ok(()) => SubmissionStatus::Success,
            Err(err) => SubmissionStatus::Error(err.user_message()),
        };
    }

    /// `Error -> Idle`; other states are left alone.
    pub(crate) fn clear_error(&mut self) {
        if self.error_message().is_some() {
            *self = SubmissionStatus::Idle;
        }
    }

    pub(crate) fn reject(&mut self, message: &str) {
        *self = SubmissionStatus::Error(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_submission_in_flight() {
        let mut status = SubmissionStatus::Idle;
        assert!(status.begin().is_ok());
        assert_eq!(status.begin(), Err(FormError::SubmissionInFlight));
    }

    #[test]
    fn retry_is_allowed_from_error_but_not_from_success() {
        let mut status = SubmissionStatus::Error("boom".into());
        assert!(status.begin().is_ok());
        status.settle(Ok(()));
        assert!(status.is_success());
        assert_eq!(status.begin(), Err(FormError::AlreadySubmitted));
    }

    #[test]
    fn clear_error_only_touches_errors() {
        let mut status = SubmissionStatus::Error("boom".into());
        status.clear_error();
        assert_eq!(status, SubmissionStatus::Idle);
        let mut status = SubmissionStatus::Success;
        status.clear_error();
        assert!(status.is_success());
    }

    #[test]
    fn settle_without_flight_is_ignored() {
        let mut status = SubmissionStatus::Idle;
        status.settle(Err(SubmitError::Transport("late".into())));
        assert_eq!(status, SubmissionStatus::Idle);
    }
}
