use dioxus::prelude::*;

use crate::contact::{SubmissionStatus, GENERIC_FAILURE, REQUIRED_FIELDS_MESSAGE};
use crate::i18n::Dictionary;

/// Localized copy for a status message. The two client-side messages have
/// translations; server-provided text is shown as sent.
pub fn localized_error(dict: &Dictionary, message: &str) -> String {
    match message {
        REQUIRED_FIELDS_MESSAGE => dict.text("contact.status.required"),
        GENERIC_FAILURE => dict.text("contact.status.generic"),
        other => other.to_string(),
    }
}

/// Whether the form should offer "send another message": after a send
/// succeeded or failed.
pub fn offers_reset(status: &SubmissionStatus) -> bool {
    status.is_success() || status.error_message().is_some()
}

/// Live region under a contact form: sending / sent / failed.
#[component]
pub fn SubmissionBanner(status: SubmissionStatus, dict: Dictionary) -> Element {
    match status {
        SubmissionStatus::Idle => rsx! {},
        SubmissionStatus::Submitting => rsx! {
            p { class: "form-status form-status--pending", role: "status", {dict.text("contact.status.sending")} }
        },
        SubmissionStatus::Success => rsx! {
            div { class: "form-status form-status--success", role: "status",
                strong { {dict.text("contact.status.success_title")} }
                p { {dict.text("contact.status.success_body")} }
            }
        },
        SubmissionStatus::Error(message) => {
            let text = localized_error(&dict, &message);
            rsx! {
                p { class: "form-status form-status--error", role: "alert", "{text}" }
            }
        }
    }
}
