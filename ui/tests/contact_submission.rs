//! Submission flow against an in-memory endpoint.

use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use serde_json::{json, Value};

use ui::contact::endpoint::{self, EndpointReply, LeadEndpoint};
use ui::contact::{
    Advance, ContactPreference, ContactSectionForm, FormError, LeadField, LeadForm, LeadPayload,
    SubmissionStatus, SubmitError, Wizard, WizardStep, REQUIRED_FIELDS_MESSAGE,
};
use ui::i18n::Locale;

/// Replays canned replies and records what was posted.
struct FakeEndpoint {
    replies: RefCell<Vec<Result<EndpointReply, SubmitError>>>,
    posted: RefCell<Vec<Value>>,
    calls: Cell<usize>,
}

impl FakeEndpoint {
    fn replying(replies: Vec<Result<EndpointReply, SubmitError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().rev().collect()),
            posted: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }

    fn ok() -> Self {
        Self::replying(vec![Ok(EndpointReply::json(200, json!({})))])
    }
}

impl LeadEndpoint for FakeEndpoint {
    async fn post(&self, payload: &LeadPayload) -> Result<EndpointReply, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.posted
            .borrow_mut()
            .push(serde_json::to_value(payload).expect("payload serializes"));
        self.replies
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(SubmitError::Transport("no canned reply left".into())))
    }
}

fn filled_wizard(locale: Locale) -> Wizard {
    let mut wizard = Wizard::new(locale);
    wizard.set_field(LeadField::Name, "Ada Lovelace");
    wizard.advance().unwrap();
    wizard.choose_preference(ContactPreference::Email);
    wizard.advance().unwrap();
    wizard.set_field(LeadField::Email, "ada@example.com");
    wizard.set_field(LeadField::Phone, "0600000000");
    wizard.advance().unwrap();
    wizard.set_field(LeadField::Description, "A landing page for our analytical engine");
    assert_eq!(wizard.step(), WizardStep::Description);
    wizard
}

#[test]
fn accepted_lead_ends_in_success() {
    let server = FakeEndpoint::ok();
    let mut wizard = filled_wizard(Locale::Fr);

    block_on(endpoint::submit(&mut wizard, &server)).unwrap();

    assert_eq!(wizard.status(), &SubmissionStatus::Success);
    assert_eq!(server.calls.get(), 1);
    // Kept on screen until the visitor asks for a fresh form.
    assert_eq!(wizard.record().name, "Ada Lovelace");
}

#[test]
fn wire_payload_matches_the_contract() {
    let server = FakeEndpoint::ok();
    let mut wizard = filled_wizard(Locale::Fr);

    block_on(endpoint::submit(&mut wizard, &server)).unwrap();

    let posted = server.posted.borrow();
    assert_eq!(
        posted[0],
        json!({
            "name": "Ada Lovelace",
            "contactPreference": "email",
            "email": "ada@example.com",
            "description": "A landing page for our analytical engine",
            "locale": "fr",
        })
    );
}

#[test]
fn server_message_is_surfaced() {
    let server = FakeEndpoint::replying(vec![Ok(EndpointReply::json(
        400,
        json!({ "error": "Invalid email" }),
    ))]);
    let mut wizard = filled_wizard(Locale::En);

    block_on(endpoint::submit(&mut wizard, &server)).unwrap();

    assert_eq!(
        wizard.status(),
        &SubmissionStatus::Error("Invalid email".to_string())
    );
}

#[test]
fn transport_failure_sets_a_readable_error() {
    let server = FakeEndpoint::replying(vec![Err(SubmitError::Transport(String::new()))]);
    let mut wizard = filled_wizard(Locale::En);

    block_on(endpoint::submit(&mut wizard, &server)).unwrap();

    let message = wizard.status().error_message().unwrap_or_default();
    assert!(!message.trim().is_empty());
}

#[test]
fn retry_resends_the_same_record() {
    let server = FakeEndpoint::replying(vec![
        Err(SubmitError::Transport("connection reset".into())),
        Ok(EndpointReply::json(201, json!({ "id": 42 }))),
    ]);
    let mut wizard = filled_wizard(Locale::En);

    block_on(endpoint::submit(&mut wizard, &server)).unwrap();
    assert_eq!(wizard.status().error_message(), Some("connection reset"));

    block_on(endpoint::submit(&mut wizard, &server)).unwrap();
    assert!(wizard.status().is_success());

    let posted = server.posted.borrow();
    assert_eq!(posted.len(), 2);
    assert_eq!(posted[0], posted[1]);
}

#[test]
fn success_is_final_until_reset() {
    let server = FakeEndpoint::replying(vec![
        Ok(EndpointReply::json(200, json!({}))),
        Ok(EndpointReply::json(200, json!({}))),
    ]);
    let mut wizard = filled_wizard(Locale::En);
    block_on(endpoint::submit(&mut wizard, &server)).unwrap();

    assert_eq!(
        block_on(endpoint::submit(&mut wizard, &server)),
        Err(FormError::AlreadySubmitted)
    );
    assert_eq!(server.calls.get(), 1);

    wizard.reset();
    assert!(wizard.record().is_empty());
    assert_eq!(wizard.step(), WizardStep::Name);
    assert_eq!(wizard.status(), &SubmissionStatus::Idle);
}

#[test]
fn wizard_last_step_hands_over_the_payload() {
    let server = FakeEndpoint::ok();
    let mut wizard = filled_wizard(Locale::En);

    let Ok(Advance::Submit(payload)) = wizard.advance() else {
        panic!("last step should start the submission");
    };
    let outcome = block_on(endpoint::send(&server, &payload));
    wizard.finish_submission(outcome);

    assert!(wizard.status().is_success());
}

#[test]
fn incomplete_section_form_never_reaches_the_network() {
    let server = FakeEndpoint::ok();
    let mut form = ContactSectionForm::new(Locale::En);
    form.set_field(LeadField::Name, "Ada");
    form.set_field(LeadField::Description, "Rebrand");

    let outcome = block_on(endpoint::submit(&mut form, &server));

    assert_eq!(outcome, Err(FormError::MissingFields(vec![LeadField::Email])));
    assert_eq!(form.status().error_message(), Some(REQUIRED_FIELDS_MESSAGE));
    assert_eq!(server.calls.get(), 0);
}

#[test]
fn section_form_sends_optional_fields() {
    let server = FakeEndpoint::ok();
    let mut form = ContactSectionForm::new(Locale::En);
    form.set_field(LeadField::Name, "Ada");
    form.set_field(LeadField::Email, "ada@example.com");
    form.set_field(LeadField::Description, "Rebrand");
    form.set_field(LeadField::Budget, "5k-15k");

    block_on(endpoint::submit(&mut form, &server)).unwrap();

    assert!(form.status().is_success());
    let posted = server.posted.borrow();
    assert_eq!(posted[0]["budget"], "5k-15k");
    assert_eq!(posted[0]["email"], "ada@example.com");
    assert!(posted[0].get("phone").is_none());
}
