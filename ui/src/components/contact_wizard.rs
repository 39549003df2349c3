//! Step-by-step lead form (contact page).

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::contact::endpoint::{self, HttpLeadEndpoint};
use crate::contact::{
    Advance, ContactPreference, FormError, LeadField, LeadForm, LeadPayload, Wizard, WizardStep,
};
use crate::i18n::{self, Locale};

use super::submission_banner::{offers_reset, SubmissionBanner};

/// POST `payload` in the background and settle `form` with the outcome.
///
/// The form must already be `Submitting` (see `LeadForm::begin_submission`).
pub(crate) fn dispatch<F: LeadForm + 'static>(mut form: Signal<F>, payload: LeadPayload) {
    spawn(async move {
        let outcome = match HttpLeadEndpoint::new(&SiteConfig::from_env()) {
            Ok(client) => {
                tracing::debug!(url = client.url(), "posting lead");
                endpoint::send(&client, &payload).await
            }
            Err(err) => Err(err),
        };
        form.with_mut(|f| f.finish_submission(outcome));
    });
}

fn preference_label_key(preference: ContactPreference) -> &'static str {
    match preference {
        ContactPreference::Phone => "contact.wizard.preference.phone",
        ContactPreference::Email => "contact.wizard.preference.email",
    }
}

fn field_label_key(field: LeadField) -> &'static str {
    match field {
        LeadField::Phone => "contact.wizard.fields.phone",
        LeadField::Email => "contact.wizard.fields.email",
        LeadField::Description => "contact.wizard.fields.description",
        _ => "contact.wizard.fields.name",
    }
}

fn progress_percent(step: WizardStep) -> usize {
    (step.index() + 1) * 100 / WizardStep::ALL.len()
}

#[component]
pub fn ContactWizard(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let mut wizard = use_signal(|| Wizard::new(locale));
    let mut show_missing = use_signal(|| false);

    let state = wizard();
    let step = state.step();
    let status = state.status().clone();
    let record = state.record().clone();
    let submitting = status.is_submitting();

    if status.is_success() {
        return rsx! {
            div { class: "wizard wizard--done",
                SubmissionBanner { status, dict }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| {
                        wizard.with_mut(|w| w.reset());
                        show_missing.set(false);
                    },
                    {dict.text("contact.wizard.reset")}
                }
            }
        };
    }

    let current = (step.index() + 1).to_string();
    let total = WizardStep::ALL.len().to_string();
    let progress = dict.text_with(
        "contact.wizard.progress",
        &[("current", current.as_str()), ("total", total.as_str())],
    );
    let percent = progress_percent(step);
    let title = dict.text(&format!("{}.title", step.key()));
    let hint = dict.text(&format!("{}.hint", step.key()));
    let missing_hint = show_missing() && !state.missing_for_step().is_empty();

    let mut update = move |field: LeadField, value: String| {
        wizard.with_mut(|w| w.set_field(field, value));
        show_missing.set(false);
    };

    let body = match step {
        WizardStep::Name => rsx! {
            label { class: "field",
                span { class: "field__label", {dict.text(field_label_key(LeadField::Name))} }
                input {
                    class: "field__input",
                    r#type: "text",
                    name: "name",
                    autocomplete: "name",
                    value: "{record.name}",
                    disabled: submitting,
                    oninput: move |evt: FormEvent| update(LeadField::Name, evt.value()),
                }
            }
        },
        WizardStep::ContactPreference => {
            let chosen = record.contact_preference;
            let choices = ContactPreference::ALL.into_iter().map(move |preference| {
                let selected = chosen == Some(preference);
                let class = if selected { "choice choice--selected" } else { "choice" };
                let value = preference.as_str();
                rsx! {
                    button {
                        key: "{value}",
                        r#type: "button",
                        class: "{class}",
                        aria_pressed: "{selected}",
                        disabled: submitting,
                        onclick: move |_| {
                            wizard.with_mut(|w| w.choose_preference(preference));
                            show_missing.set(false);
                        },
                        {dict.text(preference_label_key(preference))}
                    }
                }
            });
            rsx! {
                div { class: "choice-group", role: "group", aria_label: "{title}", {choices} }
            }
        }
        WizardStep::ContactDetail => {
            let field = record
                .contact_preference
                .map_or(LeadField::Email, ContactPreference::detail_field);
            let (kind, autocomplete) = match field {
                LeadField::Phone => ("tel", "tel"),
                _ => ("email", "email"),
            };
            let value = record.get(field).to_string();
            rsx! {
                label { class: "field",
                    span { class: "field__label", {dict.text(field_label_key(field))} }
                    input {
                        class: "field__input",
                        r#type: kind,
                        name: field.key(),
                        autocomplete,
                        value: "{value}",
                        disabled: submitting,
                        oninput: move |evt: FormEvent| update(field, evt.value()),
                    }
                }
            }
        }
        WizardStep::Description => rsx! {
            label { class: "field",
                span { class: "field__label", {dict.text(field_label_key(LeadField::Description))} }
                textarea {
                    class: "field__input field__input--area",
                    name: "description",
                    rows: "6",
                    value: "{record.description}",
                    disabled: submitting,
                    oninput: move |evt: FormEvent| update(LeadField::Description, evt.value()),
                }
            }
        },
    };

    let next_label = if step.is_last() {
        dict.text("contact.wizard.send")
    } else {
        dict.text("contact.wizard.next")
    };
    let has_previous = step.previous().is_some();
    let can_reset = offers_reset(&status);

    rsx! {
        form {
            class: "wizard",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let outcome = wizard.with_mut(|w| {
                    w.set_locale(locale);
                    w.advance()
                });
                match outcome {
                    Ok(Advance::Moved(next)) => {
                        tracing::debug!(?next, "wizard advanced");
                        show_missing.set(false);
                    }
                    Ok(Advance::Submit(payload)) => {
                        show_missing.set(false);
                        dispatch(wizard, payload);
                    }
                    Err(FormError::MissingFields(fields)) => {
                        tracing::debug!(?fields, "wizard step incomplete");
                        show_missing.set(true);
                    }
                    Err(err) => tracing::debug!("advance ignored: {err}"),
                }
            },

            div { class: "wizard__progress",
                p { class: "wizard__progress-label", "{progress}" }
                div { class: "wizard__progress-track", aria_hidden: "true",
                    div { class: "wizard__progress-bar", style: "width:{percent}%" }
                }
            }

            h2 { class: "wizard__title", "{title}" }
            p { class: "wizard__hint", "{hint}" }

            {body}

            if missing_hint {
                p { class: "form-status form-status--error", role: "alert",
                    {dict.text("contact.wizard.required_hint")}
                }
            }
            SubmissionBanner { status, dict }

            div { class: "wizard__actions",
                if has_previous {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: submitting,
                        onclick: move |_| {
                            wizard.with_mut(|w| w.retreat());
                            show_missing.set(false);
                        },
                        {dict.text("contact.wizard.back")}
                    }
                }
                if can_reset {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| {
                            wizard.with_mut(|w| w.reset());
                            show_missing.set(false);
                        },
                        {dict.text("contact.wizard.reset")}
                    }
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: submitting,
                    "{next_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_reaches_full_on_last_step() {
        assert_eq!(progress_percent(WizardStep::Name), 25);
        assert_eq!(progress_percent(WizardStep::Description), 100);
    }

    #[test]
    fn every_preference_and_detail_field_has_copy() {
        let en = i18n::dictionary(Locale::En);
        for preference in ContactPreference::ALL {
            assert!(en.try_text(preference_label_key(preference)).is_some());
            assert!(en.try_text(field_label_key(preference.detail_field())).is_some());
        }
    }
}
