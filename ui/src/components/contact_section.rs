use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::contact::{ContactSectionForm, LeadField, LeadForm};
use crate::i18n::{self, Locale, SelectOption};

use super::contact_wizard::dispatch;
use super::submission_banner::{offers_reset, SubmissionBanner};

/// Single-page lead form shown at the bottom of the home page.
#[component]
pub fn ContactSection(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let config = SiteConfig::from_env();
    let mut form = use_signal(|| ContactSectionForm::new(locale));

    let state = form();
    let record = state.record().clone();
    let status = state.status().clone();
    let submitting = status.is_submitting();
    let done = status.is_success();
    let can_reset = offers_reset(&status);

    let services: Vec<SelectOption> = dict.entries("contact.section.services");
    let budgets: Vec<SelectOption> = dict.entries("contact.section.budgets");
    let timeframes: Vec<SelectOption> = dict.entries("contact.section.timeframes");
    let choose = dict.text("contact.section.select_placeholder");

    let label = move |field: LeadField, key: &str| {
        let text = dict.text(key);
        if ContactSectionForm::is_required(field) {
            format!("{text} *")
        } else {
            text
        }
    };

    let input_for = move |field: LeadField| {
        move |evt: FormEvent| form.with_mut(|f| f.set_field(field, evt.value()))
    };

    let select_for = |field: LeadField, label_text: String, options: Vec<SelectOption>| {
        let current = record.get(field).to_string();
        rsx! {
            label { class: "field",
                span { class: "field__label", "{label_text}" }
                select {
                    class: "field__input",
                    name: field.key(),
                    disabled: submitting || done,
                    value: "{current}",
                    onchange: input_for(field),
                    option { value: "", "{choose}" }
                    for opt in options {
                        option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                    }
                }
            }
        }
    };

    let service_select = select_for(
        LeadField::Service,
        label(LeadField::Service, "contact.section.fields.service"),
        services,
    );
    let budget_select = select_for(
        LeadField::Budget,
        label(LeadField::Budget, "contact.section.fields.budget"),
        budgets,
    );
    let timeframe_select = select_for(
        LeadField::Timeframe,
        label(LeadField::Timeframe, "contact.section.fields.timeframe"),
        timeframes,
    );
    let submit_label = if submitting {
        dict.text("contact.section.sending")
    } else {
        dict.text("contact.section.submit")
    };
    let mailto = format!("mailto:{}", config.contact_email);

    rsx! {
        section { id: "contact", class: "contact-section",
            div { class: "contact-section__intro",
                h2 { class: "section-title", {dict.text("contact.section.title")} }
                p { {dict.text("contact.section.intro")} }
                p { class: "contact-section__mail",
                    {dict.text("contact.section.or_email")}
                    " "
                    a { href: "{mailto}", "{config.contact_email}" }
                }
            }

            form {
                class: "contact-form",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let outcome = form.with_mut(|f| {
                        f.set_locale(locale);
                        f.begin_submission()
                    });
                    match outcome {
                        Ok(payload) => dispatch(form, payload),
                        Err(err) => tracing::debug!("contact section not sent: {err}"),
                    }
                },

                div { class: "contact-form__row",
                    label { class: "field",
                        span { class: "field__label", {label(LeadField::Name, "contact.section.fields.name")} }
                        input {
                            class: "field__input",
                            r#type: "text",
                            name: "name",
                            autocomplete: "name",
                            value: "{record.name}",
                            disabled: submitting || done,
                            oninput: input_for(LeadField::Name),
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {label(LeadField::Email, "contact.section.fields.email")} }
                        input {
                            class: "field__input",
                            r#type: "email",
                            name: "email",
                            autocomplete: "email",
                            value: "{record.email}",
                            disabled: submitting || done,
                            oninput: input_for(LeadField::Email),
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {label(LeadField::Phone, "contact.section.fields.phone")} }
                        input {
                            class: "field__input",
                            r#type: "tel",
                            name: "phone",
                            autocomplete: "tel",
                            value: "{record.phone}",
                            disabled: submitting || done,
                            oninput: input_for(LeadField::Phone),
                        }
                    }
                }

                div { class: "contact-form__row",
                    {service_select}
                    {budget_select}
                    {timeframe_select}
                }

                label { class: "field",
                    span { class: "field__label", {label(LeadField::Description, "contact.section.fields.description")} }
                    textarea {
                        class: "field__input field__input--area",
                        name: "description",
                        rows: "5",
                        value: "{record.description}",
                        disabled: submitting || done,
                        oninput: input_for(LeadField::Description),
                    }
                }

                SubmissionBanner { status, dict }

                div { class: "contact-form__actions",
                    if can_reset {
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| form.with_mut(|f| f.reset()),
                            {dict.text("contact.section.reset")}
                        }
                    }
                    if !done {
                        button {
                            r#type: "submit",
                            class: "button button--primary",
                            disabled: submitting,
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
