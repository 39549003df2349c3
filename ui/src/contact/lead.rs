//! The lead record collected by both contact forms, and its wire form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    Phone,
    Email,
}

impl ContactPreference {
    pub const ALL: [ContactPreference; 2] = [ContactPreference::Phone, ContactPreference::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactPreference::Phone => "phone",
            ContactPreference::Email => "email",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw.trim())
    }

    /// Field that has to be filled for this preference.
    pub fn detail_field(self) -> LeadField {
        match self {
            ContactPreference::Phone => LeadField::Phone,
            ContactPreference::Email => LeadField::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    ContactPreference,
    Phone,
    Email,
    Description,
    Service,
    Budget,
    Timeframe,
}

impl LeadField {
    /// JSON key on the wire.
    pub fn key(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::ContactPreference => "contactPreference",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::Description => "description",
            LeadField::Service => "service",
            LeadField::Budget => "budget",
            LeadField::Timeframe => "timeframe",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadRecord {
    pub name: String,
    pub contact_preference: Option<ContactPreference>,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub service: String,
    pub budget: String,
    pub timeframe: String,
}

impl LeadRecord {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Current text of a field (`""` for an unset preference).
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => self.name.as_str(),
            LeadField::ContactPreference => self.contact_preference.map_or("", ContactPreference::as_str),
            LeadField::Phone => self.phone.as_str(),
            LeadField::Email => self.email.as_str(),
            LeadField::Description => self.description.as_str(),
            LeadField::Service => self.service.as_str(),
            LeadField::Budget => self.budget.as_str(),
            LeadField::Timeframe => self.timeframe.as_str(),
        }
    }

    /// Set a field from raw input. Unknown preference values unset it.
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::ContactPreference => self.contact_preference = ContactPreference::parse(&value),
            LeadField::Phone => self.phone = value,
            LeadField::Email => self.email = value,
            LeadField::Description => self.description = value,
            LeadField::Service => self.service = value,
            LeadField::Budget => self.budget = value,
            LeadField::Timeframe => self.timeframe = value,
        }
    }

    /// Whitespace-only counts as empty.
    pub fn is_filled(&self, field: LeadField) -> bool {
        !self.get(field).trim().is_empty()
    }

    pub fn missing(&self, required: &[LeadField]) -> Vec<LeadField> {
        required
            .iter()
            .copied()
            .filter(|field| !self.is_filled(*field))
            .collect()
    }

    /// Wire form. With `detail_only`, only the contact detail matching the
    /// preference is sent (wizard); otherwise every filled detail is (section).
    pub fn to_payload(&self, locale: Option<Locale>, detail_only: bool) -> LeadPayload {
        let wants = |pref: ContactPreference| {
            !detail_only || self.contact_preference == Some(pref)
        };
        LeadPayload {
            name: self.name.trim().to_string(),
            contact_preference: self.contact_preference,
            phone: optional(&self.phone).filter(|_| wants(ContactPreference::Phone)),
            email: optional(&self.email).filter(|_| wants(ContactPreference::Email)),
            description: self.description.trim().to_string(),
            service: optional(&self.service),
            budget: optional(&self.budget),
            timeframe: optional(&self.timeframe),
            locale,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// JSON body posted to the lead endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_preference: Option<ContactPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}
