//! Internationalization (i18n) support for `northlight-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the `.json` locale tables)
//! - `serde_json` (nested dictionary values, dot-path lookups)
//! - `i18n-embed` + `unic-langid` (negotiating a locale from the user agent)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en.json   (fallback/reference)
//!   fr.json   (additional locale)
//! ```
//!
//! Usage in a component (the page receives its `Locale` from the router layout):
//! ```ignore
//! use crate::i18n::{self, Locale};
//! let dict = i18n::dictionary(locale);
//! let home_label = dict.text("nav.home");
//! let faq: Vec<FaqEntry> = dict.entries("how_it_works.faq.items");
//! ```
//!
//! The two tables are edited independently and may drift. Lookups never fail:
//! `Dictionary::text` walks active locale -> `en` -> the key itself, so a
//! missing French string shows English copy rather than a blank node.
//! `missing_keys` is the one place that reports drift; the test suite runs it
//! over every embedded table.
//!
//! To add a new locale:
//! 1. Copy `i18n/en.json` to `i18n/<code>.json` and translate each leaf.
//! 2. Add the variant to `Locale` (code, native name).
//! 3. Run tests to ensure completeness.
//!
//! Public API surface:
//! - `resolve(candidate)` – dictionary for a raw route segment (unknown -> `en`).
//! - `dictionary(locale)` – dictionary for an already resolved `Locale`.
//! - `available_locales()` – embedded table codes (for completeness checks).
//! - `lookup`, `leaf_paths`, `missing_keys` – raw table helpers.
mod entries;
mod locale;

pub use entries::{
    FaqEntry, LegalSection, PricingPlan, ProcessStep, SelectOption, ServiceCard, TemplateCard,
    ValueCard,
};
pub use locale::Locale;

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Embed all locale tables under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static EN: Lazy<Value> = Lazy::new(|| load_table(Locale::En));
static FR: Lazy<Value> = Lazy::new(|| load_table(Locale::Fr));

fn table(locale: Locale) -> &'static Value {
    match locale {
        Locale::En => &*EN,
        Locale::Fr => &*FR,
    }
}

fn load_table(locale: Locale) -> Value {
    let file = format!("{}.json", locale.code());
    let Some(asset) = Localizations::get(&file) else {
        tracing::warn!(locale = locale.code(), "locale table {file} is not embedded");
        return Value::Object(Map::new());
    };
    match serde_json::from_slice(&asset.data) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(locale = locale.code(), "failed parsing {file} ({err}); using empty table");
            Value::Object(Map::new())
        }
    }
}

/// Resolve a raw locale candidate (usually the `/:lang` route segment).
///
/// Unsupported values degrade to the default locale; this never fails.
pub fn resolve(candidate: &str) -> Dictionary {
    dictionary(Locale::resolve(candidate))
}

/// Dictionary for an already resolved locale.
pub fn dictionary(locale: Locale) -> Dictionary {
    Dictionary {
        locale,
        root: table(locale),
    }
}

/// List embedded locale table codes (e.g. `["en", "fr"]`).
pub fn available_locales() -> Vec<String> {
    let mut codes = Localizations::iter()
        .filter_map(|path| path.strip_suffix(".json").map(|s| s.to_string()))
        .collect::<Vec<_>>();
    codes.sort();
    codes.dedup();
    codes
}

/// Read-only view over one locale's translation table.
///
/// Cheap to copy; the underlying table is parsed once per process.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    locale: Locale,
    root: &'static Value,
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl Eq for Dictionary {}

impl Dictionary {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw table for this locale.
    pub fn root(&self) -> &'static Value {
        self.root
    }

    /// Raw value at a dot path in this locale only (no fallback).
    pub fn lookup(&self, path: &str) -> Option<&'static Value> {
        lookup(self.root, path)
    }

    /// String leaf at a dot path in this locale only (no fallback).
    pub fn try_text(&self, path: &str) -> Option<&'static str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// Translated string for `path`.
    ///
    /// Falls back to the `en` table, then to the key itself.
    pub fn text(&self, path: &str) -> String {
        self.text_or(path, path)
    }

    /// Translated string for `path`, or `default` when no table has it.
    pub fn text_or(&self, path: &str, default: &str) -> String {
        if let Some(value) = self.try_text(path) {
            return value.to_string();
        }
        if self.locale != Locale::DEFAULT {
            if let Some(value) = dictionary(Locale::DEFAULT).try_text(path) {
                tracing::debug!(
                    locale = self.locale.code(),
                    "translation key '{path}' missing, using {} copy",
                    Locale::DEFAULT.code()
                );
                return value.to_string();
            }
        }
        tracing::debug!(locale = self.locale.code(), "missing translation key '{path}'");
        default.to_string()
    }

    /// `text` with `{name}` placeholders substituted.
    pub fn text_with(&self, path: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(path), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Array of structured entries at `path` (FAQ items, plans, cards...).
    ///
    /// Missing or malformed arrays fall back to `en`, then to an empty list.
    pub fn entries<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        if let Some(items) = parse_entries(self.lookup(path), path, self.locale) {
            return items;
        }
        if self.locale != Locale::DEFAULT {
            let fallback = dictionary(Locale::DEFAULT);
            if let Some(items) = parse_entries(fallback.lookup(path), path, fallback.locale) {
                return items;
            }
        }
        tracing::debug!(locale = self.locale.code(), "no entries at '{path}'");
        Vec::new()
    }
}

fn parse_entries<T: DeserializeOwned>(
    value: Option<&Value>,
    path: &str,
    locale: Locale,
) -> Option<Vec<T>> {
    let value = value?;
    if !value.is_array() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(items) => Some(items),
        Err(err) => {
            tracing::warn!(locale = locale.code(), "malformed entries at '{path}': {err}");
            None
        }
    }
}

/// Walk a dot path (`services.plans.0.name`) through objects and arrays.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Every leaf path in a table. Arrays contribute their indices as segments.
pub fn leaf_paths(root: &Value) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect_leaves(root, String::new(), &mut out);
    out
}

fn collect_leaves(node: &Value, prefix: String, out: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                collect_leaves(child, join_path(&prefix, key), out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                collect_leaves(child, join_path(&prefix, &index.to_string()), out);
            }
        }
        _ => {
            if !prefix.is_empty() {
                out.insert(prefix);
            }
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Leaf paths present in `reference` but absent from `candidate`, sorted.
pub fn missing_keys(reference: &Value, candidate: &Value) -> Vec<String> {
    let have = leaf_paths(candidate);
    leaf_paths(reference)
        .into_iter()
        .filter(|path| !have.contains(path))
        .collect()
}
