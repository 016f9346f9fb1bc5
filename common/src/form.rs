//! Form submission primitives shared by the dashboard actions.
//!
//! Every form field arrives as a string. Validators read a [`RawForm`],
//! collect violations into [`FieldErrors`] and the actions answer with a
//! [`FormState`] when they do not redirect.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Submitted `application/x-www-form-urlencoded` body.
pub type RawForm = HashMap<String, String>;

/// Field name → ordered list of violated-rule messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field`, keeping earlier messages first.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Runs `rule` and records its message when it fails.
    pub fn check<F>(&mut self, field: &str, rule: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), String>,
    {
        if let Err(message) = rule() {
            self.add(field, message);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Result of a form action that did not redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    pub fn invalid(errors: FieldErrors, message: &str) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.to_string()),
        }
    }

    pub fn message(message: &str) -> Self {
        Self {
            errors: None,
            message: Some(message.to_string()),
        }
    }
}

/// Looks up a form field, treating a missing key as `None`.
pub fn field<'a>(form: &'a RawForm, name: &str) -> Option<&'a str> {
    form.get(name).map(String::as_str)
}
