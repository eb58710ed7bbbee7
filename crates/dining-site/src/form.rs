//! Forms on the page and the payloads they submit.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ids;
use crate::types::{ORDERS_ENDPOINT, RESERVATIONS_ENDPOINT};
use crate::view::PageView;

/// A named input and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// A form's fields, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append of a field.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.fields.push(FormField {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Value of the last field named `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Clear every field's value, keeping the fields themselves.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Snapshot the current values.
    pub fn payload(&self) -> FormPayload {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

/// Flat field name → value mapping sent as the JSON request body.
///
/// When a name repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// JSON object with every value as a string.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

impl FromIterator<(String, String)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        Self(map)
    }
}

/// The two forms the page can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Reservation,
    Order,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Reservation, FormKind::Order];

    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Reservation => ids::RESERVATION_FORM,
            FormKind::Order => ids::ORDER_FORM,
        }
    }

    pub fn feedback_id(self) -> &'static str {
        match self {
            FormKind::Reservation => ids::RESERVATION_FEEDBACK,
            FormKind::Order => ids::ORDER_FEEDBACK,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Reservation => RESERVATIONS_ENDPOINT,
            FormKind::Order => ORDERS_ENDPOINT,
        }
    }

    /// Forms whose element exists on `page`; only these get wired.
    pub fn present_on<V: PageView + ?Sized>(page: &V) -> Vec<FormKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| page.contains(kind.form_id()))
            .collect()
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Reservation => write!(f, "reservation"),
            FormKind::Order => write!(f, "order"),
        }
    }
}
