use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::clock::Clock;
use crate::validators::FieldValidation;

/// Field name → message for every field that failed submit validation.
pub type FormErrors = BTreeMap<&'static str, String>;

/// Current raw value per field. Fields the user has not typed into are
/// absent, which reads the same as empty.
pub type FormValues = BTreeMap<&'static str, String>;

/// Per-entity form description. `validate` owns the requiredness rules:
/// optional fields validate clean when empty.
pub trait FormSpec {
    type Record;

    /// Field names in display order.
    fn fields(&self) -> &'static [&'static str];

    /// Keystroke transform; identity for most fields.
    fn transform(&self, _field: &str, raw: &str) -> String {
        raw.to_string()
    }

    fn validate(&self, field: &str, value: &str, clock: &dyn Clock) -> FieldValidation;

    /// Build the record from validated values. Only called after every
    /// field passed `validate`.
    fn build(&self, values: &FormValues) -> Self::Record;
}

/// Visual state of one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Untouched, or touched but never validated.
    Default,
    Error,
    Success,
}

pub struct FormController<S: FormSpec> {
    spec: S,
    values: FormValues,
    touched: BTreeSet<&'static str>,
    validation: BTreeMap<&'static str, FieldValidation>,
    submit_errors: FormErrors,
}

impl<S: FormSpec> FormController<S> {
    pub fn new(spec: S) -> Self {
        FormController {
            spec,
            values: FormValues::new(),
            touched: BTreeSet::new(),
            validation: BTreeMap::new(),
            submit_errors: FormErrors::new(),
        }
    }

    fn key(&self, field: &str) -> Option<&'static str> {
        self.spec.fields().iter().copied().find(|f| *f == field)
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn validation(&self, field: &str) -> Option<&FieldValidation> {
        self.validation.get(field)
    }

    pub fn submit_error(&self, field: &str) -> Option<&str> {
        self.submit_errors.get(field).map(String::as_str)
    }

    /// Keystroke handler: transform, store, mark touched. Validation runs
    /// immediately once the field has been interacted with before or holds
    /// text, so feedback appears while typing rather than only on blur.
    pub fn set_field(&mut self, field: &str, raw: &str, clock: &dyn Clock) {
        let Some(key) = self.key(field) else {
            debug!(field, "set_field on unknown field ignored");
            return;
        };
        let value = self.spec.transform(key, raw);
        let was_touched = self.touched.contains(key);
        self.touched.insert(key);
        if was_touched || !value.is_empty() {
            let validation = self.spec.validate(key, &value, clock);
            self.validation.insert(key, validation);
        }
        self.values.insert(key, value);
        self.submit_errors.remove(key);
    }

    /// Leaving a field always validates it, including empty ones.
    pub fn blur(&mut self, field: &str, clock: &dyn Clock) {
        let Some(key) = self.key(field) else {
            return;
        };
        self.touched.insert(key);
        let value = self.value(key).to_string();
        let validation = self.spec.validate(key, &value, clock);
        self.validation.insert(key, validation);
    }

    pub fn field_status(&self, field: &str) -> FieldStatus {
        let touched = self.touched.contains(field);
        let has_value = !self.value(field).trim().is_empty();
        if !touched && !has_value {
            return FieldStatus::Default;
        }
        match self.validation.get(field) {
            Some(v) if !v.is_valid => FieldStatus::Error,
            Some(_) => FieldStatus::Success,
            None => FieldStatus::Default,
        }
    }

    /// Validate everything regardless of touch state. On failure, every
    /// message is reported in one pass; on success the record is built and
    /// the form returns to its initial state.
    pub fn submit(&mut self, clock: &dyn Clock) -> Result<S::Record, FormErrors> {
        let mut errors = FormErrors::new();
        for &key in self.spec.fields() {
            let value = self.value(key).to_string();
            let validation = self.spec.validate(key, &value, clock);
            if !validation.is_valid {
                errors.insert(key, validation.message);
            }
        }
        if !errors.is_empty() {
            debug!(error_count = errors.len(), "form submit rejected");
            self.submit_errors = errors.clone();
            return Err(errors);
        }
        let record = self.spec.build(&self.values);
        self.reset();
        Ok(record)
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.touched.clear();
        self.validation.clear();
        self.submit_errors.clear();
    }
}
