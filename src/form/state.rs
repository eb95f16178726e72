use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::{FieldSpec, FieldValue, FormDefinition, check_field_spec};
use crate::options::ValidatorOptions;

use super::error::FieldSpecError;
use super::field::{FieldState, ValueChangeEvent};

/// One entry of the form-wide error log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLogEntry {
    pub label: String,
    pub message: String,
    pub at: DateTime<Local>,
}

impl fmt::Display for ErrorLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

#[derive(Debug, Default)]
struct Journal {
    statuses: IndexMap<String, String>,
    errors: Vec<ErrorLogEntry>,
}

/// Host container for a set of fields, addressed by label. Collects the
/// notifications of its fields into status lines and an error log.
#[derive(Debug)]
pub struct FormState {
    title: Option<String>,
    options: ValidatorOptions,
    fields: IndexMap<String, FieldState>,
    journal: Rc<RefCell<Journal>>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(ValidatorOptions::default())
    }
}

impl FormState {
    pub fn new(options: ValidatorOptions) -> Self {
        Self {
            title: None,
            options,
            fields: IndexMap::new(),
            journal: Rc::new(RefCell::new(Journal::default())),
        }
    }

    pub fn from_definition(definition: &FormDefinition) -> Result<Self, FieldSpecError> {
        let mut form = Self::new(definition.options.clone());
        form.title = definition.title.clone();
        for spec in &definition.fields {
            form.add_field(spec.clone())?;
        }
        Ok(form)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn add_field(&mut self, spec: FieldSpec) -> Result<&mut FieldState, FieldSpecError> {
        check_field_spec(self.fields.len(), &spec)?;
        if self.fields.contains_key(&spec.label) {
            return Err(FieldSpecError::DuplicateLabel { label: spec.label });
        }

        let label = spec.label.clone();
        let mut field = FieldState::with_options(spec, &self.options);

        let journal = Rc::clone(&self.journal);
        let locale = self.options.locale;
        let status_label = label.clone();
        field.on_value_change(move |event| {
            let line = locale.status_line(event.is_valid, &event.error_message);
            journal
                .borrow_mut()
                .statuses
                .insert(status_label.clone(), line);
        });

        let journal = Rc::clone(&self.journal);
        let error_label = label.clone();
        field.on_error(move |event| {
            tracing::warn!(label = %error_label, message = %event.message, "validation error");
            journal.borrow_mut().errors.push(ErrorLogEntry {
                label: error_label.clone(),
                message: event.message.clone(),
                at: Local::now(),
            });
        });

        Ok(self.fields.entry(label).or_insert(field))
    }

    pub fn field(&self, label: &str) -> Option<&FieldState> {
        self.fields.get(label)
    }

    pub fn field_mut(&mut self, label: &str) -> Option<&mut FieldState> {
        self.fields.get_mut(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Feeds a raw control value to the labelled field.
    pub fn set_value(
        &mut self,
        label: &str,
        value: impl Into<FieldValue>,
    ) -> Result<ValueChangeEvent, FieldSpecError> {
        let field = self
            .fields
            .get_mut(label)
            .ok_or_else(|| FieldSpecError::UnknownField {
                label: label.to_string(),
            })?;
        let event = field.on_change(value);
        tracing::debug!(
            label,
            value = %event.value,
            is_valid = event.is_valid,
            error = %event.error_message,
            "value changed"
        );
        Ok(event)
    }

    /// Latest status line of a field, once it has changed at least once.
    pub fn status(&self, label: &str) -> Option<String> {
        self.journal.borrow().statuses.get(label).cloned()
    }

    pub fn statuses(&self) -> Vec<(String, String)> {
        self.journal
            .borrow()
            .statuses
            .iter()
            .map(|(label, line)| (label.clone(), line.clone()))
            .collect()
    }

    pub fn errors(&self) -> Vec<ErrorLogEntry> {
        self.journal.borrow().errors.clone()
    }

    pub fn has_errors(&self) -> bool {
        !self.journal.borrow().errors.is_empty()
    }

    pub fn clear_errors(&mut self) {
        self.journal.borrow_mut().errors.clear();
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldState::is_valid)
    }

    /// Labels of fields whose current value does not validate.
    pub fn invalid_labels(&self) -> Vec<&str> {
        self.fields
            .values()
            .filter(|field| !field.is_valid())
            .map(FieldState::label)
            .collect()
    }

    pub fn values(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(label, field)| (label.clone(), field.get_value().to_json()))
            .collect()
    }

    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.reset();
        }
        let mut journal = self.journal.borrow_mut();
        journal.statuses.clear();
        journal.errors.clear();
    }
}
