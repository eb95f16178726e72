mod events;
mod value_ops;

pub use events::{ErrorEvent, ValueChangeEvent};

use crate::domain::{FieldSpec, FieldValue};
use crate::options::ValidatorOptions;

use super::validator::FieldValidator;
use events::Listeners;

/// Lifecycle position of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Uninitialized,
    Valid,
    Invalid,
}

/// Live value and last diagnostic of one field.
///
/// The error message is non-empty exactly when the latest validation of the
/// current value failed; `reset` is the one exception and reports the default
/// as valid without checking it.
#[derive(Debug)]
pub struct FieldState {
    spec: FieldSpec,
    validator: FieldValidator,
    current_value: FieldValue,
    error_message: String,
    status: FieldStatus,
    listeners: Listeners,
}

impl FieldState {
    pub fn new(spec: FieldSpec) -> Self {
        Self::with_options(spec, &ValidatorOptions::default())
    }

    pub fn with_options(spec: FieldSpec, options: &ValidatorOptions) -> Self {
        let mut state = Self::uninitialized(spec, FieldValidator::new(options.clone()));
        state.initialize();
        state
    }

    /// A field that has not yet been seeded with its default. Call
    /// [`FieldState::initialize`] before reading it.
    pub fn uninitialized(spec: FieldSpec, validator: FieldValidator) -> Self {
        Self {
            spec,
            validator,
            current_value: FieldValue::Empty,
            error_message: String::new(),
            status: FieldStatus::Uninitialized,
            listeners: Listeners::default(),
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_text(&self) -> bool {
        self.spec.is_text()
    }

    pub fn is_number(&self) -> bool {
        self.spec.is_number()
    }

    pub fn is_date(&self) -> bool {
        self.spec.is_date()
    }

    pub fn is_date_time(&self) -> bool {
        self.spec.is_date_time()
    }

    pub fn is_picklist(&self) -> bool {
        self.spec.is_picklist()
    }

    pub fn is_boolean(&self) -> bool {
        self.spec.is_boolean()
    }

    /// Registers a handler run synchronously for every change.
    pub fn on_value_change(&mut self, handler: impl FnMut(&ValueChangeEvent) + 'static) {
        self.listeners.add_value_change(Box::new(handler));
    }

    /// Registers a handler run synchronously for every invalid change.
    pub fn on_error(&mut self, handler: impl FnMut(&ErrorEvent) + 'static) {
        self.listeners.add_error(Box::new(handler));
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }
}
