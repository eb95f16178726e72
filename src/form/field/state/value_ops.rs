use crate::domain::FieldValue;

use super::{ErrorEvent, FieldState, FieldStatus, ValueChangeEvent};

impl FieldState {
    /// Seeds the default value and validates it without notifying anyone.
    pub fn initialize(&mut self) {
        self.current_value = self.spec.initial_value();
        self.revalidate();
    }

    /// Applies a raw control value, then notifies value-change listeners and,
    /// when the value is invalid, error listeners.
    pub fn on_change(&mut self, raw: impl Into<FieldValue>) -> ValueChangeEvent {
        self.current_value = raw.into();
        let result = self.revalidate();

        let event = ValueChangeEvent {
            value: self.current_value.clone(),
            is_valid: result.is_valid,
            error_message: result.error_message,
        };
        tracing::trace!(
            label = %self.spec.label,
            value = %event.value,
            is_valid = event.is_valid,
            "field value changed"
        );
        self.listeners.emit_value_change(&event);
        if !event.is_valid {
            self.listeners.emit_error(&ErrorEvent {
                message: event.error_message.clone(),
            });
        }
        event
    }

    /// Checkbox-style controls report their checked state rather than a value.
    pub fn on_checkbox_change(&mut self, checked: bool) -> ValueChangeEvent {
        self.on_change(FieldValue::Bool(checked))
    }

    pub fn get_value(&self) -> &FieldValue {
        &self.current_value
    }

    /// Re-checks the current value. Leaves the stored message untouched.
    pub fn is_valid(&self) -> bool {
        self.validator
            .validate(&self.spec, &self.current_value)
            .is_valid
    }

    /// Restores the default and clears the message without validating.
    pub fn reset(&mut self) {
        self.current_value = self.spec.initial_value();
        self.error_message.clear();
        self.status = FieldStatus::Valid;
    }

    fn revalidate(&mut self) -> crate::form::ValidationResult {
        let result = self.validator.validate(&self.spec, &self.current_value);
        self.error_message.clone_from(&result.error_message);
        self.status = if result.is_valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        };
        result
    }
}
