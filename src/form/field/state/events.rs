use std::fmt;

use serde::Serialize;

use crate::domain::FieldValue;

/// Emitted once per change, before any `ErrorEvent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueChangeEvent {
    pub value: FieldValue,
    pub is_valid: bool,
    pub error_message: String,
}

/// Emitted only after an invalid `ValueChangeEvent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEvent {
    pub message: String,
}

type ValueChangeHandler = Box<dyn FnMut(&ValueChangeEvent)>;
type ErrorHandler = Box<dyn FnMut(&ErrorEvent)>;

#[derive(Default)]
pub(crate) struct Listeners {
    value_change: Vec<ValueChangeHandler>,
    error: Vec<ErrorHandler>,
}

impl Listeners {
    pub(crate) fn add_value_change(&mut self, handler: ValueChangeHandler) {
        self.value_change.push(handler);
    }

    pub(crate) fn add_error(&mut self, handler: ErrorHandler) {
        self.error.push(handler);
    }

    pub(crate) fn emit_value_change(&mut self, event: &ValueChangeEvent) {
        for handler in &mut self.value_change {
            handler(event);
        }
    }

    pub(crate) fn emit_error(&mut self, event: &ErrorEvent) {
        for handler in &mut self.error {
            handler(event);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.value_change.clear();
        self.error.clear();
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("value_change", &self.value_change.len())
            .field("error", &self.error.len())
            .finish()
    }
}
