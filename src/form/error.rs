use std::fmt;

use crate::domain::{DataType, FieldValue};

/// A value the validator could not interpret for its field's data type.
/// Never crosses the validator boundary; it is downgraded to a generic
/// diagnostic before a result is returned.
#[derive(Debug, Clone)]
pub struct InterpretError {
    pub label: String,
    pub message: String,
}

impl InterpretError {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }

    pub fn mismatch(label: &str, data_type: &DataType, value: &FieldValue) -> Self {
        let kind = match value {
            FieldValue::Empty => "empty",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
        };
        Self::new(label, format!("{data_type} field cannot hold a {kind} value"))
    }
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.message)
    }
}

impl std::error::Error for InterpretError {}

/// Problems with a form definition or with addressing its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpecError {
    Schema { issues: Vec<String> },
    MissingLabel { index: usize },
    DuplicateLabel { label: String },
    UnknownDefaultOption { label: String, value: String },
    DefaultTypeMismatch { label: String, data_type: DataType },
    UnknownField { label: String },
}

impl fmt::Display for FieldSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpecError::Schema { issues } => {
                write!(f, "definition does not match schema: {}", issues.join("; "))
            }
            FieldSpecError::MissingLabel { index } => {
                write!(f, "field #{index} has no label")
            }
            FieldSpecError::DuplicateLabel { label } => {
                write!(f, "label '{label}' is used by more than one field")
            }
            FieldSpecError::UnknownDefaultOption { label, value } => {
                write!(f, "{label}: default '{value}' is not one of the picklist options")
            }
            FieldSpecError::DefaultTypeMismatch { label, data_type } => {
                write!(f, "{label}: default value does not fit a {data_type} field")
            }
            FieldSpecError::UnknownField { label } => write!(f, "no field labelled '{label}'"),
        }
    }
}

impl std::error::Error for FieldSpecError {}
