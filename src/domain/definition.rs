use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::form::FieldSpecError;
use crate::options::ValidatorOptions;

use super::spec::{DataType, FieldSpec, FieldValue};

/// A titled set of field specs sharing one set of validator options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub options: ValidatorOptions,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormDefinition {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Rejects blank or repeated labels, defaults the data type cannot hold, and
    /// picklist defaults outside the options.
    pub fn check(&self) -> Result<(), FieldSpecError> {
        let mut seen = HashSet::new();
        for (index, spec) in self.fields.iter().enumerate() {
            check_field_spec(index, spec)?;
            if !seen.insert(spec.label.as_str()) {
                return Err(FieldSpecError::DuplicateLabel {
                    label: spec.label.clone(),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn check_field_spec(index: usize, spec: &FieldSpec) -> Result<(), FieldSpecError> {
    if spec.label.trim().is_empty() {
        return Err(FieldSpecError::MissingLabel { index });
    }
    if !default_fits(&spec.data_type, &spec.default_value) {
        return Err(FieldSpecError::DefaultTypeMismatch {
            label: spec.label.clone(),
            data_type: spec.data_type.clone(),
        });
    }
    if spec.data_type == DataType::Picklist
        && !spec.picklist_options.is_empty()
        && let Some(value) = spec.default_value.as_text()
        && !value.is_empty()
        && spec.option_label(value).is_none()
    {
        return Err(FieldSpecError::UnknownDefaultOption {
            label: spec.label.clone(),
            value: value.to_string(),
        });
    }
    Ok(())
}

// Checked states belong to checkboxes; numbers to Number fields and Text, which renders them.
fn default_fits(data_type: &DataType, value: &FieldValue) -> bool {
    match value {
        FieldValue::Empty | FieldValue::Text(_) => true,
        FieldValue::Bool(_) => matches!(data_type, DataType::Boolean | DataType::Unknown(_)),
        FieldValue::Number(_) => matches!(
            data_type,
            DataType::Number | DataType::Text | DataType::Unknown(_)
        ),
    }
}
