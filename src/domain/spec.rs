use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared data type of a field. Unrecognised tags are kept as `Unknown`
/// and never fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    Text,
    Number,
    Date,
    DateTime,
    Picklist,
    Boolean,
    Unknown(String),
}

impl DataType {
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Text => "Text",
            DataType::Number => "Number",
            DataType::Date => "Date",
            DataType::DateTime => "DateTime",
            DataType::Picklist => "Picklist",
            DataType::Boolean => "Boolean",
            DataType::Unknown(tag) => tag,
        }
    }
}

impl From<&str> for DataType {
    fn from(tag: &str) -> Self {
        match tag {
            "Text" => DataType::Text,
            "Number" => DataType::Number,
            "Date" => DataType::Date,
            "DateTime" => DataType::DateTime,
            "Picklist" => DataType::Picklist,
            "Boolean" => DataType::Boolean,
            other => DataType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for DataType {
    fn from(tag: String) -> Self {
        DataType::from(tag.as_str())
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        data_type.as_str().to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single selectable entry of a picklist field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PicklistOption {
    pub label: String,
    pub value: String,
}

impl PicklistOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The live value of a field. Checkbox-backed fields carry `Bool`; numeric
/// fields carry either the raw input text or an already parsed `Number`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// `Empty` and the empty string both count as "no value".
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Empty => Value::Null,
            FieldValue::Bool(flag) => Value::Bool(*flag),
            FieldValue::Number(number) => serde_json::Number::from_f64(*number)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Text(text) => Value::String(text.clone()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Bool(flag) => write!(f, "{flag}"),
            FieldValue::Number(number) => write!(f, "{number}"),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Immutable configuration of one field instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[schemars(with = "String")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Maximum digits in the integer part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Maximum digits in the fractional part. Zero is a real limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub picklist_options: Vec<PicklistOption>,
    #[serde(default, skip_serializing_if = "FieldValue::is_empty")]
    pub default_value: FieldValue,
    #[serde(default)]
    pub label: String,
}

impl FieldSpec {
    pub fn new(data_type: DataType, label: impl Into<String>) -> Self {
        Self {
            data_type,
            max_length: None,
            precision: None,
            scale: None,
            picklist_options: Vec::new(),
            default_value: FieldValue::Empty,
            label: label.into(),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(DataType::Text, label)
    }

    pub fn number(label: impl Into<String>) -> Self {
        Self::new(DataType::Number, label)
    }

    pub fn date(label: impl Into<String>) -> Self {
        Self::new(DataType::Date, label)
    }

    pub fn date_time(label: impl Into<String>) -> Self {
        Self::new(DataType::DateTime, label)
    }

    pub fn picklist(label: impl Into<String>, options: Vec<PicklistOption>) -> Self {
        Self {
            picklist_options: options,
            ..Self::new(DataType::Picklist, label)
        }
    }

    pub fn boolean(label: impl Into<String>) -> Self {
        Self::new(DataType::Boolean, label)
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Zero disables the limit.
    pub fn effective_max_length(&self) -> Option<usize> {
        self.max_length.filter(|limit| *limit > 0)
    }

    /// Zero disables the limit.
    pub fn effective_precision(&self) -> Option<u32> {
        self.precision.filter(|limit| *limit > 0)
    }

    /// Value the field starts with and returns to on reset.
    pub fn initial_value(&self) -> FieldValue {
        self.default_value.clone()
    }

    pub fn is_text(&self) -> bool {
        self.data_type == DataType::Text
    }

    pub fn is_number(&self) -> bool {
        self.data_type == DataType::Number
    }

    pub fn is_date(&self) -> bool {
        self.data_type == DataType::Date
    }

    pub fn is_date_time(&self) -> bool {
        self.data_type == DataType::DateTime
    }

    pub fn is_picklist(&self) -> bool {
        self.data_type == DataType::Picklist
    }

    pub fn is_boolean(&self) -> bool {
        self.data_type == DataType::Boolean
    }

    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.picklist_options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}
