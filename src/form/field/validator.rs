use serde::Serialize;

use crate::domain::{DataType, FieldSpec, FieldValue};
use crate::form::error::InterpretError;
use crate::options::ValidatorOptions;

use super::convert::{digit_counts, parse_float_prefix, parses_as_calendar_value};

/// Outcome of a single validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: message.into(),
        }
    }
}

/// Decides whether a value satisfies its field's data type and constraints.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    options: ValidatorOptions,
}

impl FieldValidator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Never fails: values that cannot be interpreted for the data type are
    /// reported with the generic diagnostic.
    pub fn validate(&self, spec: &FieldSpec, value: &FieldValue) -> ValidationResult {
        match self.check(spec, value) {
            Ok(None) => ValidationResult::valid(),
            Ok(Some(message)) => ValidationResult::invalid(message),
            Err(err) => {
                tracing::debug!(error = %err, "value could not be interpreted");
                ValidationResult::invalid(self.options.locale.validation_failed())
            }
        }
    }

    fn check(
        &self,
        spec: &FieldSpec,
        value: &FieldValue,
    ) -> Result<Option<String>, InterpretError> {
        match &spec.data_type {
            DataType::Text => self.check_text(spec, value),
            DataType::Number => self.check_number(spec, value),
            DataType::Date => self.check_calendar(spec, value, false),
            DataType::DateTime => self.check_calendar(spec, value, true),
            DataType::Picklist => self.check_picklist(spec, value),
            DataType::Boolean | DataType::Unknown(_) => Ok(None),
        }
    }

    fn check_text(
        &self,
        spec: &FieldSpec,
        value: &FieldValue,
    ) -> Result<Option<String>, InterpretError> {
        let length = match value {
            FieldValue::Empty => return Ok(None),
            FieldValue::Text(text) => text.chars().count(),
            FieldValue::Number(number) => number.to_string().chars().count(),
            FieldValue::Bool(_) => {
                return Err(InterpretError::mismatch(&spec.label, &spec.data_type, value));
            }
        };
        match spec.effective_max_length() {
            Some(limit) if length > limit => {
                Ok(Some(self.options.locale.max_length_exceeded(limit)))
            }
            _ => Ok(None),
        }
    }

    fn check_number(
        &self,
        spec: &FieldSpec,
        value: &FieldValue,
    ) -> Result<Option<String>, InterpretError> {
        let locale = self.options.locale;
        let number = match value {
            FieldValue::Empty => return Ok(None),
            FieldValue::Text(text) if text.is_empty() => return Ok(None),
            FieldValue::Text(text) => parse_float_prefix(text)
                .map_err(|message| InterpretError::new(&spec.label, message))?,
            FieldValue::Number(number) => Some(*number).filter(|number| !number.is_nan()),
            FieldValue::Bool(_) => {
                return Err(InterpretError::mismatch(&spec.label, &spec.data_type, value));
            }
        };
        let Some(number) = number else {
            return Ok(Some(locale.not_a_number()));
        };
        let digits = digit_counts(number);

        // Both limits are checked; on a double failure the scale message is kept.
        let mut message = None;
        if let Some(precision) = spec.effective_precision()
            && digits.integer > precision as usize
        {
            message = Some(locale.precision_exceeded(precision));
        }
        if let Some(scale) = spec.scale
            && digits.fraction > scale as usize
        {
            message = Some(locale.scale_exceeded(scale));
        }
        Ok(message)
    }

    fn check_calendar(
        &self,
        spec: &FieldSpec,
        value: &FieldValue,
        with_time: bool,
    ) -> Result<Option<String>, InterpretError> {
        let text = match value {
            FieldValue::Empty => return Ok(None),
            FieldValue::Text(text) if text.is_empty() => return Ok(None),
            FieldValue::Text(text) => text,
            FieldValue::Bool(_) | FieldValue::Number(_) => {
                return Err(InterpretError::mismatch(&spec.label, &spec.data_type, value));
            }
        };
        if parses_as_calendar_value(text, &self.options) {
            return Ok(None);
        }
        let locale = self.options.locale;
        Ok(Some(if with_time {
            locale.invalid_date_time()
        } else {
            locale.invalid_date()
        }))
    }

    fn check_picklist(
        &self,
        spec: &FieldSpec,
        value: &FieldValue,
    ) -> Result<Option<String>, InterpretError> {
        match value {
            FieldValue::Empty => Ok(Some(self.options.locale.select_option())),
            FieldValue::Text(text) if text.is_empty() => {
                Ok(Some(self.options.locale.select_option()))
            }
            FieldValue::Text(_) => Ok(None),
            FieldValue::Bool(_) | FieldValue::Number(_) => {
                Err(InterpretError::mismatch(&spec.label, &spec.data_type, value))
            }
        }
    }
}
