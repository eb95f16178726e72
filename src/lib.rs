#![deny(rust_2018_idioms)]
#![doc = include_str!("../README.md")]

mod domain;
mod form;
mod io;
mod options;


pub use domain::{
    DataType, FieldSpec, FieldValue, FormDefinition, PicklistOption, definition_schema,
    parse_form_definition,
};
pub use form::{
    ErrorEvent, ErrorLogEntry, FieldSpecError, FieldState, FieldStatus, FieldValidator,
    FormState, InterpretError, ValidationResult, ValueChangeEvent,
};
pub use io::{DocumentFormat, form_definition_from_str, load_form_definition, parse_document_str};
pub use options::{Locale, ValidatorOptions};

pub mod prelude {
    pub use super::{
        DataType, FieldSpec, FieldState, FieldValue, FormState, Locale, ValidatorOptions,
    };
}
