mod error;
mod field;
mod state;

pub use error::{FieldSpecError, InterpretError};
pub use field::{
    ErrorEvent, FieldState, FieldStatus, FieldValidator, ValidationResult, ValueChangeEvent,
};
pub use state::{ErrorLogEntry, FormState};
