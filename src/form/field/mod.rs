mod convert;
mod messages;
mod state;
mod validator;

pub use state::{ErrorEvent, FieldState, FieldStatus, ValueChangeEvent};
pub use validator::{FieldValidator, ValidationResult};
