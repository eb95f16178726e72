mod definition;
mod parser;
mod spec;

pub(crate) use definition::check_field_spec;
pub use definition::FormDefinition;
pub use parser::{definition_schema, parse_form_definition};
pub use spec::{DataType, FieldSpec, FieldValue, PicklistOption};
