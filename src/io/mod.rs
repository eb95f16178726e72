mod format;
mod input;

pub use format::DocumentFormat;
pub use input::{form_definition_from_str, load_form_definition, parse_document_str};
