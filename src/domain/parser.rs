use anyhow::{Context, Result};
use jsonschema::validator_for;
use serde_json::Value;

use crate::form::FieldSpecError;

use super::definition::FormDefinition;

/// JSON Schema describing a form definition document.
pub fn definition_schema() -> Result<Value> {
    let schema = schemars::schema_for!(FormDefinition);
    serde_json::to_value(&schema).context("failed to serialize the form definition schema")
}

/// Check a document against [`definition_schema`] and decode it.
pub fn parse_form_definition(value: &Value) -> Result<FormDefinition> {
    let schema = definition_schema()?;
    let validator =
        validator_for(&schema).context("failed to compile the form definition schema")?;

    let issues = validator
        .iter_errors(value)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            let prefix = if pointer.is_empty() {
                "<root>".to_string()
            } else {
                pointer
            };
            format!("{prefix}: {error}")
        })
        .collect::<Vec<_>>();
    if !issues.is_empty() {
        return Err(FieldSpecError::Schema { issues }.into());
    }

    let definition: FormDefinition = serde_json::from_value(value.clone())
        .context("form definition could not be decoded")?;
    definition.check()?;
    tracing::debug!(
        fields = definition.fields.len(),
        title = definition.title.as_deref().unwrap_or("<untitled>"),
        "form definition parsed"
    );
    Ok(definition)
}
