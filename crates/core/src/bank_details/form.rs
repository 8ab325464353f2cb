use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use super::BankDetails;
use super::fields::{FIELD_DEFINITIONS, FieldDefinition};

/// Raw submitted form: field name to the value the browser sent.
pub type RawForm = Map<String, Value>;

/// Per-field messages for a rejected submission, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Turn a raw submission into a record.
///
/// Only presence is checked: every field must be non-empty, and numeric
/// fields must additionally read as a finite number. Text is kept verbatim.
pub fn coerce_form(raw: &RawForm) -> Result<BankDetails, FieldErrors> {
    let mut coerced = Map::with_capacity(FIELD_DEFINITIONS.len());
    let mut errors = FieldErrors::new();

    for def in &FIELD_DEFINITIONS {
        match coerce_field(def, raw.get(def.name)) {
            Ok(value) => {
                coerced.insert(def.name.to_owned(), value);
            },
            Err(message) => {
                errors.insert(def.name.to_owned(), message);
            },
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value(Value::Object(coerced)).map_err(|e| {
        tracing::error!(error = %e, "coerced form did not match the record shape");
        FieldErrors::from([("form".to_owned(), e.to_string())])
    })
}

fn coerce_field(def: &FieldDefinition, value: Option<&Value>) -> Result<Value, String> {
    let text = match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(def.required_message.to_owned()),
    };

    if !def.kind.is_numeric() {
        return Ok(Value::String(text));
    }

    text.trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("{} must be a number", def.label))
}
