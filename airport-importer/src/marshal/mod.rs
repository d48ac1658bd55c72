//! Conversion of JSON records into DynamoDB items.
//!
//! Mapping: string to `S`, number to `N`, bool to `BOOL`, null to `NULL`,
//! array to `L` and object to `M`. Empty strings, arrays and objects are
//! written as `NULL`, which is what the table has always held for them.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use crate::errors::ImportError;

/// One table item, keyed by attribute name.
pub type Item = HashMap<String, AttributeValue>;

/// Marshal the record at `position` of the airports file into an item.
///
/// Only JSON objects become items; any other top-level value is rejected.
pub fn to_item(position: usize, value: &Value) -> Result<Item, ImportError> {
    match value {
        Value::Object(fields) => Ok(fields
            .iter()
            .map(|(name, field)| (name.clone(), to_attribute_value(field)))
            .collect()),
        other => Err(ImportError::marshal(
            position,
            format!("expected a JSON object, got {}", kind(other)),
        )),
    }
}

/// Marshal a single JSON value into an attribute value.
pub fn to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) if s.is_empty() => AttributeValue::Null(true),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) if items.is_empty() => AttributeValue::Null(true),
        Value::Array(items) => AttributeValue::L(items.iter().map(to_attribute_value).collect()),
        Value::Object(fields) if fields.is_empty() => AttributeValue::Null(true),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(name, field)| (name.clone(), to_attribute_value(field)))
                .collect(),
        ),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
