//! Bulk API request bodies and response parsing.
//!
//! The `_bulk` body is newline-delimited JSON: an action line followed by the
//! document line, once per document.

use serde_json::{json, Map, Value};

use crate::errors::SearchIndexError;
use crate::types::{BatchOperationResult, BatchOperationSummary, IndexDocumentRequest, IndexTarget};

/// Build the action line for indexing into `target`.
pub(crate) fn index_action(target: &IndexTarget) -> Value {
    let mut action = Map::new();
    action.insert("_index".to_string(), json!(target.index));
    if let Some(ref document_type) = target.document_type {
        action.insert("_type".to_string(), json!(document_type));
    }
    json!({ "index": action })
}

/// Build the bulk body lines for the given requests.
pub(crate) fn bulk_body(requests: &[IndexDocumentRequest]) -> Vec<Value> {
    let mut lines = Vec::with_capacity(requests.len() * 2);
    for request in requests {
        lines.push(index_action(&request.target));
        lines.push(request.document.clone());
    }
    lines
}

/// Parse a successful `_bulk` response body into a summary.
///
/// # Arguments
///
/// * `response` - The decoded response body
///
/// # Returns
///
/// * `Ok(BatchOperationSummary)` - One result per reported item
/// * `Err(SearchIndexError::ParseError)` - If `items` is missing or malformed
pub(crate) fn parse_bulk_response(response: Value) -> Result<BatchOperationSummary, SearchIndexError> {
    let items = response
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchIndexError::parse("Bulk response has no items array"))?;

    let mut results = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        // Each item is keyed by its action name, e.g. {"index": {...}}.
        let outcome = item
            .as_object()
            .and_then(|actions| actions.values().next())
            .ok_or_else(|| {
                SearchIndexError::parse(format!("Bulk response item {} is malformed", position))
            })?;

        let status = outcome
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .unwrap_or_default();
        let error = outcome.get("error").map(describe_item_error);

        results.push(BatchOperationResult {
            position,
            document_id: outcome
                .get("_id")
                .and_then(Value::as_str)
                .map(str::to_string),
            status,
            success: error.is_none() && (200..300).contains(&status),
            error,
        });
    }

    let succeeded = results.iter().filter(|r| r.success).count();
    let took_ms = response
        .get("took")
        .and_then(Value::as_u64)
        .unwrap_or_default();

    Ok(BatchOperationSummary {
        total: results.len(),
        succeeded,
        failed: results.len() - succeeded,
        took_ms,
        results,
        response,
    })
}

fn describe_item_error(error: &Value) -> String {
    match error {
        Value::Object(fields) => {
            let kind = fields.get("type").and_then(Value::as_str);
            let reason = fields.get("reason").and_then(Value::as_str);
            match (kind, reason) {
                (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
                (Some(kind), None) => kind.to_string(),
                (None, Some(reason)) => reason.to_string(),
                (None, None) => error.to_string(),
            }
        }
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}
