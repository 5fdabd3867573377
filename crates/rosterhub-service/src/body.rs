//! Tolerant decoding of `setTodo` request bodies.
//!
//! The browser front-end POSTs `JSON.stringify(...)` output under an
//! `application/x-www-form-urlencoded` content type. A form parser then
//! sees one pair whose *key* is the JSON text and whose value is empty.
//! The services accept both shapes: a proper JSON body, or that wrapped
//! form.

use serde_json::{Map, Value};

use crate::error::ServiceError;

/// Decodes a `setTodo` body into a JSON object.
pub fn decode_object(bytes: &[u8]) -> Result<Map<String, Value>, ServiceError> {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(bytes) {
        return Ok(map);
    }

    // Form-wrapped JSON: the text before the first '=' is the payload.
    let text = std::str::from_utf8(bytes)
        .map_err(|_| ServiceError::BadBody("body is not UTF-8".to_string()))?;
    let key = text.split('=').next().unwrap_or(text);
    match serde_json::from_str::<Value>(key) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ServiceError::BadBody(
            "expected a JSON object".to_string(),
        )),
    }
}

/// Splits a decoded body into the document id and the new data object.
///
/// The id arrives under the sport's id key (`id_persona`, `id_deportista`,
/// ...); every other pair becomes the document's replacement data. The id
/// value may be a string or a number, matching what forms actually send.
pub fn split_id(
    mut body: Map<String, Value>,
    id_field: &str,
) -> Result<(String, Value), ServiceError> {
    let id = match body.remove(id_field) {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(_) | None => {
            return Err(ServiceError::BadBody(format!(
                "missing id field: {}",
                id_field
            )))
        }
    };
    Ok((id, Value::Object(body)))
}
