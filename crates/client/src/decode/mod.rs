// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lenient decoding of read-only call responses into domain records.
//!
//! Response bodies have the shape `{"value": <wire value>}`. The nested value
//! may be wrapped in optionals and responses, and may carry `type` tags or
//! just bare `value` keys. The functions here never fail: a missing `value`
//! yields `None` (or an empty list) and missing fields fall back to defaults.
//! Whether an absent value is an error is decided by the caller.
//!
//! An untagged `{"value": ...}` object is ambiguous: it is either a bare
//! wrapper or a tuple whose only field is named `value`. [`unwrap_value`]
//! peels at most one untagged wrapper per call and treats anything below it
//! as data.

pub mod fields;

pub use fields::{flag_field, parse_quantity, payload, quantity_field, text_field};

use crate::types::Indexed;
use serde_json::Value;

/// A record that can be shaped from a contract tuple.
pub trait FromTuple: Sized {
    /// Build the record from the tuple's field object.
    fn from_tuple(tuple: &Value) -> Self;
}

/// The top-level `value` of a response body, if present and not `null`.
pub fn response_value(body: &Value) -> Option<&Value> {
    body.get("value").filter(|v| !v.is_null())
}

/// Strip optional, response and untyped wrappers from a value.
///
/// Typed tuples and lists resolve to their field object / item array. `none`
/// and error responses resolve to `None`. Only one untagged `{"value": ...}`
/// wrapper is removed.
pub fn unwrap_value(value: &Value) -> Option<&Value> {
    let mut current = value;
    let mut peeled_untagged = false;
    loop {
        let Value::Object(obj) = current else {
            return (!current.is_null()).then_some(current);
        };

        match obj.get("type").and_then(Value::as_str) {
            Some("none") => return None,
            Some("response") => match obj.get("value").and_then(|r| r.get("ok")) {
                Some(ok) => current = ok,
                None => return None,
            },
            Some("tuple") | Some("list") => return obj.get("value"),
            Some(_) => current = obj.get("value")?,
            None => match obj.get("value") {
                Some(inner) if obj.len() == 1 && !peeled_untagged => {
                    peeled_untagged = true;
                    current = inner;
                }
                _ => return Some(current),
            },
        }
    }
}

/// Shape a record from any value that unwraps to a tuple.
pub fn record_from_value<T: FromTuple>(value: &Value) -> Option<T> {
    unwrap_value(value)
        .filter(|v| v.is_object())
        .map(T::from_tuple)
}

/// Decode a single record from a response body.
pub fn decode_record<T: FromTuple>(body: &Value) -> Option<T> {
    response_value(body).and_then(record_from_value)
}

/// Decode a list of optional tuples into records with caller-assigned ids.
///
/// The element at position `i` gets identifier `start_id + i`. `none`
/// elements are dropped and do not shift the ids of later elements.
pub fn decode_indexed_list<T: FromTuple>(list: &Value, start_id: u128) -> Vec<Indexed<T>> {
    let Some(items) = unwrap_value(list).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let info = record_from_value(item)?;
            let Some(id) = start_id.checked_add(index as u128) else {
                tracing::warn!(
                    start_id = %start_id,
                    index,
                    "List element id out of range, dropping element"
                );
                return None;
            };
            Some(Indexed { id, info })
        })
        .collect()
}

/// Decode a list-returning response body, empty when the value is absent.
pub fn decode_list_response<T: FromTuple>(body: &Value, start_id: u128) -> Vec<Indexed<T>> {
    response_value(body)
        .map(|list| decode_indexed_list(list, start_id))
        .unwrap_or_default()
}

/// Decode a quantity result (count, identifier).
pub fn decode_quantity(body: &Value) -> Option<u128> {
    response_value(body)
        .and_then(payload)
        .and_then(parse_quantity)
}

/// Decode a text result (principal, name).
pub fn decode_text(body: &Value) -> Option<String> {
    response_value(body)
        .and_then(payload)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Decode a boolean result.
pub fn decode_flag(body: &Value) -> Option<bool> {
    response_value(body).and_then(payload).and_then(Value::as_bool)
}
