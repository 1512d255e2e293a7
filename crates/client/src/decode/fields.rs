// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field extraction from decoded contract tuples.
//!
//! A tuple field may arrive as a typed wire value (`{"type": "uint", "value": "5"}`),
//! as a bare wrapper (`{"value": "5"}`), wrapped in an optional, or as a plain
//! JSON scalar. All of them resolve to the same payload. Fields that are
//! absent, `null`, `none` or of an unexpected shape fall back to a default.

use serde_json::Value;

/// Resolve a field value down to its scalar payload.
///
/// Returns `None` for `null` and for `none` optionals.
pub fn payload(value: &Value) -> Option<&Value> {
    let mut current = value;
    loop {
        match current {
            Value::Null => return None,
            Value::Object(obj) => {
                if obj.get("type").and_then(Value::as_str) == Some("none") {
                    return None;
                }
                match obj.get("value") {
                    Some(inner) => current = inner,
                    None => return Some(current),
                }
            }
            _ => return Some(current),
        }
    }
}

/// Parse a quantity (timestamp, price, count, identifier).
///
/// Quantities travel as decimal strings so they survive JavaScript-sized
/// number handling; plain JSON integers are accepted as well.
pub fn parse_quantity(value: &Value) -> Option<u128> {
    match value {
        Value::String(s) => s.trim().parse::<u128>().ok(),
        Value::Number(n) => n.as_u64().map(u128::from),
        _ => None,
    }
}

/// Quantity field of a tuple, `0` when absent or unparsable.
pub fn quantity_field(tuple: &Value, name: &str) -> u128 {
    let Some(raw) = tuple.get(name).and_then(payload) else {
        return 0;
    };

    parse_quantity(raw).unwrap_or_else(|| {
        tracing::debug!(field = %name, value = %raw, "Unparsable quantity field, using 0");
        0
    })
}

/// Text field of a tuple, empty when absent.
pub fn text_field(tuple: &Value, name: &str) -> String {
    match tuple.get(name).and_then(payload) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Flag field of a tuple, `false` when absent.
pub fn flag_field(tuple: &Value, name: &str) -> bool {
    match tuple.get(name).and_then(payload) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}
