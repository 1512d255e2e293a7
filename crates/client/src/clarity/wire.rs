// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON wire form of Clarity values, as accepted by the read-only call API.
//!
//! Every value is an object `{"type": <tag>, "value": <payload>}`:
//!
//! | tag            | payload                                   |
//! |----------------|-------------------------------------------|
//! | `uint`, `int`  | decimal string                            |
//! | `buffer`       | lowercase hex, no `0x` prefix             |
//! | `bool`         | JSON boolean                              |
//! | `principal`    | address string, contract name dropped     |
//! | `string-ascii` | string                                    |
//! | `string-utf8`  | string                                    |
//! | `none`         | no `value` key                            |
//! | `some`         | nested wire value                         |
//! | `list`         | array of wire values                      |
//! | `tuple`        | object of wire values, key order kept     |
//! | `response`     | `{"ok": <wire>}` or `{"error": <wire>}`   |

use super::value::{ClarityValue, Principal};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Every tag the wire format defines.
pub const WIRE_TAGS: &[&str] = &[
    "uint",
    "int",
    "buffer",
    "bool",
    "principal",
    "string-ascii",
    "string-utf8",
    "none",
    "some",
    "list",
    "tuple",
    "response",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("Unknown Clarity value type '{0}'")]
    UnknownVariant(String),

    #[error("Malformed wire value: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum WireValue {
    #[serde(rename = "uint")]
    UInt(#[serde(with = "decimal_u128")] u128),
    #[serde(rename = "int")]
    Int(#[serde(with = "decimal_i128")] i128),
    #[serde(rename = "buffer")]
    Buffer(#[serde(with = "hex_bytes")] Vec<u8>),
    #[serde(rename = "bool")]
    Bool(bool),
    #[serde(rename = "principal")]
    Principal(String),
    #[serde(rename = "string-ascii")]
    StringAscii(String),
    #[serde(rename = "string-utf8")]
    StringUtf8(String),
    #[serde(rename = "none")]
    None,
    #[serde(rename = "some")]
    Some(Box<WireValue>),
    #[serde(rename = "list")]
    List(Vec<WireValue>),
    #[serde(rename = "tuple")]
    Tuple(IndexMap<String, WireValue>),
    #[serde(rename = "response")]
    Response(WireResponse),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireResponse {
    Ok(Box<WireValue>),
    Error(Box<WireValue>),
}

/// Encode a Clarity value into its wire form.
pub fn encode(value: &ClarityValue) -> WireValue {
    match value {
        ClarityValue::UInt(n) => WireValue::UInt(*n),
        ClarityValue::Int(n) => WireValue::Int(*n),
        ClarityValue::Buffer(bytes) => WireValue::Buffer(bytes.clone()),
        ClarityValue::Bool(b) => WireValue::Bool(*b),
        ClarityValue::Principal(p) => WireValue::Principal(p.address().to_string()),
        ClarityValue::StringAscii(s) => WireValue::StringAscii(s.clone()),
        ClarityValue::StringUtf8(s) => WireValue::StringUtf8(s.clone()),
        ClarityValue::Optional(None) => WireValue::None,
        ClarityValue::Optional(Some(inner)) => WireValue::Some(Box::new(encode(inner))),
        ClarityValue::List(items) => WireValue::List(items.iter().map(encode).collect()),
        ClarityValue::Tuple(entries) => WireValue::Tuple(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), encode(value)))
                .collect(),
        ),
        ClarityValue::ResponseOk(inner) => {
            WireValue::Response(WireResponse::Ok(Box::new(encode(inner))))
        }
        ClarityValue::ResponseErr(inner) => {
            WireValue::Response(WireResponse::Error(Box::new(encode(inner))))
        }
    }
}

impl From<&ClarityValue> for WireValue {
    fn from(value: &ClarityValue) -> Self {
        encode(value)
    }
}

impl From<WireValue> for ClarityValue {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::UInt(n) => ClarityValue::UInt(n),
            WireValue::Int(n) => ClarityValue::Int(n),
            WireValue::Buffer(bytes) => ClarityValue::Buffer(bytes),
            WireValue::Bool(b) => ClarityValue::Bool(b),
            WireValue::Principal(s) => ClarityValue::Principal(Principal::parse(&s)),
            WireValue::StringAscii(s) => ClarityValue::StringAscii(s),
            WireValue::StringUtf8(s) => ClarityValue::StringUtf8(s),
            WireValue::None => ClarityValue::Optional(None),
            WireValue::Some(inner) => ClarityValue::Optional(Some(Box::new((*inner).into()))),
            WireValue::List(items) => {
                ClarityValue::List(items.into_iter().map(ClarityValue::from).collect())
            }
            WireValue::Tuple(entries) => ClarityValue::Tuple(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
            WireValue::Response(WireResponse::Ok(inner)) => {
                ClarityValue::ResponseOk(Box::new((*inner).into()))
            }
            WireValue::Response(WireResponse::Error(inner)) => {
                ClarityValue::ResponseErr(Box::new((*inner).into()))
            }
        }
    }
}

impl WireValue {
    /// Parse a JSON wire value.
    ///
    /// An unrecognised `type` tag anywhere in the tree is reported as
    /// [`WireError::UnknownVariant`] rather than as a generic parse failure.
    pub fn from_json(value: &Value) -> Result<Self, WireError> {
        check_tags(value)?;
        serde_json::from_value(value.clone()).map_err(|e| WireError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<Value, WireError> {
        serde_json::to_value(self).map_err(|e| WireError::Malformed(e.to_string()))
    }
}

fn check_tags(value: &Value) -> Result<(), WireError> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| WireError::Malformed(format!("missing 'type' tag in {}", value)))?;

    if !WIRE_TAGS.contains(&tag) {
        return Err(WireError::UnknownVariant(tag.to_string()));
    }

    let payload = value.get("value");
    match (tag, payload) {
        ("some", Some(inner)) => check_tags(inner),
        ("list", Some(Value::Array(items))) => items.iter().try_for_each(check_tags),
        ("tuple", Some(Value::Object(fields))) => fields.values().try_for_each(check_tags),
        ("response", Some(Value::Object(branches))) => branches.values().try_for_each(check_tags),
        _ => Ok(()),
    }
}

macro_rules! decimal_module {
    ($name:ident, $ty:ty, $visit_wide:ident) => {
        mod $name {
            use serde::{Deserializer, Serializer, de};
            use std::fmt;

            pub fn serialize<S: Serializer>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(value)
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$ty, D::Error> {
                struct DecimalVisitor;

                impl de::Visitor<'_> for DecimalVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("a decimal integer string or an integer")
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$ty, E> {
                        v.trim().parse::<$ty>().map_err(E::custom)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<$ty, E> {
                        <$ty>::try_from(v).map_err(E::custom)
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<$ty, E> {
                        <$ty>::try_from(v).map_err(E::custom)
                    }

                    fn $visit_wide<E: de::Error>(self, v: $ty) -> Result<$ty, E> {
                        Ok(v)
                    }
                }

                deserializer.deserialize_any(DecimalVisitor)
            }
        }
    };
}

decimal_module!(decimal_u128, u128, visit_u128);
decimal_module!(decimal_i128, i128, visit_i128);

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let s = s.strip_prefix("0x").unwrap_or(&s);
        hex::decode(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_json(value: &ClarityValue) -> Value {
        encode(value).to_json().unwrap()
    }

    #[test]
    fn test_encode_uint_max() {
        assert_eq!(
            wire_json(&ClarityValue::UInt(u128::MAX)),
            json!({"type": "uint", "value": "340282366920938463463374607431768211455"})
        );
    }

    #[test]
    fn test_encode_int_min() {
        assert_eq!(
            wire_json(&ClarityValue::Int(i128::MIN)),
            json!({"type": "int", "value": "-170141183460469231731687303715884105728"})
        );
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(
            wire_json(&ClarityValue::buffer(vec![0xde, 0xad, 0xBE, 0xef])),
            json!({"type": "buffer", "value": "deadbeef"})
        );
        assert_eq!(
            wire_json(&ClarityValue::Bool(false)),
            json!({"type": "bool", "value": false})
        );
        assert_eq!(
            wire_json(&ClarityValue::string_ascii("Gala")),
            json!({"type": "string-ascii", "value": "Gala"})
        );
        assert_eq!(
            wire_json(&ClarityValue::string_utf8("Noël 🎄")),
            json!({"type": "string-utf8", "value": "Noël 🎄"})
        );
    }

    #[test]
    fn test_encode_contract_principal_drops_name() {
        assert_eq!(
            wire_json(&ClarityValue::principal(
                "SP3YGA4JT7289RWGB9SDXTNRCN2FQCRVFSTRRPN4F.ticketing"
            )),
            json!({"type": "principal", "value": "SP3YGA4JT7289RWGB9SDXTNRCN2FQCRVFSTRRPN4F"})
        );
    }

    #[test]
    fn test_encode_optional() {
        assert_eq!(wire_json(&ClarityValue::none()), json!({"type": "none"}));
        assert_eq!(
            wire_json(&ClarityValue::some(ClarityValue::uint(7u8))),
            json!({"type": "some", "value": {"type": "uint", "value": "7"}})
        );
    }

    #[test]
    fn test_encode_tuple_preserves_key_order() {
        let value = ClarityValue::tuple([
            ("a", ClarityValue::Bool(true)),
            ("b", ClarityValue::uint(1u8)),
        ]);
        let encoded = wire_json(&value);
        assert_eq!(
            encoded,
            json!({
                "type": "tuple",
                "value": {
                    "a": {"type": "bool", "value": true},
                    "b": {"type": "uint", "value": "1"}
                }
            })
        );
        let keys: Vec<_> = encoded["value"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["a", "b"]);

        let reversed = ClarityValue::tuple([
            ("b", ClarityValue::uint(1u8)),
            ("a", ClarityValue::Bool(true)),
        ]);
        let text = serde_json::to_string(&encode(&reversed)).unwrap();
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
    }

    #[test]
    fn test_encode_list_and_responses() {
        let value = ClarityValue::list([
            ClarityValue::ok(ClarityValue::uint(1u8)),
            ClarityValue::err(ClarityValue::uint(404u16)),
        ]);
        assert_eq!(
            wire_json(&value),
            json!({
                "type": "list",
                "value": [
                    {"type": "response", "value": {"ok": {"type": "uint", "value": "1"}}},
                    {"type": "response", "value": {"error": {"type": "uint", "value": "404"}}}
                ]
            })
        );
    }

    #[test]
    fn test_round_trip_all_variants() {
        let value = ClarityValue::tuple([
            ("uint", ClarityValue::UInt(u128::MAX)),
            ("int", ClarityValue::Int(-(1i128 << 100))),
            ("buffer", ClarityValue::buffer(vec![0, 1, 254, 255])),
            ("bool", ClarityValue::Bool(true)),
            (
                "principal",
                ClarityValue::principal("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"),
            ),
            ("ascii", ClarityValue::string_ascii("venue")),
            ("utf8", ClarityValue::string_utf8("café")),
            ("none", ClarityValue::none()),
            ("some", ClarityValue::some(ClarityValue::uint(3u8))),
            (
                "list",
                ClarityValue::list([ClarityValue::Bool(false), ClarityValue::Bool(true)]),
            ),
            ("ok", ClarityValue::ok(ClarityValue::Bool(true))),
            ("err", ClarityValue::err(ClarityValue::uint(2u8))),
        ]);

        let text = serde_json::to_string(&encode(&value)).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        let decoded: ClarityValue = WireValue::from_json(&parsed).unwrap().into();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_from_json_unknown_variant() {
        let value = json!({"type": "float", "value": "1.5"});
        assert_eq!(
            WireValue::from_json(&value),
            Err(WireError::UnknownVariant("float".to_string()))
        );
    }

    #[test]
    fn test_from_json_nested_unknown_variant() {
        let value = json!({
            "type": "tuple",
            "value": {"inner": {"type": "some", "value": {"type": "map", "value": {}}}}
        });
        assert_eq!(
            WireValue::from_json(&value),
            Err(WireError::UnknownVariant("map".to_string()))
        );
    }

    #[test]
    fn test_from_json_malformed_payload() {
        let value = json!({"type": "uint", "value": "-1"});
        assert!(matches!(
            WireValue::from_json(&value),
            Err(WireError::Malformed(_))
        ));

        let missing_tag = json!({"value": "1"});
        assert!(matches!(
            WireValue::from_json(&missing_tag),
            Err(WireError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_json_accepts_numeric_integers() {
        let value = json!({"type": "uint", "value": 42});
        assert_eq!(WireValue::from_json(&value), Ok(WireValue::UInt(42)));
    }

    #[test]
    fn test_from_json_accepts_prefixed_buffer() {
        let value = json!({"type": "buffer", "value": "0x0aff"});
        assert_eq!(
            WireValue::from_json(&value),
            Ok(WireValue::Buffer(vec![0x0a, 0xff]))
        );
    }
}
