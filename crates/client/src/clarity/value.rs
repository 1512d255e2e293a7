// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed Clarity values used as contract arguments and results.

use indexmap::IndexMap;
use std::fmt;

/// An account or contract principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Principal {
    /// A standard account principal, e.g. `SP3YGA4JT7289RWGB9SDXTNRCN2FQCRVFSTRRPN4F`
    Standard { address: String },
    /// A contract principal, e.g. `SP3YGA4JT7289RWGB9SDXTNRCN2FQCRVFSTRRPN4F.ticketing`
    Contract { address: String, name: String },
}

impl Principal {
    /// Parse `<address>` or `<address>.<contract-name>`.
    pub fn parse(s: &str) -> Self {
        match s.split_once('.') {
            Some((address, name)) => Principal::Contract {
                address: address.to_string(),
                name: name.to_string(),
            },
            None => Principal::Standard {
                address: s.to_string(),
            },
        }
    }

    /// The address component, without any contract name.
    pub fn address(&self) -> &str {
        match self {
            Principal::Standard { address } | Principal::Contract { address, .. } => address,
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::Standard { address } => f.write_str(address),
            Principal::Contract { address, name } => write!(f, "{}.{}", address, name),
        }
    }
}

/// A Clarity value.
///
/// Clarity integers are 128 bits wide, so `u128`/`i128` hold every value
/// the chain can produce without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    UInt(u128),
    Int(i128),
    Buffer(Vec<u8>),
    Bool(bool),
    Principal(Principal),
    StringAscii(String),
    StringUtf8(String),
    Optional(Option<Box<ClarityValue>>),
    List(Vec<ClarityValue>),
    Tuple(IndexMap<String, ClarityValue>),
    ResponseOk(Box<ClarityValue>),
    ResponseErr(Box<ClarityValue>),
}

impl ClarityValue {
    pub fn uint(value: impl Into<u128>) -> Self {
        ClarityValue::UInt(value.into())
    }

    pub fn int(value: impl Into<i128>) -> Self {
        ClarityValue::Int(value.into())
    }

    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        ClarityValue::Buffer(bytes.into())
    }

    pub fn principal(s: &str) -> Self {
        ClarityValue::Principal(Principal::parse(s))
    }

    pub fn string_ascii(s: impl Into<String>) -> Self {
        ClarityValue::StringAscii(s.into())
    }

    pub fn string_utf8(s: impl Into<String>) -> Self {
        ClarityValue::StringUtf8(s.into())
    }

    pub fn some(value: ClarityValue) -> Self {
        ClarityValue::Optional(Some(Box::new(value)))
    }

    pub fn none() -> Self {
        ClarityValue::Optional(None)
    }

    /// `some(f(value))` when `value` is present, `none` otherwise.
    pub fn optional<T>(value: Option<T>, f: impl FnOnce(T) -> ClarityValue) -> Self {
        ClarityValue::Optional(value.map(|v| Box::new(f(v))))
    }

    pub fn list(items: impl IntoIterator<Item = ClarityValue>) -> Self {
        ClarityValue::List(items.into_iter().collect())
    }

    /// Build a tuple; entry order is kept as given.
    pub fn tuple<K: Into<String>>(entries: impl IntoIterator<Item = (K, ClarityValue)>) -> Self {
        ClarityValue::Tuple(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn ok(value: ClarityValue) -> Self {
        ClarityValue::ResponseOk(Box::new(value))
    }

    pub fn err(value: ClarityValue) -> Self {
        ClarityValue::ResponseErr(Box::new(value))
    }

    /// Clarity type name, used in logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ClarityValue::UInt(_) => "uint",
            ClarityValue::Int(_) => "int",
            ClarityValue::Buffer(_) => "buffer",
            ClarityValue::Bool(_) => "bool",
            ClarityValue::Principal(_) => "principal",
            ClarityValue::StringAscii(_) => "string-ascii",
            ClarityValue::StringUtf8(_) => "string-utf8",
            ClarityValue::Optional(Some(_)) => "some",
            ClarityValue::Optional(None) => "none",
            ClarityValue::List(_) => "list",
            ClarityValue::Tuple(_) => "tuple",
            ClarityValue::ResponseOk(_) | ClarityValue::ResponseErr(_) => "response",
        }
    }
}

impl From<bool> for ClarityValue {
    fn from(value: bool) -> Self {
        ClarityValue::Bool(value)
    }
}

impl From<Principal> for ClarityValue {
    fn from(value: Principal) -> Self {
        ClarityValue::Principal(value)
    }
}
