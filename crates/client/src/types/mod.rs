// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain records shaped from contract tuples.
//!
//! Quantities are `u128` in memory and serialize as decimal strings, the
//! same representation the contract API uses for integers.

pub mod event;
pub mod present;
pub mod ticket;

pub use event::EventInfo;
pub use present::Present;
pub use ticket::TicketInfo;

use serde::{Serialize, Serializer};

/// A record paired with its on-chain identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indexed<T> {
    #[serde(serialize_with = "quantity_str")]
    pub id: u128,
    pub info: T,
}

/// Serialize a quantity as a decimal string.
pub fn quantity_str<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Serialize an optional quantity as a decimal string or `null`.
pub fn opt_quantity_str<S: Serializer>(
    value: &Option<u128>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_none(),
    }
}
