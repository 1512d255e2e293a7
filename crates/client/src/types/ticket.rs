// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{opt_quantity_str, quantity_str};
use serde::Serialize;

/// A ticket, joined from its owner and event lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TicketInfo {
    #[serde(serialize_with = "quantity_str")]
    pub id: u128,
    pub owner: Option<String>,
    #[serde(serialize_with = "opt_quantity_str")]
    pub event_id: Option<u128>,
}

impl TicketInfo {
    /// A ticket exists when the contract knows either its owner or its event.
    pub fn exists(&self) -> bool {
        self.owner.is_some() || self.event_id.is_some()
    }

    /// Case-insensitive owner comparison.
    pub fn is_owned_by(&self, address: &str) -> bool {
        self.owner
            .as_deref()
            .is_some_and(|owner| owner.eq_ignore_ascii_case(address))
    }
}
