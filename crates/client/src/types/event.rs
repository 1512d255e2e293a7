// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::quantity_str;
use crate::decode::{FromTuple, flag_field, quantity_field, text_field};
use serde::Serialize;
use serde_json::Value;

/// An event as stored by the ticketing contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EventInfo {
    pub name: String,
    pub description: String,
    pub venue: String,
    /// Unix timestamp, seconds
    #[serde(serialize_with = "quantity_str")]
    pub date: u128,
    /// Ticket price in micro-STX
    #[serde(serialize_with = "quantity_str")]
    pub price: u128,
    #[serde(serialize_with = "quantity_str")]
    pub total_tickets: u128,
    #[serde(serialize_with = "quantity_str")]
    pub sold_tickets: u128,
    pub active: bool,
}

impl EventInfo {
    pub fn remaining_tickets(&self) -> u128 {
        self.total_tickets.saturating_sub(self.sold_tickets)
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining_tickets() == 0
    }
}

impl FromTuple for EventInfo {
    fn from_tuple(tuple: &Value) -> Self {
        Self {
            name: text_field(tuple, "name"),
            description: text_field(tuple, "description"),
            venue: text_field(tuple, "venue"),
            date: quantity_field(tuple, "date"),
            price: quantity_field(tuple, "price"),
            total_tickets: quantity_field(tuple, "total-tickets"),
            sold_tickets: quantity_field(tuple, "sold-tickets"),
            active: flag_field(tuple, "active"),
        }
    }
}
