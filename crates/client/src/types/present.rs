// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::quantity_str;
use crate::decode::{FromTuple, flag_field, quantity_field, text_field};
use serde::Serialize;
use serde_json::Value;

/// A password-locked STX gift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Present {
    pub creator: String,
    pub title: String,
    /// Locked amount in micro-STX
    #[serde(serialize_with = "quantity_str")]
    pub amount: u128,
    /// Hex SHA-256 of the claim password
    pub password_hash: String,
    pub claimed: bool,
    /// Empty until the present is claimed
    pub claimer: String,
    /// Block height at creation
    #[serde(serialize_with = "quantity_str")]
    pub created_at: u128,
}

impl Present {
    pub fn is_claimable(&self) -> bool {
        !self.claimed && self.amount > 0
    }
}

impl FromTuple for Present {
    fn from_tuple(tuple: &Value) -> Self {
        Self {
            creator: text_field(tuple, "creator"),
            title: text_field(tuple, "title"),
            amount: quantity_field(tuple, "amount"),
            password_hash: text_field(tuple, "password-hash"),
            claimed: flag_field(tuple, "claimed"),
            claimer: text_field(tuple, "claimer"),
            created_at: quantity_field(tuple, "created-at"),
        }
    }
}
