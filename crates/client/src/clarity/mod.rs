// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clarity values and their JSON wire encoding.

pub mod value;
pub mod wire;

pub use value::{ClarityValue, Principal};
pub use wire::{WIRE_TAGS, WireError, WireResponse, WireValue, encode};
