// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod clarity;
pub mod consts;
pub mod decode;
pub mod error;
pub mod logging;
pub mod service;
pub mod types;
pub mod utils;

pub use clarity::{ClarityValue, Principal, WireValue, encode};
pub use error::ServiceError;
pub use service::{BnsService, ContractCall, ContractService};
