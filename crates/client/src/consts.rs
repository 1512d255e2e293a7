// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract function names and call limits.

/// Path of the read-only call endpoint, relative to the API base
pub const CALL_READ_PATH: &str = "/v2/contracts/call-read";

/// Path prefix of the BNS names-by-address lookup, relative to the BNS API base
pub const BNS_NAMES_BY_ADDRESS_PATH: &str = "/names/address";

/// Read-only functions
pub const GET_EVENT_INFO: &str = "get-event-info";
pub const GET_TICKET_OWNER: &str = "get-ticket-owner";
pub const GET_TICKET_EVENT: &str = "get-ticket-event";
pub const GET_ADMIN: &str = "get-admin";
pub const GET_TOTAL_EVENTS: &str = "get-total-events";
pub const GET_TOTAL_TICKETS: &str = "get-total-tickets";
pub const IS_TICKET_OWNER: &str = "is-ticket-owner";
pub const GET_LATEST_EVENTS: &str = "get-latest-events";
pub const GET_ALL_PRESENTS: &str = "get-all-presents";

/// Public (signed) functions
pub const CREATE_EVENT: &str = "create-event";
pub const BUY_TICKET: &str = "buy-ticket";
pub const TRANSFER_TICKET: &str = "transfer-ticket";
pub const UPDATE_EVENT: &str = "update-event";
pub const CANCEL_EVENT: &str = "cancel-event";
pub const SET_ADMIN: &str = "set-admin";
pub const CREATE_PRESENT: &str = "create-present";
pub const CLAIM_PRESENT: &str = "claim-present";
pub const WITHDRAW_PRESENT: &str = "withdraw-present";

/// Upper bound on event ids looked up one by one when the contract's
/// paginated listing is unavailable
pub const MAX_EVENT_SCAN: u128 = 500;

/// Tickets that can be bought in a single `buy-ticket` call
pub const MAX_TICKETS_PER_PURCHASE: u128 = 10;

/// Maximum length of the contract's `string-ascii` event fields
pub const MAX_EVENT_NAME_LEN: usize = 100;
pub const MAX_EVENT_DESCRIPTION_LEN: usize = 500;
pub const MAX_EVENT_VENUE_LEN: usize = 100;
pub const MAX_PRESENT_TITLE_LEN: usize = 100;
