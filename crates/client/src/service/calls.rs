// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builders for public (state-changing) contract calls.
//!
//! A [`ContractCall`] holds everything a wallet needs to sign and broadcast
//! the transaction: the contract, the function and its encoded arguments.

use crate::clarity::{ClarityValue, WireValue, encode};
use crate::consts::*;
use crate::error::ServiceError;
use config::{ContractConfig, Network};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// An unsigned public function call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCall {
    pub contract_address: String,
    pub contract_name: String,
    pub function_name: String,
    pub function_args: Vec<WireValue>,
    #[serde(serialize_with = "serialize_network")]
    pub network: Network,
}

fn serialize_network<S: serde::Serializer>(network: &Network, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(network.as_str())
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub name: String,
    pub description: String,
    pub venue: String,
    /// Unix timestamp, seconds
    pub date: u128,
    /// Price per ticket in micro-STX
    pub price: u128,
    pub total_tickets: u128,
}

#[derive(Debug, Clone, Copy)]
pub struct BuyTicketParams {
    pub event_id: u128,
    /// 1 to 10 tickets
    pub amount: u128,
}

#[derive(Debug, Clone)]
pub struct TransferTicketParams {
    pub ticket_id: u128,
    pub new_owner: String,
}

/// Fields left as `None` (or empty / zero) are not changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub event_id: u128,
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub price: Option<u128>,
}

#[derive(Debug, Clone)]
pub struct CreatePresentParams {
    pub title: String,
    /// Locked amount in micro-STX
    pub amount: u128,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ClaimPresentParams {
    pub present_id: u128,
    pub password: String,
}

impl ContractCall {
    fn new(contract: &ContractConfig, function: &str, args: &[ClarityValue]) -> Self {
        Self {
            contract_address: contract.address.clone(),
            contract_name: contract.name.clone(),
            function_name: function.to_string(),
            function_args: args.iter().map(encode).collect(),
            network: contract.network,
        }
    }

    /// `create-event` (admin only)
    pub fn create_event(
        contract: &ContractConfig,
        params: &CreateEventParams,
    ) -> Result<Self, ServiceError> {
        ascii_arg("name", &params.name, MAX_EVENT_NAME_LEN, true)?;
        ascii_arg("description", &params.description, MAX_EVENT_DESCRIPTION_LEN, false)?;
        ascii_arg("venue", &params.venue, MAX_EVENT_VENUE_LEN, true)?;
        if params.total_tickets == 0 {
            return Err(ServiceError::InvalidArgument(
                "total tickets must be greater than 0".to_string(),
            ));
        }

        Ok(Self::new(
            contract,
            CREATE_EVENT,
            &[
                ClarityValue::string_ascii(&params.name),
                ClarityValue::string_ascii(&params.description),
                ClarityValue::string_ascii(&params.venue),
                ClarityValue::UInt(params.date),
                ClarityValue::UInt(params.price),
                ClarityValue::UInt(params.total_tickets),
            ],
        ))
    }

    /// `buy-ticket`
    pub fn buy_ticket(contract: &ContractConfig, params: BuyTicketParams) -> Result<Self, ServiceError> {
        if !(1..=MAX_TICKETS_PER_PURCHASE).contains(&params.amount) {
            return Err(ServiceError::InvalidArgument(format!(
                "ticket amount must be between 1 and {}, got {}",
                MAX_TICKETS_PER_PURCHASE, params.amount
            )));
        }

        Ok(Self::new(
            contract,
            BUY_TICKET,
            &[ClarityValue::UInt(params.event_id), ClarityValue::UInt(params.amount)],
        ))
    }

    /// `transfer-ticket`
    pub fn transfer_ticket(
        contract: &ContractConfig,
        params: &TransferTicketParams,
    ) -> Result<Self, ServiceError> {
        principal_arg("new owner", &params.new_owner)?;

        Ok(Self::new(
            contract,
            TRANSFER_TICKET,
            &[
                ClarityValue::UInt(params.ticket_id),
                ClarityValue::principal(&params.new_owner),
            ],
        ))
    }

    /// `update-event` (admin only)
    ///
    /// Empty strings and a zero price are sent as `none`.
    pub fn update_event(
        contract: &ContractConfig,
        params: &UpdateEventParams,
    ) -> Result<Self, ServiceError> {
        let name = non_empty(&params.name);
        let description = non_empty(&params.description);
        let venue = non_empty(&params.venue);
        let price = params.price.filter(|p| *p > 0);

        if let Some(name) = name {
            ascii_arg("name", name, MAX_EVENT_NAME_LEN, true)?;
        }
        if let Some(description) = description {
            ascii_arg("description", description, MAX_EVENT_DESCRIPTION_LEN, false)?;
        }
        if let Some(venue) = venue {
            ascii_arg("venue", venue, MAX_EVENT_VENUE_LEN, true)?;
        }

        Ok(Self::new(
            contract,
            UPDATE_EVENT,
            &[
                ClarityValue::UInt(params.event_id),
                ClarityValue::optional(name, ClarityValue::string_ascii),
                ClarityValue::optional(description, ClarityValue::string_ascii),
                ClarityValue::optional(venue, ClarityValue::string_ascii),
                ClarityValue::optional(price, ClarityValue::UInt),
            ],
        ))
    }

    /// `cancel-event` (admin only)
    pub fn cancel_event(contract: &ContractConfig, event_id: u128) -> Self {
        Self::new(contract, CANCEL_EVENT, &[ClarityValue::UInt(event_id)])
    }

    /// `set-admin` (admin only)
    pub fn set_admin(contract: &ContractConfig, new_admin: &str) -> Result<Self, ServiceError> {
        principal_arg("new admin", new_admin)?;
        Ok(Self::new(
            contract,
            SET_ADMIN,
            &[ClarityValue::principal(new_admin)],
        ))
    }

    /// `create-present`
    ///
    /// Only the SHA-256 of the password goes on chain.
    pub fn create_present(
        contract: &ContractConfig,
        params: &CreatePresentParams,
    ) -> Result<Self, ServiceError> {
        ascii_arg("title", &params.title, MAX_PRESENT_TITLE_LEN, true)?;
        if params.amount == 0 {
            return Err(ServiceError::InvalidArgument(
                "present amount must be greater than 0".to_string(),
            ));
        }
        if params.password.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "password cannot be empty".to_string(),
            ));
        }

        Ok(Self::new(
            contract,
            CREATE_PRESENT,
            &[
                ClarityValue::string_ascii(&params.title),
                ClarityValue::UInt(params.amount),
                ClarityValue::buffer(password_hash(&params.password)),
            ],
        ))
    }

    /// `claim-present`; the contract hashes the password and compares.
    pub fn claim_present(
        contract: &ContractConfig,
        params: &ClaimPresentParams,
    ) -> Result<Self, ServiceError> {
        if params.password.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "password cannot be empty".to_string(),
            ));
        }

        Ok(Self::new(
            contract,
            CLAIM_PRESENT,
            &[
                ClarityValue::UInt(params.present_id),
                ClarityValue::buffer(params.password.as_bytes()),
            ],
        ))
    }

    /// `withdraw-present`
    pub fn withdraw_present(contract: &ContractConfig, present_id: u128) -> Self {
        Self::new(contract, WITHDRAW_PRESENT, &[ClarityValue::UInt(present_id)])
    }
}

/// SHA-256 of a present password, as stored in `password-hash`.
pub fn password_hash(password: &str) -> Vec<u8> {
    Sha256::digest(password.as_bytes()).to_vec()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn ascii_arg(field: &str, value: &str, max_len: usize, required: bool) -> Result<(), ServiceError> {
    if required && value.trim().is_empty() {
        return Err(ServiceError::InvalidArgument(format!("{} is required", field)));
    }
    if !value.is_ascii() {
        return Err(ServiceError::InvalidArgument(format!(
            "{} must be ASCII",
            field
        )));
    }
    if value.len() > max_len {
        return Err(ServiceError::InvalidArgument(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(())
}

fn principal_arg(field: &str, value: &str) -> Result<(), ServiceError> {
    let valid = value.starts_with('S')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_');
    if !valid {
        return Err(ServiceError::InvalidArgument(format!(
            "{} '{}' is not a valid principal",
            field, value
        )));
    }
    Ok(())
}
