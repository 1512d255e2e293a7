// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the ticketing contract.
//!
//! Read-only functions are answered by the node API over HTTP without a
//! signature. Public functions are only *built* here (see [`calls`]); signing
//! and broadcasting them is the wallet's job.

mod bns;
pub mod calls;
mod read;

pub use bns::BnsService;
pub use calls::{
    BuyTicketParams, ClaimPresentParams, ContractCall, CreateEventParams, CreatePresentParams,
    TransferTicketParams, UpdateEventParams,
};

use crate::clarity::{ClarityValue, WireValue, encode};
use crate::consts::CALL_READ_PATH;
use crate::error::ServiceError;
use config::{ContractConfig, HttpConfig, TicketingConfig};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Request body of a read-only call
#[derive(Debug, Serialize)]
struct ReadOnlyCallRequest<'a> {
    sender: &'a str,
    arguments: Vec<WireValue>,
}

#[derive(Debug, Clone)]
pub struct ContractService {
    contract: ContractConfig,
    client: Client,
    max_concurrency: usize,
}

impl ContractService {
    pub fn new(contract: ContractConfig, http: &HttpConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .map_err(ServiceError::ClientBuild)?;

        Ok(Self {
            contract,
            client,
            max_concurrency: http.max_concurrency,
        })
    }

    pub fn from_config(config: &TicketingConfig) -> Result<Self, ServiceError> {
        Self::new(config.contract.clone(), &config.http)
    }

    pub fn contract(&self) -> &ContractConfig {
        &self.contract
    }

    /// `{api}/v2/contracts/call-read/{address}/{contract}/{function}`
    pub fn endpoint(&self, function: &str) -> String {
        format!(
            "{}{}/{}/{}/{}",
            self.contract.api_base(),
            CALL_READ_PATH,
            self.contract.address,
            self.contract.name,
            function
        )
    }

    /// Call a read-only contract function and return the raw JSON body.
    ///
    /// The contract address doubles as the `sender`. Failures are not retried.
    pub async fn read_only_call(
        &self,
        function: &str,
        args: &[ClarityValue],
    ) -> Result<Value, ServiceError> {
        let endpoint = self.endpoint(function);
        let request = ReadOnlyCallRequest {
            sender: &self.contract.address,
            arguments: args.iter().map(encode).collect(),
        };

        tracing::debug!(
            endpoint = %endpoint,
            function = %function,
            args = args.len(),
            "Read-only call"
        );
        let started = Instant::now();

        let network_error = |source| ServiceError::Network {
            endpoint: endpoint.clone(),
            function: function.to_string(),
            source,
        };

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;

        tracing::debug!(
            function = %function,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Read-only call finished"
        );

        if !status.is_success() {
            tracing::warn!(
                endpoint = %endpoint,
                function = %function,
                status = status.as_u16(),
                "Read-only call returned non-success status"
            );
            return Err(ServiceError::Status {
                endpoint,
                function: function.to_string(),
                status,
                body: text,
            });
        }

        let body: Value =
            serde_json::from_str(&text).map_err(|e| ServiceError::MalformedBody {
                function: function.to_string(),
                reason: format!("invalid JSON: {}", e),
            })?;

        check_body(function, &body)?;
        Ok(body)
    }

    /// Call a read-only function and parse its result as a typed Clarity value.
    ///
    /// Unlike the record decoders this is strict: an unknown value type fails
    /// with [`ServiceError::UnknownValueVariant`]. A missing result is `None`.
    pub async fn read_value(
        &self,
        function: &str,
        args: &[ClarityValue],
    ) -> Result<Option<ClarityValue>, ServiceError> {
        let body = self.read_only_call(function, args).await?;
        match crate::decode::response_value(&body) {
            Some(value) => WireValue::from_json(value)
                .map(|wire| Some(wire.into()))
                .map_err(|e| ServiceError::from_wire(function, e)),
            None => Ok(None),
        }
    }
}

/// Reject bodies that are not objects or that report a failed call.
fn check_body(function: &str, body: &Value) -> Result<(), ServiceError> {
    let Some(obj) = body.as_object() else {
        return Err(ServiceError::MalformedBody {
            function: function.to_string(),
            reason: format!("expected a JSON object, got {}", body),
        });
    };

    if obj.contains_key("value") {
        return Ok(());
    }

    let failure = obj
        .get("error")
        .or_else(|| obj.get("cause"))
        .filter(|_| obj.get("okay").and_then(Value::as_bool) != Some(true));

    match failure {
        Some(cause) => Err(ServiceError::MalformedBody {
            function: function.to_string(),
            reason: format!("call failed: {}", cause),
        }),
        None => Ok(()),
    }
}

/// The top-level `value` of a body where a result is required.
pub(crate) fn require_value<'a>(function: &str, body: &'a Value) -> Result<&'a Value, ServiceError> {
    crate::decode::response_value(body).ok_or_else(|| ServiceError::MalformedBody {
        function: function.to_string(),
        reason: "missing 'value' in response".to_string(),
    })
}
