// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Address to BNS name lookups.

use crate::consts::BNS_NAMES_BY_ADDRESS_PATH;
use crate::error::ServiceError;
use config::{BnsConfig, HttpConfig, Network, TicketingConfig};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const LOOKUP: &str = "bns-name";

#[derive(Debug, Deserialize)]
struct NamesResponse {
    #[serde(default)]
    names: Vec<BnsName>,
}

#[derive(Debug, Deserialize)]
struct BnsName {
    full_name: String,
}

#[derive(Debug, Clone)]
pub struct BnsService {
    api_base: String,
    client: Client,
}

impl BnsService {
    pub fn new(api_base: impl Into<String>, http: &HttpConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .map_err(ServiceError::ClientBuild)?;

        Ok(Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &TicketingConfig) -> Result<Self, ServiceError> {
        Self::for_network(&config.bns, &config.contract.network, &config.http)
    }

    pub fn for_network(
        bns: &BnsConfig,
        network: &Network,
        http: &HttpConfig,
    ) -> Result<Self, ServiceError> {
        Self::new(bns.api_base(network), http)
    }

    /// `{bns}/names/address/{address}/valid`
    pub fn endpoint(&self, address: &str) -> String {
        format!(
            "{}{}/{}/valid",
            self.api_base, BNS_NAMES_BY_ADDRESS_PATH, address
        )
    }

    /// Primary BNS name of `address`.
    ///
    /// Fails with [`ServiceError::NameNotFound`] when the address owns no
    /// valid name.
    pub async fn get_bns_name(&self, address: &str) -> Result<String, ServiceError> {
        let endpoint = self.endpoint(address);
        tracing::debug!(endpoint = %endpoint, "BNS name lookup");

        let network_error = |source| ServiceError::Network {
            endpoint: endpoint.clone(),
            function: LOOKUP.to_string(),
            source,
        };

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            tracing::warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                "BNS lookup returned non-success status"
            );
            return Err(ServiceError::Status {
                endpoint,
                function: LOOKUP.to_string(),
                status,
                body: text,
            });
        }

        let body: NamesResponse =
            serde_json::from_str(&text).map_err(|e| ServiceError::MalformedBody {
                function: LOOKUP.to_string(),
                reason: format!("invalid names response: {}", e),
            })?;

        body.names
            .into_iter()
            .next()
            .map(|name| name.full_name)
            .ok_or_else(|| ServiceError::NameNotFound(address.to_string()))
    }
}
