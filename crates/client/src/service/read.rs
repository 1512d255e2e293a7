// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed read-only queries.

use super::{ContractService, require_value};
use crate::clarity::ClarityValue;
use crate::consts::*;
use crate::decode::{
    decode_flag, decode_indexed_list, decode_list_response, decode_quantity, decode_record,
    decode_text,
};
use crate::error::ServiceError;
use crate::types::{EventInfo, Indexed, Present, TicketInfo};
use crate::utils::run_with_concurrency_collect;

impl ContractService {
    /// Event details, `None` when the event does not exist.
    pub async fn get_event_info(&self, event_id: u128) -> Result<Option<EventInfo>, ServiceError> {
        let body = self
            .read_only_call(GET_EVENT_INFO, &[ClarityValue::UInt(event_id)])
            .await?;
        Ok(decode_record(&body))
    }

    pub async fn get_ticket_owner(&self, ticket_id: u128) -> Result<Option<String>, ServiceError> {
        let body = self
            .read_only_call(GET_TICKET_OWNER, &[ClarityValue::UInt(ticket_id)])
            .await?;
        Ok(decode_text(&body).filter(|owner| !owner.is_empty()))
    }

    pub async fn get_ticket_event(&self, ticket_id: u128) -> Result<Option<u128>, ServiceError> {
        let body = self
            .read_only_call(GET_TICKET_EVENT, &[ClarityValue::UInt(ticket_id)])
            .await?;
        Ok(decode_quantity(&body))
    }

    /// Owner and event of a ticket, looked up concurrently.
    pub async fn get_ticket(&self, ticket_id: u128) -> Result<Option<TicketInfo>, ServiceError> {
        let (owner, event_id) = futures::try_join!(
            self.get_ticket_owner(ticket_id),
            self.get_ticket_event(ticket_id)
        )?;

        let ticket = TicketInfo {
            id: ticket_id,
            owner,
            event_id,
        };
        Ok(ticket.exists().then_some(ticket))
    }

    /// Current admin principal, empty when the contract returns nothing.
    pub async fn get_admin(&self) -> Result<String, ServiceError> {
        let body = self.read_only_call(GET_ADMIN, &[]).await?;
        Ok(decode_text(&body).unwrap_or_default())
    }

    /// Whether `address` is the contract admin (case-insensitive).
    pub async fn is_admin(&self, address: &str) -> Result<bool, ServiceError> {
        let admin = self.get_admin().await?;
        Ok(!admin.is_empty() && admin.eq_ignore_ascii_case(address))
    }

    pub async fn get_total_events(&self) -> Result<u128, ServiceError> {
        let body = self.read_only_call(GET_TOTAL_EVENTS, &[]).await?;
        Ok(decode_quantity(&body).unwrap_or(0))
    }

    pub async fn get_total_tickets(&self) -> Result<u128, ServiceError> {
        let body = self.read_only_call(GET_TOTAL_TICKETS, &[]).await?;
        Ok(decode_quantity(&body).unwrap_or(0))
    }

    pub async fn is_ticket_owner(&self, ticket_id: u128, owner: &str) -> Result<bool, ServiceError> {
        let body = self
            .read_only_call(
                IS_TICKET_OWNER,
                &[ClarityValue::UInt(ticket_id), ClarityValue::principal(owner)],
            )
            .await?;
        Ok(decode_flag(&body).unwrap_or(false))
    }

    /// Every event, fetched one id at a time for ids `1..=total`.
    ///
    /// Lookups run concurrently up to the configured limit. Ids without an
    /// event are skipped. At most [`MAX_EVENT_SCAN`] ids are looked up.
    pub async fn get_all_events(&self) -> Result<Vec<Indexed<EventInfo>>, ServiceError> {
        let total = self.get_total_events().await?;
        let last_id = total.min(MAX_EVENT_SCAN);
        if last_id < total {
            tracing::warn!(
                total = %total,
                scanned = %last_id,
                "Event count exceeds scan limit, fetching the first events only"
            );
        }
        tracing::debug!(total = %total, "Fetching all events by id");

        let lookups = (1..=last_id).map(|id| async move {
            self.get_event_info(id)
                .await
                .map(|info| info.map(|info| Indexed { id, info }))
        });

        let events = run_with_concurrency_collect(self.max_concurrency, lookups).await?;
        Ok(events.into_iter().flatten().collect())
    }

    /// Latest events from the contract's paginated listing.
    ///
    /// The element at position `i` is assigned id `start_id + i`.
    pub async fn get_latest_events(
        &self,
        start_id: u128,
    ) -> Result<Vec<Indexed<EventInfo>>, ServiceError> {
        let body = self
            .read_only_call(GET_LATEST_EVENTS, &[ClarityValue::UInt(start_id)])
            .await?;
        let list = require_value(GET_LATEST_EVENTS, &body)?;
        Ok(decode_indexed_list(list, start_id))
    }

    /// Events sorted by date, newest first.
    ///
    /// Uses the paginated listing and falls back to per-id lookups when the
    /// contract does not provide it or the call fails.
    pub async fn get_events(&self, start_id: u128) -> Result<Vec<Indexed<EventInfo>>, ServiceError> {
        let mut events = match self.get_latest_events(start_id).await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(error = %e, "Latest events unavailable, falling back to per-id lookups");
                self.get_all_events().await?
            }
        };

        events.sort_by(|a, b| b.info.date.cmp(&a.info.date));
        Ok(events)
    }

    /// All presents; the element at position `i` is assigned id `start_id + i`.
    pub async fn get_all_presents(
        &self,
        start_id: u128,
    ) -> Result<Vec<Indexed<Present>>, ServiceError> {
        let body = self
            .read_only_call(GET_ALL_PRESENTS, &[ClarityValue::UInt(start_id)])
            .await?;
        Ok(decode_list_response(&body, start_id))
    }
}
