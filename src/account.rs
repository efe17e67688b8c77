//! Account-state inspection.
//!
//! Classification rests on one heuristic: a well-formed clearinghouse record carries an
//! `assetPositions` field. That is the minimum the tool checks, not a schema contract,
//! so a record without it is reported as unexpected rather than rejected.

use alloy::primitives::Address;
use log::{debug, warn};
use serde_json::Value;

use crate::{
    gateway::AccountStateSource, info::response_structs::UserStateResponse, prelude::*, Error,
};

/// Field whose presence marks a recognised account record.
pub const POSITIONS_MARKER: &str = "assetPositions";

#[derive(Debug, Clone, PartialEq)]
pub enum AccountReport {
    /// Exchange has no record; the address needs an initial deposit.
    NotRegistered { address: Address },
    /// Record found with the positions marker.
    Verified { address: Address, state: Value },
    /// Record found without the positions marker.
    Unrecognized { address: Address, state: Value },
}

impl AccountReport {
    pub fn classify(address: Address, state: Value) -> Self {
        match &state {
            Value::Null => AccountReport::NotRegistered { address },
            Value::Object(fields) if fields.is_empty() => AccountReport::NotRegistered { address },
            Value::Object(fields) if fields.contains_key(POSITIONS_MARKER) => {
                AccountReport::Verified { address, state }
            }
            _ => AccountReport::Unrecognized { address, state },
        }
    }

    pub fn address(&self) -> Address {
        match self {
            AccountReport::NotRegistered { address }
            | AccountReport::Verified { address, .. }
            | AccountReport::Unrecognized { address, .. } => *address,
        }
    }

    /// Full state as returned by the exchange, when there is one.
    pub fn state(&self) -> Option<&Value> {
        match self {
            AccountReport::NotRegistered { .. } => None,
            AccountReport::Verified { state, .. } | AccountReport::Unrecognized { state, .. } => {
                Some(state)
            }
        }
    }

    /// Typed margin summary, if the state matches the known clearinghouse layout.
    pub fn summary(&self) -> Option<UserStateResponse> {
        match self {
            AccountReport::Verified { state, .. } => {
                serde_json::from_value(state.clone()).ok()
            }
            _ => None,
        }
    }
}

/// Queries the exchange for an address and classifies the answer.
pub struct AccountInspector<'a, S: AccountStateSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: AccountStateSource + ?Sized> AccountInspector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// One state query. Transport and protocol failures become [`Error::QueryFailed`].
    pub async fn inspect(&self, address: Address) -> Result<AccountReport> {
        debug!("Querying account state for {address}");
        let state = self
            .source
            .account_state(address)
            .await
            .map_err(|e| match e {
                Error::QueryFailed { .. } => e,
                other => Error::query_failed(other.to_string(), other.response_detail()),
            })?;

        let report = AccountReport::classify(address, state);
        if let AccountReport::Unrecognized { .. } = report {
            warn!("Account state for {address} has no {POSITIONS_MARKER} field");
        }
        Ok(report)
    }
}
