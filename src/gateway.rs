//! Seams between the workflow and the exchange.
//!
//! The workflow only ever talks to these two traits. [`InfoClient`](crate::InfoClient)
//! and [`ExchangeClient`](crate::ExchangeClient) implement them over HTTP; tests
//! substitute in-memory doubles.

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::{identity::Identity, prelude::*, ClientOrderRequest};

/// Read-only account-state endpoint.
#[async_trait]
pub trait AccountStateSource: Send + Sync {
    /// Raw account snapshot for `address`. `Value::Null` means no record.
    async fn account_state(&self, address: Address) -> Result<serde_json::Value>;
}

/// Signs an order with the identity's key and submits it in one call.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Raw exchange acknowledgement. Implementations must not retry.
    async fn place_order(
        &self,
        identity: &Identity,
        order: &ClientOrderRequest,
    ) -> Result<serde_json::Value>;
}
