//! Single test-order submission.
//!
//! The submitter does not interpret fills. It only decides whether the exchange
//! rejected the order, and otherwise hands back the acknowledgement untouched.

use log::{info, warn};
use serde_json::Value;

use crate::{
    consts::MIN_NOTIONAL_USD, gateway::OrderGateway, identity::Identity, prelude::*,
    ClientOrderRequest, Error, ExchangeResponseStatus,
};

pub struct OrderSubmitter<'a, G: OrderGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: OrderGateway + ?Sized> OrderSubmitter<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Submit exactly one order. Any failure comes back as [`Error::OrderRejected`].
    pub async fn submit(&self, identity: &Identity, order: &ClientOrderRequest) -> Result<Value> {
        if order.notional() < MIN_NOTIONAL_USD {
            warn!(
                "Order notional {:.2} is below the exchange minimum of {MIN_NOTIONAL_USD}",
                order.notional()
            );
        }

        let response = self
            .gateway
            .place_order(identity, order)
            .await
            .map_err(into_rejection)?;

        if let Some(reason) = rejection_reason(&response) {
            warn!("Order rejected by exchange: {reason}");
            return Err(Error::order_rejected(reason, Some(response)));
        }

        info!("Order accepted for {}", identity.address());
        Ok(response)
    }
}

fn into_rejection(error: Error) -> Error {
    match error {
        Error::OrderRejected { .. } => error,
        other => Error::order_rejected(other.to_string(), other.response_detail()),
    }
}

/// Reason the exchange refused the order, if the acknowledgement carries one.
fn rejection_reason(response: &Value) -> Option<String> {
    if response.get("status").and_then(Value::as_str) == Some("err") {
        return Some(match response.get("response") {
            Some(Value::String(reason)) => reason.clone(),
            Some(other) => other.to_string(),
            None => "exchange returned an error status".to_string(),
        });
    }
    serde_json::from_value::<ExchangeResponseStatus>(response.clone())
        .ok()
        .and_then(|status| status.rejection())
}
