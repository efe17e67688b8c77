use serde::{Deserialize, Serialize};

use crate::{helpers::float_to_wire, prelude::*, Error};

/// Time-in-force sent with every test order: fill what crosses now, cancel the rest.
pub const IOC_TIF: &str = "Ioc";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Limit {
    pub tif: String,
}

/// Wire form of the order type, `{"limit": {"tif": "Ioc"}}`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OrderType {
    pub limit: Limit,
}

impl OrderType {
    pub fn ioc() -> Self {
        Self {
            limit: Limit {
                tif: IOC_TIF.to_string(),
            },
        }
    }
}

/// Single order as it appears inside the signed `order` action.
///
/// Field order and the one-letter names are part of the hashed payload.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(rename = "a", alias = "asset")]
    pub asset: u32,
    #[serde(rename = "b", alias = "isBuy")]
    pub is_buy: bool,
    #[serde(rename = "p", alias = "limitPx")]
    pub limit_px: String,
    #[serde(rename = "s", alias = "sz")]
    pub sz: String,
    #[serde(rename = "r", alias = "reduceOnly", default)]
    pub reduce_only: bool,
    #[serde(rename = "t", alias = "orderType")]
    pub order_type: OrderType,
    #[serde(rename = "c", alias = "cloid", skip_serializing_if = "Option::is_none")]
    pub cloid: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }
}

impl std::str::FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "buy" | "b" | "long" => Ok(Side::Buy),
            "sell" | "s" | "short" => Ok(Side::Sell),
            other => Err(Error::InvalidOrder(format!("unknown side {other:?}"))),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Operator-facing test order. Always immediate-or-cancel.
///
/// Only constructible through [`ClientOrderRequest::new`], so size and price are
/// known positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOrderRequest {
    coin: String,
    side: Side,
    sz: f64,
    limit_px: f64,
    reduce_only: bool,
}

impl ClientOrderRequest {
    pub fn new(
        coin: impl Into<String>,
        side: Side,
        sz: f64,
        limit_px: f64,
        reduce_only: bool,
    ) -> Result<Self> {
        let coin = coin.into();
        if coin.trim().is_empty() {
            return Err(Error::InvalidOrder("instrument is empty".to_string()));
        }
        if !sz.is_finite() || sz <= 0.0 {
            return Err(Error::InvalidOrder(format!("size must be positive, got {sz}")));
        }
        if !limit_px.is_finite() || limit_px <= 0.0 {
            return Err(Error::InvalidOrder(format!(
                "limit price must be positive, got {limit_px}"
            )));
        }
        Ok(Self {
            coin: coin.trim().to_string(),
            side,
            sz,
            limit_px,
            reduce_only,
        })
    }

    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn sz(&self) -> f64 {
        self.sz
    }

    pub fn limit_px(&self) -> f64 {
        self.limit_px
    }

    pub fn reduce_only(&self) -> bool {
        self.reduce_only
    }

    pub fn tif(&self) -> &'static str {
        IOC_TIF
    }

    pub fn notional(&self) -> f64 {
        self.sz * self.limit_px
    }

    pub(crate) fn convert(&self, asset: u32) -> OrderRequest {
        OrderRequest {
            asset,
            is_buy: self.side.is_buy(),
            limit_px: float_to_wire(self.limit_px),
            sz: float_to_wire(self.sz),
            reduce_only: self.reduce_only,
            order_type: OrderType::ioc(),
            cloid: None,
        }
    }
}
