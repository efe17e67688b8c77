//! Order submission side of the Hyperliquid API.
//!
//! # Submodules
//! - `actions` - Signed action envelope and its hash
//! - `order` - Operator order and its wire form
//! - `exchange_client` - Signing and posting to `/exchange`
//! - `exchange_responses` - Typed view used to spot rejections

mod actions;
mod exchange_client;
mod exchange_responses;
mod order;

pub use actions::{Actions, BulkOrder};
pub use exchange_client::ExchangeClient;
pub use exchange_responses::*;
pub use order::{ClientOrderRequest, Limit, OrderRequest, OrderType, Side, IOC_TIF};
