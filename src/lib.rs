//! Hyperliquid order probe: resolve a private key, inspect the account it controls,
//! and push one immediate-or-cancel test order through the exchange API.

// Core modules
mod consts;
mod eip712;
mod errors;
mod helpers;
mod prelude;
mod req;
mod signature;

// Exchange access
mod exchange;
pub mod info;
mod meta;
pub mod types;

// Workflow
pub mod account;
pub mod config;
pub mod gateway;
pub mod identity;
pub mod session;
pub mod submit;

#[cfg(test)]
mod mock;

// Re-exports
pub use account::{AccountInspector, AccountReport, POSITIONS_MARKER};
pub use config::ProbeConfig;
pub use consts::{
    KNOWN_INSTRUMENTS, LOCAL_API_URL, MAINNET_API_URL, MIN_NOTIONAL_USD, TESTNET_API_URL,
};
pub use eip712::Eip712;
pub use errors::Error;
pub use exchange::*;
pub use gateway::{AccountStateSource, OrderGateway};
pub use helpers::{float_to_wire, BaseUrl};
pub use identity::Identity;
pub use info::info_client::InfoClient;
pub use info::response_structs::UserStateResponse;
pub use meta::{AssetMeta, Meta};
pub use session::{ActionOutcome, OutcomeLevel, Session, SessionState};
pub use submit::OrderSubmitter;
