//! One operator session: the current identity plus the two exchange seams.
//!
//! Every action returns an [`ActionOutcome`]; errors are turned into messages here so
//! that no single failure ends the session.

use log::info;
use secrecy::SecretString;
use serde_json::Value;

use crate::{
    account::{AccountInspector, AccountReport},
    config::ProbeConfig,
    gateway::{AccountStateSource, OrderGateway},
    identity::{self, Identity},
    submit::OrderSubmitter,
    ClientOrderRequest, Error,
};

/// Where the session is in the key → query/order workflow.
///
/// `AccountQueried` and `OrderSubmitted` record the last action attempted with a
/// resolved identity, whatever its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoKey,
    /// Key text was entered but did not resolve.
    KeyEntered,
    IdentityResolved,
    AccountQueried,
    OrderSubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// What the operator is shown after an action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub level: OutcomeLevel,
    pub message: String,
    /// Raw structured payload, displayed verbatim.
    pub detail: Option<Value>,
}

impl ActionOutcome {
    fn new(level: OutcomeLevel, message: impl Into<String>, detail: Option<Value>) -> Self {
        Self {
            level,
            message: message.into(),
            detail,
        }
    }

    pub fn from_error(error: &Error) -> Self {
        Self::new(OutcomeLevel::Error, error.to_string(), error.detail().cloned())
    }

    pub fn is_error(&self) -> bool {
        self.level == OutcomeLevel::Error
    }
}

pub struct Session<S, G> {
    config: ProbeConfig,
    source: S,
    gateway: G,
    identity: Option<Identity>,
    state: SessionState,
}

impl<S: AccountStateSource, G: OrderGateway> Session<S, G> {
    pub fn new(config: ProbeConfig, source: S, gateway: G) -> Self {
        Self {
            config,
            source,
            gateway,
            identity: None,
            state: SessionState::NoKey,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Resolve a new key, replacing (and dropping) any previous identity.
    pub fn enter_key(&mut self, raw_key: SecretString) -> ActionOutcome {
        self.identity = None;
        self.state = SessionState::KeyEntered;

        match identity::resolve(&raw_key) {
            Ok(identity) => {
                let message = format!("Wallet Address: {}", identity.address());
                self.identity = Some(identity);
                self.state = SessionState::IdentityResolved;
                ActionOutcome::new(OutcomeLevel::Success, message, None)
            }
            Err(e) => ActionOutcome::from_error(&e),
        }
    }

    /// Forget the key. The identity is dropped, which zeroes the signing key.
    pub fn clear_key(&mut self) -> ActionOutcome {
        let had_identity = self.identity.take().is_some();
        self.state = SessionState::NoKey;
        if had_identity {
            info!("Identity cleared");
        }
        ActionOutcome::new(OutcomeLevel::Info, "Private key cleared", None)
    }

    pub async fn query_account(&mut self) -> ActionOutcome {
        let Some(identity) = self.identity.as_ref() else {
            return ActionOutcome::from_error(&Error::NoIdentity);
        };
        let result = AccountInspector::new(&self.source)
            .inspect(identity.address())
            .await;
        self.state = SessionState::AccountQueried;

        let network = self.config.base_url.name();
        match result {
            Ok(AccountReport::NotRegistered { address }) => ActionOutcome::new(
                OutcomeLevel::Info,
                format!(
                    "Account {address} does not exist on Hyperliquid {network}. \
                     Visit {} and make a deposit to register your wallet.",
                    self.config.base_url.app_url()
                ),
                None,
            ),
            Ok(report @ AccountReport::Verified { .. }) => {
                let mut message = format!("Account exists on Hyperliquid {network}");
                if let Some(summary) = report.summary() {
                    message.push_str(&format!(
                        " (account value {}, withdrawable {}, {} open position(s))",
                        summary.margin_summary.account_value,
                        summary.withdrawable,
                        summary.asset_positions.len()
                    ));
                }
                ActionOutcome::new(OutcomeLevel::Success, message, report.state().cloned())
            }
            Ok(AccountReport::Unrecognized { state, .. }) => ActionOutcome::new(
                OutcomeLevel::Warning,
                "Account structure unexpected: record has no asset positions field",
                Some(state),
            ),
            Err(e) => ActionOutcome::from_error(&e),
        }
    }

    pub async fn submit_order(&mut self, order: &ClientOrderRequest) -> ActionOutcome {
        let Some(identity) = self.identity.as_ref() else {
            return ActionOutcome::from_error(&Error::NoIdentity);
        };
        let result = OrderSubmitter::new(&self.gateway)
            .submit(identity, order)
            .await;
        self.state = SessionState::OrderSubmitted;

        match result {
            Ok(response) => ActionOutcome::new(
                OutcomeLevel::Success,
                "Order placed successfully",
                Some(response),
            ),
            Err(e) => ActionOutcome::from_error(&e),
        }
    }
}
