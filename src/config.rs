//! Compile-time configuration.
//!
//! The network is fixed at build time: testnet unless the `mainnet` feature is on.

use std::time::Duration;

use reqwest::Client;

use crate::{prelude::*, BaseUrl, Error};

#[cfg(feature = "mainnet")]
pub const DEFAULT_BASE_URL: BaseUrl = BaseUrl::Mainnet;
#[cfg(not(feature = "mainnet"))]
pub const DEFAULT_BASE_URL: BaseUrl = BaseUrl::Testnet;

/// Upper bound on any single exchange call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub base_url: BaseUrl,
    pub request_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// reqwest client shared by the info and exchange sides.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| Error::GenericRequest(e.to_string()))
    }
}
