use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::consts::{
    LOCAL_API_URL, MAINNET_API_URL, MAINNET_APP_URL, TESTNET_API_URL, TESTNET_APP_URL,
};

static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

const WIRE_DECIMALS: usize = 8;

/// Millisecond timestamp nonce, strictly increasing within the process.
pub(crate) fn next_nonce() -> u64 {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let previous = LAST_NONCE
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now_ms.max(last + 1))
        })
        .unwrap_or(now_ms);
    now_ms.max(previous + 1)
}

/// Render a float the way the exchange hashes it: fixed 8 decimals, trailing zeros trimmed.
pub fn float_to_wire(x: f64) -> String {
    let mut wire = format!("{x:.WIRE_DECIMALS$}");
    while wire.ends_with('0') {
        wire.pop();
    }
    if wire.ends_with('.') {
        wire.pop();
    }
    if wire == "-0" {
        "0".to_string()
    } else {
        wire
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BaseUrl {
    Localhost,
    Testnet,
    Mainnet,
}

impl BaseUrl {
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Localhost => LOCAL_API_URL.to_string(),
            BaseUrl::Testnet => TESTNET_API_URL.to_string(),
            BaseUrl::Mainnet => MAINNET_API_URL.to_string(),
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, BaseUrl::Mainnet)
    }

    /// Where an unregistered address can make its first deposit.
    pub fn app_url(&self) -> &'static str {
        match self {
            BaseUrl::Mainnet => MAINNET_APP_URL,
            BaseUrl::Testnet | BaseUrl::Localhost => TESTNET_APP_URL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BaseUrl::Localhost => "localhost",
            BaseUrl::Testnet => "testnet",
            BaseUrl::Mainnet => "mainnet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_to_wire_trims_trailing_zeros() {
        assert_eq!(float_to_wire(100.0), "100");
        assert_eq!(float_to_wire(1.5), "1.5");
        assert_eq!(float_to_wire(0.001), "0.001");
        assert_eq!(float_to_wire(2000.0), "2000");
        assert_eq!(float_to_wire(-0.0), "0");
        assert_eq!(float_to_wire(0.123456789), "0.12345679");
    }

    #[test]
    fn nonces_strictly_increase() {
        let a = next_nonce();
        let b = next_nonce();
        let c = next_nonce();
        assert!(a < b && b < c);
    }

    #[test]
    fn mainnet_flag_follows_variant() {
        assert!(BaseUrl::Mainnet.is_mainnet());
        assert!(!BaseUrl::Testnet.is_mainnet());
        assert_eq!(BaseUrl::Testnet.get_url(), TESTNET_API_URL);
        assert_eq!(BaseUrl::Mainnet.app_url(), MAINNET_APP_URL);
    }
}
