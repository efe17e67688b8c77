pub const MAINNET_API_URL: &str = "https://api.hyperliquid.xyz";
pub const TESTNET_API_URL: &str = "https://api.hyperliquid-testnet.xyz";
pub const LOCAL_API_URL: &str = "http://localhost:3001";

/// Web app where a fresh address makes the deposit that registers it.
pub const MAINNET_APP_URL: &str = "https://app.hyperliquid.xyz/";
pub const TESTNET_APP_URL: &str = "https://app.hyperliquid-testnet.xyz/";

/// Orders whose notional (size * price) falls below this are rejected by the exchange.
pub const MIN_NOTIONAL_USD: f64 = 10.0;

/// Instruments offered by the console's help text.
pub const KNOWN_INSTRUMENTS: &[&str] = &["SOL", "BTC", "ETH"];
