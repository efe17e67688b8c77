//! Interactive console for the order probe.
//!
//! Reads one command per line from stdin and prints the outcome. The network is
//! fixed at build time (testnet unless built with `--features mainnet`).
//!
//! Run with: cargo run --bin hl-order-probe

use hl_order_probe::{
    ActionOutcome, ClientOrderRequest, Error, ExchangeClient, InfoClient, OutcomeLevel,
    ProbeConfig, Session, Side, KNOWN_INSTRUMENTS,
};
use log::error;
use secrecy::{zeroize::Zeroizing, SecretString};
use tokio::io::{self, AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  key <hex>                                   enter a private key (0x prefix optional)
  clear                                       forget the key
  account                                     fetch and check the account state
  order <coin> <buy|sell> <size> <price> [reduce]
                                              place one IOC limit order
  help                                        show this text
  quit                                        exit";

fn print_outcome(outcome: &ActionOutcome) {
    let tag = match outcome.level {
        OutcomeLevel::Success => "[ok]",
        OutcomeLevel::Info => "[info]",
        OutcomeLevel::Warning => "[warn]",
        OutcomeLevel::Error => "[error]",
    };
    println!("{tag} {}", outcome.message);
    if let Some(detail) = &outcome.detail {
        match serde_json::to_string_pretty(detail) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{detail}"),
        }
    }
}

fn parse_order(args: &[&str]) -> Result<ClientOrderRequest, Error> {
    let [coin, side, size, price, rest @ ..] = args else {
        return Err(Error::InvalidOrder(
            "usage: order <coin> <buy|sell> <size> <price> [reduce]".to_string(),
        ));
    };
    let side: Side = side.parse()?;
    let size: f64 = size
        .parse()
        .map_err(|_| Error::InvalidOrder(format!("size {size:?} is not a number")))?;
    let price: f64 = price
        .parse()
        .map_err(|_| Error::InvalidOrder(format!("price {price:?} is not a number")))?;
    let reduce_only = matches!(rest.first(), Some(&"reduce") | Some(&"reduce-only"));
    ClientOrderRequest::new(*coin, side, size, price, reduce_only)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ProbeConfig::default();
    let client = config.http_client()?;
    let info_client = InfoClient::new(Some(client.clone()), Some(config.base_url));
    let exchange_client =
        match ExchangeClient::new(Some(client), Some(config.base_url), None).await {
            Ok(exchange_client) => exchange_client,
            Err(e) => {
                error!("Could not load exchange metadata: {e}");
                return Err(e.into());
            }
        };

    println!(
        "Hyperliquid order probe ({}: {})",
        config.base_url.name(),
        config.base_url.get_url()
    );
    println!("Instruments: {} (any listed perp is accepted)", KNOWN_INSTRUMENTS.join(", "));
    println!("{HELP}");

    let mut session = Session::new(config, info_client, exchange_client);
    let mut lines = BufReader::new(io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        // May hold a raw key; wiped when the iteration ends.
        let line = Zeroizing::new(line);
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let outcome = match command {
            "key" => match args.first() {
                Some(raw) => session.enter_key(SecretString::from(raw.to_string())),
                None => ActionOutcome::from_error(&Error::InvalidKeyMaterial(
                    "usage: key <hex>".to_string(),
                )),
            },
            "clear" => session.clear_key(),
            "account" => session.query_account().await,
            "order" => match parse_order(&args) {
                Ok(order) => session.submit_order(&order).await,
                Err(e) => ActionOutcome::from_error(&e),
            },
            "help" => {
                println!("{HELP}");
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command {other:?}; type help");
                continue;
            }
        };
        print_outcome(&outcome);
    }

    session.clear_key();
    Ok(())
}
