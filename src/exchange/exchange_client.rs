//! Core ExchangeClient implementation.
//!
//! The client holds no key. Every call is signed with the [`Identity`] passed in,
//! so one client serves whichever key the operator has entered.

use std::collections::HashMap;

use alloy::{
    primitives::{Address, Signature},
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{
    exchange::{
        actions::{Actions, BulkOrder},
        order::ClientOrderRequest,
    },
    gateway::OrderGateway,
    helpers::next_nonce,
    identity::Identity,
    info::info_client::InfoClient,
    meta::Meta,
    prelude::*,
    req::HttpClient,
    signature::sign_l1_action,
    BaseUrl, Error,
};

pub struct ExchangeClient {
    pub http_client: HttpClient,
    pub coin_to_asset: HashMap<String, u32>,
}

impl std::fmt::Debug for ExchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeClient")
            .field("http_client", &self.http_client)
            .field(
                "coin_to_asset",
                &format!("{} entries", self.coin_to_asset.len()),
            )
            .finish()
    }
}

fn serialize_sig<S>(sig: &Signature, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = s.serialize_struct("Signature", 3)?;
    state.serialize_field("r", &sig.r())?;
    state.serialize_field("s", &sig.s())?;
    state.serialize_field("v", &(27 + sig.v() as u64))?;
    state.end()
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExchangePayload {
    action: serde_json::Value,
    #[serde(serialize_with = "serialize_sig")]
    signature: Signature,
    nonce: u64,
    vault_address: Option<Address>,
}

impl ExchangeClient {
    /// Build a client. Fetches perp metadata unless `meta` is supplied.
    pub async fn new(
        client: Option<Client>,
        base_url: Option<BaseUrl>,
        meta: Option<Meta>,
    ) -> Result<ExchangeClient> {
        let client = client.unwrap_or_default();
        let base_url = base_url.unwrap_or(BaseUrl::Testnet);

        let meta = if let Some(meta) = meta {
            meta
        } else {
            InfoClient::new(Some(client.clone()), Some(base_url))
                .meta()
                .await?
        };
        let coin_to_asset = meta.coin_to_asset();
        debug!("Loaded {} perp assets", coin_to_asset.len());

        Ok(ExchangeClient {
            http_client: HttpClient::new(client, base_url),
            coin_to_asset,
        })
    }

    /// Asset index for a coin. Exact names win; otherwise a unique
    /// case-insensitive match is accepted (`kpepe` finds `kPEPE`).
    pub(crate) fn asset_index(&self, coin: &str) -> Result<u32> {
        if let Some(&asset) = self.coin_to_asset.get(coin) {
            return Ok(asset);
        }
        let mut matches = self
            .coin_to_asset
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(coin));
        match (matches.next(), matches.next()) {
            (Some((_, &asset)), None) => Ok(asset),
            _ => Err(Error::AssetNotFound(coin.to_string())),
        }
    }

    pub(crate) fn order_action(&self, order: &ClientOrderRequest) -> Result<Actions> {
        let asset = self.asset_index(order.coin())?;

        Ok(Actions::Order(BulkOrder {
            orders: vec![order.convert(asset)],
            grouping: "na".to_string(),
        }))
    }

    pub(crate) fn signed_payload(
        &self,
        action: &Actions,
        wallet: &PrivateKeySigner,
        nonce: u64,
    ) -> Result<ExchangePayload> {
        let connection_id = action.hash(nonce, None)?;
        let signature = sign_l1_action(wallet, connection_id, self.http_client.is_mainnet())?;
        let action = serde_json::to_value(action).map_err(|e| Error::JsonParse(e.to_string()))?;

        Ok(ExchangePayload {
            action,
            signature,
            nonce,
            vault_address: None,
        })
    }

    pub(crate) async fn post(&self, payload: &ExchangePayload) -> Result<serde_json::Value> {
        let body = serde_json::to_string(payload).map_err(|e| Error::JsonParse(e.to_string()))?;
        // Payload carries a signature; only the fact of sending is logged.
        debug!("Sending exchange request");
        let output = self.http_client.post("/exchange", body).await?;
        debug!("Received exchange response");
        serde_json::from_str(&output).map_err(|e| Error::JsonParse(e.to_string()))
    }
}

#[async_trait]
impl OrderGateway for ExchangeClient {
    async fn place_order(
        &self,
        identity: &Identity,
        order: &ClientOrderRequest,
    ) -> Result<serde_json::Value> {
        let action = self.order_action(order)?;
        let payload = self.signed_payload(&action, identity.signer(), next_nonce())?;
        info!(
            "Submitting {} {} {} @ {} (tif={}, reduce_only={}) for {}",
            order.side(),
            order.sz(),
            order.coin(),
            order.limit_px(),
            order.tif(),
            order.reduce_only(),
            identity.address()
        );
        self.post(&payload).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{
        exchange::order::{Limit, OrderRequest, OrderType, Side},
        identity::resolve_str,
        mock::{http_client_at, EchoPayload},
    };

    fn get_wallet() -> Result<PrivateKeySigner> {
        let priv_key = "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e";
        priv_key
            .parse::<PrivateKeySigner>()
            .map_err(|e| Error::InvalidKeyMaterial(e.to_string()))
    }

    fn test_meta() -> Meta {
        serde_json::from_str(
            r#"{"universe":[{"name":"BTC","szDecimals":5},
                            {"name":"ETH","szDecimals":4},
                            {"name":"SOL","szDecimals":2},
                            {"name":"kPEPE","szDecimals":0}]}"#,
        )
        .expect("meta should parse")
    }

    async fn test_client(base_url: BaseUrl) -> Result<ExchangeClient> {
        ExchangeClient::new(None, Some(base_url), Some(test_meta())).await
    }

    #[test]
    fn test_limit_order_action_hashing() -> Result<()> {
        let wallet = get_wallet()?;
        let action = Actions::Order(BulkOrder {
            orders: vec![OrderRequest {
                asset: 1,
                is_buy: true,
                limit_px: "2000.0".to_string(),
                sz: "3.5".to_string(),
                reduce_only: false,
                order_type: OrderType {
                    limit: Limit {
                        tif: "Ioc".to_string(),
                    },
                },
                cloid: None,
            }],
            grouping: "na".to_string(),
        });
        let connection_id = action.hash(1583838, None)?;

        let signature = sign_l1_action(&wallet, connection_id, true)?;
        assert_eq!(signature.to_string(), "0x77957e58e70f43b6b68581f2dc42011fc384538a2e5b7bf42d5b936f19fbb67360721a8598727230f67080efee48c812a6a4442013fd3b0eed509171bef9f23f1c");

        let signature = sign_l1_action(&wallet, connection_id, false)?;
        assert_eq!(signature.to_string(), "0xcd0925372ff1ed499e54883e9a6205ecfadec748f80ec463fe2f84f1209648776377961965cb7b12414186b1ea291e95fd512722427efcbcfb3b0b2bcd4d79d01c");

        Ok(())
    }

    #[tokio::test]
    async fn order_action_resolves_asset_index() -> Result<()> {
        let client = test_client(BaseUrl::Testnet).await?;
        let order = ClientOrderRequest::new("SOL", Side::Buy, 1.0, 100.0, false)?;

        let Actions::Order(bulk) = client.order_action(&order)?;
        assert_eq!(bulk.grouping, "na");
        assert_eq!(bulk.orders.len(), 1);
        assert_eq!(bulk.orders[0].asset, 2);
        assert_eq!(bulk.orders[0].limit_px, "100");
        assert_eq!(bulk.orders[0].sz, "1");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_coin_fails_before_sending() -> Result<()> {
        let client = test_client(BaseUrl::Testnet).await?;
        let identity = resolve_str(
            "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e",
        )?;
        let order = ClientOrderRequest::new("NOPE", Side::Sell, 1.0, 1.0, false)?;

        // Nothing is sent: the lookup fails first.
        let result = client.place_order(&identity, &order).await;
        assert!(matches!(result, Err(Error::AssetNotFound(coin)) if coin == "NOPE"));
        Ok(())
    }

    #[tokio::test]
    async fn signed_payload_shape() -> Result<()> {
        let client = test_client(BaseUrl::Testnet).await?;
        let wallet = get_wallet()?;
        let order = ClientOrderRequest::new("ETH", Side::Sell, 0.5, 3000.0, true)?;
        let action = client.order_action(&order)?;

        let payload = client.signed_payload(&action, &wallet, 1583838)?;
        let json = serde_json::to_value(&payload).map_err(|e| Error::json_parse(e.to_string()))?;

        assert_eq!(json["nonce"], 1583838);
        assert!(json["vaultAddress"].is_null());
        assert_eq!(json["action"]["type"], "order");
        assert_eq!(json["action"]["orders"][0]["a"], 1);
        assert_eq!(json["action"]["orders"][0]["b"], false);
        assert_eq!(json["action"]["orders"][0]["r"], true);
        assert_eq!(json["action"]["orders"][0]["t"]["limit"]["tif"], "Ioc");
        let v = json["signature"]["v"].as_u64().unwrap_or_default();
        assert!(v == 27 || v == 28);
        Ok(())
    }

    #[tokio::test]
    async fn mixed_case_coin_resolves_exactly() -> Result<()> {
        let client = test_client(BaseUrl::Testnet).await?;
        assert_eq!(client.asset_index("kPEPE")?, 3);
        assert_eq!(client.asset_index("kpepe")?, 3);
        assert_eq!(client.asset_index("sol")?, 2);
        assert!(matches!(client.asset_index("PEPE"), Err(Error::AssetNotFound(_))));

        let order = ClientOrderRequest::new("kPEPE", Side::Buy, 100000.0, 0.00002, false)?;
        let Actions::Order(bulk) = client.order_action(&order)?;
        assert_eq!(bulk.orders[0].asset, 3);
        Ok(())
    }

    #[tokio::test]
    async fn ambiguous_case_insensitive_match_is_not_guessed() -> Result<()> {
        let meta: Meta = serde_json::from_str(r#"{"universe":[{"name":"abc"},{"name":"ABC"}]}"#)
            .map_err(|e| Error::json_parse(e.to_string()))?;
        let client = ExchangeClient::new(None, Some(BaseUrl::Testnet), Some(meta)).await?;
        assert_eq!(client.asset_index("ABC")?, 1);
        assert!(matches!(client.asset_index("Abc"), Err(Error::AssetNotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn order_goes_out_signed_to_the_exchange_endpoint() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/exchange"))
            .respond_with(EchoPayload)
            .expect(1)
            .mount(&server)
            .await;

        let client = ExchangeClient {
            http_client: http_client_at(server.uri()),
            coin_to_asset: test_meta().coin_to_asset(),
        };
        let identity = resolve_str(
            "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e",
        )?;
        let order = ClientOrderRequest::new("ETH", Side::Buy, 1.0, 100.0, false)?;

        let response = client.place_order(&identity, &order).await?;

        let sent = &response["response"]["echo"];
        let wire = &sent["action"]["orders"][0];
        assert_eq!(sent["action"]["type"], "order");
        assert_eq!(sent["action"]["grouping"], "na");
        assert_eq!(wire["a"], 1);
        assert_eq!(wire["b"], true);
        assert_eq!(wire["s"], "1");
        assert_eq!(wire["p"], "100");
        assert_eq!(wire["t"]["limit"]["tif"], "Ioc");
        assert!(sent["nonce"].as_u64().is_some());
        assert!(sent["signature"]["r"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn exchange_client_error_body_is_parsed() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/exchange"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "code": 422,
                "msg": "Failed to deserialize the JSON body",
                "data": "missing field `nonce`"
            })))
            .mount(&server)
            .await;

        let client = ExchangeClient {
            http_client: http_client_at(server.uri()),
            coin_to_asset: test_meta().coin_to_asset(),
        };
        let identity = resolve_str(
            "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e",
        )?;
        let order = ClientOrderRequest::new("BTC", Side::Sell, 0.001, 50000.0, false)?;

        match client.place_order(&identity, &order).await {
            Err(Error::ClientRequest {
                status_code,
                error_code,
                error_message,
                error_data,
            }) => {
                assert_eq!(status_code, 422);
                assert_eq!(error_code, Some(422));
                assert_eq!(error_message, "Failed to deserialize the JSON body");
                assert_eq!(error_data.as_deref(), Some("missing field `nonce`"));
            }
            other => panic!("expected client error, got {other:?}"),
        }
        Ok(())
    }
}
