use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    gateway::AccountStateSource, meta::Meta, prelude::*, req::HttpClient, BaseUrl, Error,
};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum InfoRequest {
    #[serde(rename = "clearinghouseState")]
    UserState { user: Address },
    Meta,
}

#[derive(Debug, Clone)]
pub struct InfoClient {
    pub http_client: HttpClient,
}

impl InfoClient {
    pub fn new(client: Option<Client>, base_url: Option<BaseUrl>) -> InfoClient {
        let client = client.unwrap_or_default();
        let base_url = base_url.unwrap_or(BaseUrl::Testnet);
        InfoClient {
            http_client: HttpClient::new(client, base_url),
        }
    }

    async fn send_info_request<T: for<'a> Deserialize<'a>>(
        &self,
        info_request: InfoRequest,
    ) -> Result<T> {
        let data =
            serde_json::to_string(&info_request).map_err(|e| Error::JsonParse(e.to_string()))?;

        let return_data = self.http_client.post("/info", data).await?;
        serde_json::from_str(&return_data).map_err(|e| Error::JsonParse(e.to_string()))
    }

    /// Raw clearinghouse state; `null` when the exchange has no record of the address.
    pub async fn user_state(&self, address: Address) -> Result<serde_json::Value> {
        let input = InfoRequest::UserState { user: address };
        self.send_info_request(input).await
    }

    pub async fn meta(&self) -> Result<Meta> {
        self.send_info_request(InfoRequest::Meta).await
    }
}

#[async_trait]
impl AccountStateSource for InfoClient {
    async fn account_state(&self, address: Address) -> Result<serde_json::Value> {
        self.user_state(address).await
    }
}
