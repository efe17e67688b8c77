//! In-memory stand-ins for the exchange seams, for tests.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use wiremock::{Request, Respond, ResponseTemplate};

use crate::{
    gateway::{AccountStateSource, OrderGateway},
    identity::Identity,
    prelude::*,
    req::HttpClient,
    ClientOrderRequest, Error,
};

/// Answers every state query with the same response.
pub(crate) struct StaticStateSource {
    response: std::result::Result<Value, Error>,
    calls: AtomicUsize,
}

impl StaticStateSource {
    pub(crate) fn returning(state: Value) -> Self {
        Self {
            response: Ok(state),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(error: Error) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountStateSource for StaticStateSource {
    async fn account_state(&self, _address: Address) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Simulated exchange that fills every order and echoes back what it received.
#[derive(Default)]
pub(crate) struct EchoGateway {
    calls: AtomicUsize,
}

impl EchoGateway {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderGateway for EchoGateway {
    async fn place_order(&self, identity: &Identity, order: &ClientOrderRequest) -> Result<Value> {
        let oid = self.calls.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        Ok(json!({
            "status": "ok",
            "response": {
                "type": "order",
                "data": {"statuses": [{"filled": {
                    "totalSz": order.sz().to_string(),
                    "avgPx": order.limit_px().to_string(),
                    "oid": oid
                }}]},
                "echo": {
                    "user": identity.address().to_string(),
                    "coin": order.coin(),
                    "side": order.side().to_string(),
                    "sz": order.sz(),
                    "limitPx": order.limit_px(),
                    "tif": order.tif(),
                    "reduceOnly": order.reduce_only()
                }
            }
        }))
    }
}

/// Plays back a fixed list of results, one per call, and remembers who signed.
pub(crate) struct ScriptedGateway {
    script: Mutex<VecDeque<Result<Value>>>,
    calls: AtomicUsize,
    last_signer: Mutex<Option<Address>>,
}

impl ScriptedGateway {
    pub(crate) fn new(script: Vec<Result<Value>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
            last_signer: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_signer(&self) -> Option<Address> {
        *self.last_signer.lock().expect("signer lock poisoned")
    }
}

#[async_trait]
impl OrderGateway for ScriptedGateway {
    async fn place_order(&self, identity: &Identity, _order: &ClientOrderRequest) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_signer.lock().expect("signer lock poisoned") = Some(identity.address());
        self.script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(Error::GenericRequest("script exhausted".to_string())))
    }
}

/// HTTP client aimed at a local mock server instead of a Hyperliquid network.
pub(crate) fn http_client_at(uri: String) -> HttpClient {
    HttpClient {
        client: Client::new(),
        base_url: uri,
    }
}

/// Mock-server responder that acknowledges an `/exchange` post and echoes its body
/// under `response.echo`.
pub(crate) struct EchoPayload;

impl Respond for EchoPayload {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let payload: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "response": {"type": "order", "echo": payload}
        }))
    }
}
