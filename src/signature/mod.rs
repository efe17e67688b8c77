//! L1 action signing.
//!
//! Order actions are not signed directly: their MessagePack hash becomes the
//! `connectionId` of an EIP-712 `Agent` struct, and that struct is what the
//! wallet signs.

mod agent;

use alloy::{
    primitives::{Signature, B256},
    signers::{local::PrivateKeySigner, SignerSync},
};

use crate::{eip712::Eip712, prelude::*, Error};

use agent::Agent;

pub(crate) fn sign_l1_action(
    wallet: &PrivateKeySigner,
    connection_id: B256,
    is_mainnet: bool,
) -> Result<Signature> {
    sign_typed_data(&Agent::for_action(connection_id, is_mainnet), wallet)
}

pub(crate) fn sign_typed_data<T: Eip712>(payload: &T, wallet: &PrivateKeySigner) -> Result<Signature> {
    wallet
        .sign_hash_sync(&payload.eip712_signing_hash())
        .map_err(|e| Error::SignatureFailure(e.to_string()))
}
