//! Key resolution: operator-supplied key text to a session [`Identity`].
//!
//! The key never leaves this module except inside a [`PrivateKeySigner`], whose
//! signing key zeroizes itself on drop. Intermediate buffers are zeroized too.

use std::fmt;

use alloy::{
    primitives::{hex, Address},
    signers::local::PrivateKeySigner,
};
use log::info;
use secrecy::{zeroize::Zeroizing, ExposeSecret, SecretString};

use crate::{prelude::*, Error};

const KEY_PREFIX: &str = "0x";
const KEY_BYTES: usize = 32;

/// The operator's account as derived from their private key.
///
/// Read-only once built. Dropping it releases the key.
pub struct Identity {
    signer: PrivateKeySigner,
    address: Address,
}

impl Identity {
    pub fn address(&self) -> Address {
        self.address
    }

    pub(crate) fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("address", &self.address)
            .field("signer", &"<redacted>")
            .finish()
    }
}

/// Prepend the conventional `0x` prefix when it is missing.
fn normalize(raw: &str) -> SecretString {
    let trimmed = raw.trim();
    if trimmed.starts_with(KEY_PREFIX) {
        SecretString::from(trimmed.to_string())
    } else {
        SecretString::from(format!("{KEY_PREFIX}{trimmed}"))
    }
}

/// Resolve key text into an [`Identity`]. Pure: no I/O, same input gives the same address.
pub fn resolve(raw_key: &SecretString) -> Result<Identity> {
    let normalized = normalize(raw_key.expose_secret());
    let hex_digits = &normalized.expose_secret()[KEY_PREFIX.len()..];

    if hex_digits.len() != KEY_BYTES * 2 {
        return Err(Error::InvalidKeyMaterial(format!(
            "expected {} hex characters, got {}",
            KEY_BYTES * 2,
            hex_digits.len()
        )));
    }

    let bytes = Zeroizing::new(
        hex::decode(hex_digits)
            .map_err(|e| Error::InvalidKeyMaterial(format!("not valid hex: {e}")))?,
    );
    let signer = PrivateKeySigner::from_slice(&bytes)
        .map_err(|e| Error::InvalidKeyMaterial(format!("not a valid secp256k1 key: {e}")))?;
    let address = signer.address();

    info!("Resolved identity {address}");
    Ok(Identity { signer, address })
}

/// Convenience wrapper for callers holding plain key text.
pub fn resolve_str(raw_key: &str) -> Result<Identity> {
    resolve(&SecretString::from(raw_key.to_string()))
}
