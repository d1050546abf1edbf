//! Commitment to the computer's move.

use super::HmacKey;
use crate::{GameError, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

type HmacSha3_256 = Hmac<Sha3_256>;

/// Commitment = HMAC-SHA3-256(key, move_name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(#[serde(with = "super::hex_serde")] [u8; 32]);

impl Commitment {
    /// Commit to a move name under the given key
    pub fn new(key: &HmacKey, move_name: &str) -> Self {
        let mac = Self::mac(key, move_name);
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the disclosed key and move produce this commitment
    pub fn verify(&self, key: &HmacKey, move_name: &str) -> bool {
        Self::mac(key, move_name).verify_slice(&self.0).is_ok()
    }

    fn mac(key: &HmacKey, move_name: &str) -> HmacSha3_256 {
        let mut mac = HmacSha3_256::new_from_slice(key.to_hex().as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        mac
    }
}

impl FromStr for Commitment {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        super::decode_array(s).map(Self)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
