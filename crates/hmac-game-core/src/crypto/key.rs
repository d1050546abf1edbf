//! Secret key for the move commitment.

use crate::{GameError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret HMAC key, generated once per game and disclosed after the player moves
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HmacKey(#[serde(with = "super::hex_serde")] [u8; KEY_LEN]);

impl HmacKey {
    /// Generate a new key from the operating system's secure random source
    pub fn generate() -> Result<Self> {
        Self::from_rng(&mut OsRng)
    }

    /// Generate a new key from the given cryptographic RNG
    pub fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| GameError::Entropy(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex rendering; 64 characters.
    ///
    /// This text, not the raw bytes, is the HMAC key material, so a player can
    /// paste the disclosed key into any HMAC-SHA3-256 tool.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for HmacKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        super::decode_array(s).map(Self)
    }
}

// Never print the secret by accident.
impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey(..)")
    }
}
