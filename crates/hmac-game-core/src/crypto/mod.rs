//! Cryptographic primitives for the HMAC game.
//!
//! This module provides:
//! - HmacKey, the secret disclosed after the player moves
//! - Commitment, the HMAC-SHA3-256 binding of the computer's move to that key

mod commitment;
mod key;

pub use commitment::Commitment;
pub use key::{HmacKey, KEY_LEN};

/// Decode a fixed-size byte array from hex.
fn decode_array<const N: usize>(s: &str) -> crate::Result<[u8; N]> {
    let bytes = hex::decode(s.trim())?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| crate::GameError::InvalidLength {
            expected: N,
            actual,
        })
}

/// Serialize fixed-size byte arrays as lowercase hex strings.
mod hex_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_array(&hex_str).map_err(serde::de::Error::custom)
    }
}
