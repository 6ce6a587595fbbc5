//! Double-SHA256 and the two byte orders hashes travel in.
//!
//! Hashes come out of SHA256d in *internal* order; that is the order they are
//! concatenated in when computing Merkle parents. Block ids and txids are
//! shown to humans, and stored in parsed headers, in the reversed *display*
//! order. The [`InternalHash`] and [`DisplayHash`] wrappers keep the two from
//! being mixed up.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::params::HASH_SIZE;

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
///
/// This is used for block header hashing and Merkle parents.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(&first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Hash two internal-order nodes into their Merkle parent.
#[inline]
pub fn merkle_parent(left: &InternalHash, right: &InternalHash) -> InternalHash {
    let mut combined = [0u8; 64];
    combined[..32].copy_from_slice(left.as_bytes());
    combined[32..].copy_from_slice(right.as_bytes());
    InternalHash(double_sha256(&combined))
}

/// Reverse the byte order of a 32-byte array.
#[inline]
pub fn reverse_bytes(bytes: &[u8; 32]) -> [u8; 32] {
    let mut reversed = *bytes;
    reversed.reverse();
    reversed
}

/// A 32-byte hash in internal (digest) byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct InternalHash(pub [u8; 32]);

/// A 32-byte hash in display (byte-reversed) order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DisplayHash(pub [u8; 32]);

impl InternalHash {
    /// Hash `data` with SHA256d.
    pub fn digest(data: &[u8]) -> Self {
        InternalHash(double_sha256(data))
    }

    /// Raw bytes in internal order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to display order.
    pub fn reversed(&self) -> DisplayHash {
        DisplayHash(reverse_bytes(&self.0))
    }
}

impl DisplayHash {
    /// Raw bytes in display order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to internal order.
    pub fn reversed(&self) -> InternalHash {
        InternalHash(reverse_bytes(&self.0))
    }

    /// Count leading zero bits, as seen in the displayed hex.
    pub fn leading_zero_bits(&self) -> u32 {
        let mut zeros = 0u32;
        for byte in self.0.iter() {
            if *byte == 0 {
                zeros += 8;
            } else {
                zeros += byte.leading_zeros();
                break;
            }
        }
        zeros
    }
}

fn decode_hash(s: &str) -> Result<[u8; 32], Error> {
    let mut bytes = [0u8; HASH_SIZE];
    hex::decode_to_slice(s.trim(), &mut bytes)?;
    Ok(bytes)
}

macro_rules! impl_hex_traits {
    ($name:ident) => {
        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                $name(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_hash(s).map($name)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&hex::encode(self.0))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_hex_traits!(InternalHash);
impl_hex_traits!(DisplayHash);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256() {
        // Test vector: SHA256d("hello")
        let hash = double_sha256(b"hello");
        let expected =
            hex::decode("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50").unwrap();
        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_reverse_bytes() {
        let mut original = [0u8; 32];
        for (i, b) in original.iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        let reversed = reverse_bytes(&original);

        assert_eq!(reversed[0], 0x20);
        assert_eq!(reversed[31], 0x01);
    }

    #[test]
    fn test_order_conversions_are_inverse() {
        let internal = InternalHash::digest(b"order");
        let display = internal.reversed();
        assert_ne!(display.0, internal.0);
        assert_eq!(display.reversed(), internal);
    }

    #[test]
    fn test_display_hex_roundtrip() {
        let hex_id = "0000000000000000007e9e4c586439b0cdbe13b1370bdd9435d76a644d047523";
        let id: DisplayHash = hex_id.parse().unwrap();
        assert_eq!(id.to_string(), hex_id);
        assert_eq!(id.0[0], 0x00);
        assert_eq!(id.0[31], 0x23);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!("abcd".parse::<DisplayHash>(), Err(Error::InvalidHex(_))));
        assert!(matches!("zz".repeat(32).parse::<InternalHash>(), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_leading_zero_bits() {
        assert_eq!(DisplayHash([0u8; 32]).leading_zero_bits(), 256);

        let mut hash = [0xFFu8; 32];
        hash[0] = 0x00;
        hash[1] = 0x00;
        hash[2] = 0x0F;
        assert_eq!(DisplayHash(hash).leading_zero_bits(), 20);
    }

    #[test]
    fn test_merkle_parent_concatenates_left_then_right() {
        let left = InternalHash([0x11; 32]);
        let right = InternalHash([0x22; 32]);

        let mut combined = [0u8; 64];
        combined[..32].copy_from_slice(&left.0);
        combined[32..].copy_from_slice(&right.0);

        assert_eq!(merkle_parent(&left, &right).0, double_sha256(&combined));
        assert_ne!(merkle_parent(&left, &right), merkle_parent(&right, &left));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = DisplayHash([0xAB; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        let back: DisplayHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
