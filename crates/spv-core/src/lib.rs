//! Bitcoin block header and Merkle proof primitives for light clients.
//!
//! This crate provides pure Rust implementations of:
//! - Compact "bits" target decoding and difficulty
//! - Block header parsing, serialization, hashing and proof-of-work checks
//! - Version-bit soft-fork signaling (BIP9, BIP91, BIP141)
//! - Merkle tree construction with odd-level duplication
//! - Merkle inclusion proof generation and standalone verification

pub mod block;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod params;
pub mod proof;

#[cfg(test)]
mod fixtures;

pub use block::{Block, BlockHeader};
pub use difficulty::{decode_difficulty, decode_target, CompactTarget};
pub use error::{Error, Result};
pub use hash::{double_sha256, DisplayHash, InternalHash};
pub use merkle::{merkle_root, path_bits, MerkleTree};
pub use primitive_types::U256;
pub use proof::MerkleProof;
