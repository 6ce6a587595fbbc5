//! Error types for header parsing, target decoding and Merkle proofs.

use thiserror::Error;

/// Errors surfaced by this crate. None of them are transient.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer bytes were available than a fixed-width field requires.
    #[error("truncated input while reading {field}")]
    TruncatedInput {
        /// The field being read when input ran out.
        field: &'static str,
    },

    /// The compact target encodes a negative shift or overflows 256 bits.
    #[error("malformed compact target {}", hex::encode(.0))]
    MalformedTarget([u8; 4]),

    /// Merkle root validation was requested without a transaction id list.
    #[error("no transaction ids attached to block")]
    MissingLeafSet,

    /// A Merkle tree was requested over zero leaves.
    #[error("cannot build a merkle tree without leaves")]
    EmptyLeafSet,

    /// The requested leaf is not in the tree's leaf level.
    #[error("leaf {0} not found in merkle tree")]
    LeafNotFound(String),

    /// A generated proof does not fold back to the tree's root.
    #[error("merkle proof for index {index} does not reach the tree root")]
    InternalInconsistency {
        /// Leaf position the proof was generated for.
        index: usize,
    },

    /// A proof is structurally invalid (sizes, depth, trailing bytes).
    #[error("malformed merkle proof: {0}")]
    MalformedProof(String),

    /// Hex input could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The underlying reader failed for a reason other than end of input.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
