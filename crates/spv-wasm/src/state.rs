//! Serializable views of headers and proofs handed to JavaScript.

use serde::{Deserialize, Serialize};
use spv_core::{difficulty::format_difficulty, BlockHeader, DisplayHash, MerkleProof};
use wasm_bindgen::prelude::*;

/// Everything a light client shows about a header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// Block id (display format).
    pub hash: String,
    pub version: u32,
    /// Previous block id (display format).
    pub prev_block: String,
    /// Committed Merkle root (display format).
    pub merkle_root: String,
    pub timestamp: u32,
    /// Compact bits as the conventional u32.
    pub bits: u32,
    /// Target as big-endian hex.
    pub target: String,
    /// Difficulty as a number.
    pub difficulty: f64,
    /// Formatted difficulty string.
    pub difficulty_display: String,
    /// Leading zero bits of the block id.
    pub leading_zeros: u32,
    pub pow_valid: bool,
    pub bip9: bool,
    pub bip91: bool,
    pub bip141: bool,
}

impl HeaderInfo {
    /// Collect the header's derived values; fails on malformed bits.
    pub fn from_header(header: &BlockHeader) -> spv_core::Result<Self> {
        let hash = header.hash();
        let mut target = [0u8; 32];
        header.target()?.to_big_endian(&mut target);
        let difficulty = header.difficulty()?;

        Ok(HeaderInfo {
            hash: hash.to_string(),
            version: header.version,
            prev_block: header.prev_block.to_string(),
            merkle_root: header.merkle_root.to_string(),
            timestamp: header.timestamp,
            bits: header.bits.to_u32(),
            target: hex::encode(target),
            difficulty,
            difficulty_display: format_difficulty(difficulty),
            leading_zeros: hash.leading_zero_bits(),
            pow_valid: header.satisfies_proof_of_work()?,
            bip9: header.signals_bip9(),
            bip91: header.signals_bip91(),
            bip141: header.signals_bip141(),
        })
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// A proof together with its portable encodings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofInfo {
    /// The proof itself, hashes as hex strings.
    pub proof: MerkleProof,
    /// Binary wire form as hex.
    pub wire_hex: String,
    /// Whether the proof verifies against the root it carries.
    pub valid: bool,
}

impl ProofInfo {
    pub fn from_proof(proof: MerkleProof) -> spv_core::Result<Self> {
        Ok(ProofInfo {
            wire_hex: proof.to_hex()?,
            valid: proof.verify()?,
            proof,
        })
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Parse display-order txids given as hex strings.
pub fn parse_tx_ids<S: AsRef<str>>(tx_ids: &[S]) -> spv_core::Result<Vec<DisplayHash>> {
    tx_ids.iter().map(|id| id.as_ref().parse()).collect()
}
