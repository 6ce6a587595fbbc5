//! Header inspection, proof verification and proof generation for JS.

use spv_core::{Block, BlockHeader, DisplayHash, MerkleProof};
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::state::{parse_tx_ids, HeaderInfo, ProofInfo};

/// Decode an 80-byte header given as hex and describe it.
#[wasm_bindgen]
pub fn inspect_header(header_hex: &str) -> Result<JsValue, JsValue> {
    let header = BlockHeader::from_hex(header_hex).map_err(js_error)?;
    HeaderInfo::from_header(&header).map_err(js_error)?.to_js()
}

/// Check a header's proof of work.
#[wasm_bindgen]
pub fn check_proof_of_work(header_hex: &str) -> Result<bool, JsValue> {
    let header = BlockHeader::from_hex(header_hex).map_err(js_error)?;
    header.satisfies_proof_of_work().map_err(js_error)
}

/// Verify a proof given as JSON (`merkle_root`, `leaf`, `index`, `siblings`).
#[wasm_bindgen]
pub fn verify_proof_json(proof_json: &str) -> Result<bool, JsValue> {
    let proof: MerkleProof = serde_json::from_str(proof_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid proof: {}", e)))?;
    proof.verify().map_err(js_error)
}

/// Verify a proof in its binary wire form, hex encoded.
#[wasm_bindgen]
pub fn verify_proof_hex(proof_hex: &str) -> Result<bool, JsValue> {
    MerkleProof::from_hex(proof_hex)
        .and_then(|proof| proof.verify())
        .map_err(js_error)
}

/// A block whose full txid list is known, able to hand out proofs.
#[wasm_bindgen]
pub struct BlockProver {
    block: Block,
}

#[wasm_bindgen]
impl BlockProver {
    /// Create a prover from a header and the block's txids.
    ///
    /// # Arguments
    /// * `header_hex` - The 80-byte header as hex
    /// * `tx_ids` - Array of txid hex strings, display format, block order
    #[wasm_bindgen(constructor)]
    pub fn new(header_hex: &str, tx_ids: js_sys::Array) -> Result<BlockProver, JsValue> {
        let ids: Vec<String> = tx_ids
            .iter()
            .map(|value| {
                value
                    .as_string()
                    .ok_or_else(|| JsValue::from_str("txids must be strings"))
            })
            .collect::<Result<_, _>>()?;

        BlockProver::from_parts(header_hex, ids.as_slice()).map_err(js_error)
    }

    /// Block id (display format).
    #[wasm_bindgen(getter)]
    pub fn hash(&self) -> String {
        self.block.hash().to_string()
    }

    /// Number of txids attached.
    #[wasm_bindgen(getter)]
    pub fn tx_count(&self) -> usize {
        self.block.tx_ids().map_or(0, |ids| ids.len())
    }

    /// Check the header's Merkle root against the txids.
    #[wasm_bindgen]
    pub fn validate_merkle_root(&self) -> Result<bool, JsValue> {
        self.block.validate_merkle_root().map_err(js_error)
    }

    /// Build a proof for one txid.
    #[wasm_bindgen]
    pub fn proof(&self, tx_id: &str) -> Result<JsValue, JsValue> {
        self.proof_info(tx_id).map_err(js_error)?.to_js()
    }

    /// Build a proof for one txid in binary wire form, hex encoded.
    #[wasm_bindgen]
    pub fn proof_hex(&self, tx_id: &str) -> Result<String, JsValue> {
        self.proof_info(tx_id).map(|info| info.wire_hex).map_err(js_error)
    }
}

impl BlockProver {
    pub fn from_parts<S: AsRef<str>>(header_hex: &str, tx_ids: &[S]) -> spv_core::Result<Self> {
        let header = BlockHeader::from_hex(header_hex)?;
        let tx_ids = parse_tx_ids(tx_ids)?;
        Ok(BlockProver {
            block: Block::with_tx_ids(header, tx_ids),
        })
    }

    pub fn proof_info(&self, tx_id: &str) -> spv_core::Result<ProofInfo> {
        let tx_id: DisplayHash = tx_id.parse()?;
        ProofInfo::from_proof(self.block.create_merkle_proof(&tx_id)?)
    }
}
