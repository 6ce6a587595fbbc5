//! Merkle inclusion proofs: generation from a built tree and standalone
//! verification.
//!
//! A proof carries everything the verifier needs. Verification assumes a
//! perfect tree of `2^siblings.len()` leaves; since the generator always
//! emits exactly one sibling per tree level, the side of each node along
//! the path comes out identical to the real tree. The proof does not carry
//! the original leaf count, so a verifier cannot tell which leaf count the
//! root was built over.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::hash::{merkle_parent, DisplayHash, InternalHash};
use crate::merkle::{merkle_path, path_bits, MerkleTree};
use crate::params::{HASH_SIZE, MAX_PROOF_DEPTH, PROOF_PREFIX_SIZE};

/// A self-contained Merkle inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Root the proof commits to (display order, as stored in headers).
    pub merkle_root: DisplayHash,
    /// The proven transaction id (display order).
    pub leaf: DisplayHash,
    /// Position of the leaf in the block.
    pub index: u32,
    /// One sibling per level, leaf to root (internal order).
    pub siblings: Vec<InternalHash>,
}

impl MerkleProof {
    pub fn new(
        merkle_root: DisplayHash,
        leaf: DisplayHash,
        index: u32,
        siblings: Vec<InternalHash>,
    ) -> Self {
        MerkleProof {
            merkle_root,
            leaf,
            index,
            siblings,
        }
    }

    /// Generate a proof for `leaf` (display order) from a built tree.
    pub fn generate(tree: &MerkleTree, leaf: &DisplayHash) -> Result<Self> {
        let target = leaf.reversed();
        let index = tree
            .position(&target)
            .ok_or_else(|| Error::LeafNotFound(leaf.to_string()))?;
        let proof_index =
            u32::try_from(index).map_err(|_| Error::MalformedProof(format!("index {} exceeds u32", index)))?;

        let mut current = target;
        let mut siblings = Vec::with_capacity(tree.height());

        for (depth, position) in merkle_path(index, tree.leaf_count()).into_iter().enumerate() {
            let level = &tree.levels()[depth];
            if position % 2 == 0 {
                // Last node of an odd level is its own sibling.
                let sibling = level.get(position + 1).unwrap_or(&level[position]);
                current = merkle_parent(&current, sibling);
                siblings.push(*sibling);
            } else {
                let sibling = &level[position - 1];
                current = merkle_parent(sibling, &current);
                siblings.push(*sibling);
            }
        }

        if current != tree.root() {
            error!(index, root = %tree.root(), folded = %current, "merkle proof does not reach tree root");
            return Err(Error::InternalInconsistency { index });
        }

        debug!(index, depth = siblings.len(), "generated merkle proof");
        Ok(MerkleProof {
            merkle_root: tree.root().reversed(),
            leaf: *leaf,
            index: proof_index,
            siblings,
        })
    }

    /// Fold the leaf up through the siblings and compare with the root.
    ///
    /// A well-formed proof that does not match returns `Ok(false)`; only
    /// structurally invalid proofs are errors.
    pub fn verify(&self) -> Result<bool> {
        let depth = self.siblings.len();
        if depth > MAX_PROOF_DEPTH {
            return Err(Error::MalformedProof(format!(
                "{} siblings exceeds maximum depth {}",
                depth, MAX_PROOF_DEPTH
            )));
        }

        let perfect_leaf_count = 1usize.checked_shl(depth as u32).ok_or_else(|| {
            Error::MalformedProof(format!("{} siblings is too deep for this platform", depth))
        })?;

        let mut current = self.leaf.reversed();
        let bits = path_bits(self.index as usize, perfect_leaf_count);

        for (bit, sibling) in bits.iter().zip(&self.siblings) {
            current = if *bit == 1 {
                merkle_parent(sibling, &current)
            } else {
                merkle_parent(&current, sibling)
            };
        }

        Ok(current.reversed() == self.merkle_root)
    }

    /// Serialize as `root | leaf | index (u32 LE) | count (u8) | siblings`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let count = u8::try_from(self.siblings.len())
            .ok()
            .filter(|count| *count as usize <= MAX_PROOF_DEPTH)
            .ok_or_else(|| {
                Error::MalformedProof(format!("{} siblings exceeds maximum depth", self.siblings.len()))
            })?;

        let mut out = Vec::with_capacity(PROOF_PREFIX_SIZE + HASH_SIZE * self.siblings.len());
        out.extend_from_slice(self.merkle_root.as_bytes());
        out.extend_from_slice(self.leaf.as_bytes());
        out.extend_from_slice(&self.index.to_le_bytes());
        out.push(count);
        for sibling in &self.siblings {
            out.extend_from_slice(sibling.as_bytes());
        }
        Ok(out)
    }

    /// Parse the form produced by [`MerkleProof::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PROOF_PREFIX_SIZE {
            return Err(Error::MalformedProof(format!(
                "{} bytes is shorter than the {} byte prefix",
                bytes.len(),
                PROOF_PREFIX_SIZE
            )));
        }

        let (root, rest) = bytes.split_at(HASH_SIZE);
        let (leaf, rest) = rest.split_at(HASH_SIZE);
        let (index, rest) = rest.split_at(4);
        let (count, rest) = rest.split_at(1);
        let count = count[0] as usize;

        if count > MAX_PROOF_DEPTH {
            return Err(Error::MalformedProof(format!(
                "{} siblings exceeds maximum depth {}",
                count, MAX_PROOF_DEPTH
            )));
        }
        if rest.len() != count * HASH_SIZE {
            return Err(Error::MalformedProof(format!(
                "expected {} sibling bytes, found {}",
                count * HASH_SIZE,
                rest.len()
            )));
        }

        let siblings = rest
            .chunks_exact(HASH_SIZE)
            .map(|chunk| InternalHash(to_array(chunk)))
            .collect();

        Ok(MerkleProof {
            merkle_root: DisplayHash(to_array(root)),
            leaf: DisplayHash(to_array(leaf)),
            index: u32::from_le_bytes([index[0], index[1], index[2], index[3]]),
            siblings,
        })
    }

    pub fn to_hex(&self) -> Result<String> {
        self.to_bytes().map(hex::encode)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s.trim())?)
    }
}

fn to_array(chunk: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(chunk);
    out
}

impl fmt::Display for MerkleProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:[", self.merkle_root, self.leaf, self.index)?;
        for sibling in &self.siblings {
            write!(f, "{},", sibling)?;
        }
        f.write_str("]")
    }
}
