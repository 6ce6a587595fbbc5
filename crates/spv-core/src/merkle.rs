//! Merkle tree construction for Bitcoin transactions.
//!
//! Levels are stored leaf-first. A level with an odd number of nodes pairs
//! its last node with itself; the duplicate is never stored, so level `k+1`
//! always holds `ceil(len_k / 2)` nodes.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::hash::{merkle_parent, InternalHash};

/// Every level of a Merkle tree, from the leaves up to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<InternalHash>>,
}

impl MerkleTree {
    /// Build the full tree over `leaves` (internal order).
    pub fn build(leaves: &[InternalHash]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::EmptyLeafSet);
        }

        let mut levels = Vec::with_capacity(tree_height(leaves.len()) + 1);
        let mut current = leaves.to_vec();

        while current.len() > 1 {
            let parents = parent_level(&current);
            trace!(nodes = current.len(), parents = parents.len(), "merkle level");
            levels.push(current);
            current = parents;
        }
        levels.push(current);

        debug!(leaves = leaves.len(), height = levels.len() - 1, "built merkle tree");
        Ok(MerkleTree { levels })
    }

    /// All levels, leaves first and root last.
    pub fn levels(&self) -> &[Vec<InternalHash>] {
        &self.levels
    }

    /// Nodes at `depth`, where 0 is the leaves.
    pub fn level(&self, depth: usize) -> Option<&[InternalHash]> {
        self.levels.get(depth).map(Vec::as_slice)
    }

    /// The leaves (internal order).
    pub fn leaves(&self) -> &[InternalHash] {
        &self.levels[0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// The Merkle root (internal order).
    pub fn root(&self) -> InternalHash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Position of the first leaf equal to `leaf`.
    pub fn position(&self, leaf: &InternalHash) -> Option<usize> {
        self.leaves().iter().position(|h| h == leaf)
    }
}

/// Hash one level into its parents, duplicating the last node when odd.
pub fn parent_level(level: &[InternalHash]) -> Vec<InternalHash> {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            merkle_parent(left, right)
        })
        .collect()
}

/// Compute only the Merkle root over `leaves`.
pub fn merkle_root(leaves: &[InternalHash]) -> Result<InternalHash> {
    if leaves.is_empty() {
        return Err(Error::EmptyLeafSet);
    }

    let mut current = leaves.to_vec();
    while current.len() > 1 {
        current = parent_level(&current);
    }
    Ok(current[0])
}

/// Height of a tree over `leaf_count` leaves: `ceil(log2(leaf_count))`.
pub fn tree_height(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        return 0;
    }
    (usize::BITS - (leaf_count - 1).leading_zeros()) as usize
}

/// Position of the node on each level walking up from leaf `index`.
pub fn merkle_path(index: usize, leaf_count: usize) -> Vec<usize> {
    let mut position = index;
    (0..tree_height(leaf_count))
        .map(|_| {
            let current = position;
            position /= 2;
            current
        })
        .collect()
}

/// Side of each node on the path: 0 for a left child, 1 for a right child.
pub fn path_bits(index: usize, leaf_count: usize) -> Vec<u8> {
    merkle_path(index, leaf_count)
        .into_iter()
        .map(|position| (position % 2) as u8)
        .collect()
}
