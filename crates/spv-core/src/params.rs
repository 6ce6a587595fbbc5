//! Consensus constants for block headers and Merkle proofs.

/// Size of a serialized block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Size of a double-SHA256 digest.
pub const HASH_SIZE: usize = 32;

/// Compact bits of the minimum-difficulty target (exponent 0x1d, coefficient 0xffff).
pub const MIN_DIFFICULTY_BITS: u32 = 0x1d00ffff;

/// Exponent of the minimum-difficulty target.
pub const MIN_DIFFICULTY_EXPONENT: u8 = 0x1d;

/// Coefficient of the minimum-difficulty target.
pub const MIN_DIFFICULTY_COEFFICIENT: u32 = 0xffff;

/// Top three version bits must equal this value for BIP9 signaling.
pub const BIP9_TOP_BITS: u32 = 0b001;

/// Version bit used to signal BIP91 readiness.
pub const BIP91_BIT: u32 = 4;

/// Version bit used to signal BIP141 (segwit) readiness.
pub const BIP141_BIT: u32 = 1;

/// Deepest proof accepted by the verifier. Leaf indexes are u32, so no
/// tree can be taller than this.
pub const MAX_PROOF_DEPTH: usize = 32;

/// Fixed part of a serialized proof: root, leaf, index and sibling count.
pub const PROOF_PREFIX_SIZE: usize = HASH_SIZE * 2 + 4 + 1;
