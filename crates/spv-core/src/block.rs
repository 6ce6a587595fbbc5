//! Bitcoin block header parsing, serialization and validation.

use std::io::{self, Read};
use std::sync::OnceLock;

use primitive_types::U256;
use tracing::{debug, warn};

use crate::difficulty::CompactTarget;
use crate::error::{Error, Result};
use crate::hash::{double_sha256, DisplayHash, InternalHash};
use crate::merkle::{merkle_root, MerkleTree};
use crate::params::{BIP141_BIT, BIP91_BIT, BIP9_TOP_BITS, BLOCK_HEADER_SIZE};
use crate::proof::MerkleProof;

/// A Bitcoin block header (80 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version with BIP9 versionbits.
    pub version: u32,
    /// Id of the previous block.
    pub prev_block: DisplayHash,
    /// Merkle root of all transactions.
    pub merkle_root: DisplayHash,
    /// Block timestamp (Unix time).
    pub timestamp: u32,
    /// Difficulty target in compact "bits" format.
    pub bits: CompactTarget,
    /// Nonce for proof of work, kept as raw bytes.
    pub nonce: [u8; 4],
}

fn read_field<R: Read, const N: usize>(reader: &mut R, field: &'static str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::TruncatedInput { field },
        _ => Error::Io(e),
    })?;
    Ok(buf)
}

impl BlockHeader {
    /// Build a header from its field values.
    pub fn new(
        version: u32,
        prev_block: DisplayHash,
        merkle_root: DisplayHash,
        timestamp: u32,
        bits: CompactTarget,
        nonce: [u8; 4],
    ) -> Self {
        BlockHeader {
            version,
            prev_block,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Read one header off a stream.
    ///
    /// The two 32-byte ids are stored reversed on the wire.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let version = u32::from_le_bytes(read_field(reader, "version")?);
        let prev_block = InternalHash(read_field(reader, "prev_block")?).reversed();
        let merkle_root = InternalHash(read_field(reader, "merkle_root")?).reversed();
        let timestamp = u32::from_le_bytes(read_field(reader, "timestamp")?);
        let bits = CompactTarget(read_field(reader, "bits")?);
        let nonce = read_field(reader, "nonce")?;

        Ok(BlockHeader {
            version,
            prev_block,
            merkle_root,
            timestamp,
            bits,
            nonce,
        })
    }

    /// Parse the first 80 bytes of `bytes`.
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self> {
        Self::parse(&mut bytes)
    }

    /// Parse a header given as hex.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s.trim())?)
    }

    /// Serialize the block header to 80 bytes.
    pub fn serialize(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut header = [0u8; BLOCK_HEADER_SIZE];

        header[0..4].copy_from_slice(&self.version.to_le_bytes());
        header[4..36].copy_from_slice(self.prev_block.reversed().as_bytes());
        header[36..68].copy_from_slice(self.merkle_root.reversed().as_bytes());
        header[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        header[72..76].copy_from_slice(self.bits.as_bytes());
        header[76..80].copy_from_slice(&self.nonce);

        header
    }

    /// Serialized header as hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    /// The block id: SHA256d of the header, in display order.
    pub fn hash(&self) -> DisplayHash {
        InternalHash(double_sha256(&self.serialize())).reversed()
    }

    /// BIP9: top three version bits are `001`.
    pub fn signals_bip9(&self) -> bool {
        self.version >> 29 == BIP9_TOP_BITS
    }

    /// BIP91: version bit 4 is set.
    pub fn signals_bip91(&self) -> bool {
        (self.version >> BIP91_BIT) & 1 == 1
    }

    /// BIP141 (segwit): version bit 1 is set.
    pub fn signals_bip141(&self) -> bool {
        (self.version >> BIP141_BIT) & 1 == 1
    }

    /// Get the target as a 256-bit number.
    pub fn target(&self) -> Result<U256> {
        self.bits.target()
    }

    /// Difficulty relative to the minimum-difficulty target.
    pub fn difficulty(&self) -> Result<f64> {
        self.bits.difficulty()
    }

    /// True if the block id, read as a big-endian integer, is below the target.
    pub fn satisfies_proof_of_work(&self) -> Result<bool> {
        let target = self.target()?;
        let hash = U256::from_big_endian(self.hash().as_bytes());
        Ok(hash < target)
    }

    /// Check the committed Merkle root against a full list of txids
    /// (display order).
    pub fn validate_merkle_root(&self, tx_ids: &[DisplayHash]) -> Result<bool> {
        if tx_ids.is_empty() {
            return Err(Error::MissingLeafSet);
        }

        let leaves: Vec<InternalHash> = tx_ids.iter().map(DisplayHash::reversed).collect();
        let computed = merkle_root(&leaves)?.reversed();
        if computed != self.merkle_root {
            warn!(expected = %self.merkle_root, computed = %computed, "merkle root mismatch");
            return Ok(false);
        }
        Ok(true)
    }
}

/// A header together with its transaction ids, once the body is known.
///
/// The Merkle tree is built at most once and shared by every proof request.
#[derive(Debug, Clone)]
pub struct Block {
    pub header: BlockHeader,
    tx_ids: Option<Vec<DisplayHash>>,
    merkle_tree: OnceLock<MerkleTree>,
}

impl Block {
    /// A block whose body is not known yet.
    pub fn new(header: BlockHeader) -> Self {
        Block {
            header,
            tx_ids: None,
            merkle_tree: OnceLock::new(),
        }
    }

    /// A block with its txids (display order) already attached.
    pub fn with_tx_ids(header: BlockHeader, tx_ids: Vec<DisplayHash>) -> Self {
        let mut block = Block::new(header);
        block.attach_tx_ids(tx_ids);
        block
    }

    /// Attach the body's txids (display order), dropping any cached tree.
    pub fn attach_tx_ids(&mut self, tx_ids: Vec<DisplayHash>) {
        self.tx_ids = Some(tx_ids);
        self.merkle_tree = OnceLock::new();
    }

    /// Attached txids, if any.
    pub fn tx_ids(&self) -> Option<&[DisplayHash]> {
        self.tx_ids.as_deref()
    }

    /// The block id (display order).
    pub fn hash(&self) -> DisplayHash {
        self.header.hash()
    }

    fn leaves(&self) -> Result<Vec<InternalHash>> {
        let tx_ids = self.tx_ids.as_deref().ok_or(Error::MissingLeafSet)?;
        Ok(tx_ids.iter().map(DisplayHash::reversed).collect())
    }

    /// Build the Merkle tree now if it is not cached yet.
    pub fn calculate_merkle_tree(&self) -> Result<()> {
        self.merkle_tree().map(|_| ())
    }

    /// The cached Merkle tree, built on first use.
    pub fn merkle_tree(&self) -> Result<&MerkleTree> {
        if let Some(tree) = self.merkle_tree.get() {
            return Ok(tree);
        }

        let tree = MerkleTree::build(&self.leaves()?)?;
        debug!(block = %self.header.hash(), leaves = tree.leaf_count(), "cached merkle tree");
        // A concurrent caller may have won the race; its tree is identical.
        Ok(self.merkle_tree.get_or_init(|| tree))
    }

    /// Whether the Merkle tree has been built.
    pub fn is_tree_cached(&self) -> bool {
        self.merkle_tree.get().is_some()
    }

    /// Compare the header's Merkle root against the attached txids.
    pub fn validate_merkle_root(&self) -> Result<bool> {
        match self.tx_ids.as_deref() {
            Some(tx_ids) if !tx_ids.is_empty() => {}
            _ => return Err(Error::MissingLeafSet),
        }

        let computed = self.merkle_tree()?.root().reversed();
        if computed != self.header.merkle_root {
            warn!(expected = %self.header.merkle_root, computed = %computed, "merkle root mismatch");
            return Ok(false);
        }
        Ok(true)
    }

    /// Inclusion proof for `tx_id` (display order) against the header's root.
    ///
    /// The proof commits to the header's root, not the one computed from the
    /// attached txids, so a body the header never committed to yields a proof
    /// that fails `verify`.
    pub fn create_merkle_proof(&self, tx_id: &DisplayHash) -> Result<MerkleProof> {
        let proof = MerkleProof::generate(self.merkle_tree()?, tx_id)?;
        if proof.merkle_root != self.header.merkle_root {
            warn!(
                block = %self.header.hash(),
                expected = %self.header.merkle_root,
                computed = %proof.merkle_root,
                "proof built over a body the header does not commit to"
            );
        }
        Ok(MerkleProof {
            merkle_root: self.header.merkle_root,
            ..proof
        })
    }
}
