use std::io;

use sha2::{Digest, Sha256};

use crate::decode::{Buffer, Decode};
use crate::error::DecodeResult;
use crate::Encode;

/// 32 byte hash in internal (wire) byte order
pub type Hash = [u8; 32];

/// Computes the identifying hash of a header.
///
/// Chains whose header hash is not double SHA-256 (Dash itself uses X11)
/// plug their own function into the codec.
pub type HeaderHasher = fn(&BlockHeader) -> Hash;

pub const BLOCK_HEADER_SIZE: usize = 80;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// 4	version	int32_t	Block version information (note, this is signed)
/// 32	prev_block	char[32]	The hash value of the previous block this particular block references
/// 32	merkle_root	char[32]	The reference to a Merkle tree collection which is a hash of all transactions related to this block
/// 4	timestamp	uint32_t	A timestamp recording when this block was created (Will overflow in 2106[2])
/// 4	bits	uint32_t	The calculated difficulty target being used for this block
/// 4	nonce	uint32_t	The nonce used to generate this block… to allow variations of the header and compute different hashes
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// The 80 byte consensus serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(BLOCK_HEADER_SIZE);
        let _ = self.encode(&mut v);
        v
    }

    pub fn sha256d(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }
}

impl Encode for BlockHeader {
    fn encode(&self, mut buff: &mut Vec<u8>) -> Result<(), io::Error> {
        self.version.encode(&mut buff)?;
        self.prev_block.encode(&mut buff)?;
        self.merkle_root.encode(&mut buff)?;
        self.timestamp.encode(&mut buff)?;
        self.bits.encode(&mut buff)?;
        self.nonce.encode(&mut buff)?;
        Ok(())
    }
}

impl Decode for BlockHeader {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<BlockHeader> {
        Ok(BlockHeader {
            version: buf.read_i32("version")?,
            prev_block: buf.read_hash("prev_block")?,
            merkle_root: buf.read_hash("merkle_root")?,
            timestamp: buf.read_u32("timestamp")?,
            bits: buf.read_u32("bits")?,
            nonce: buf.read_u32("nonce")?,
        })
    }
}

/// Hashes the input twice with SHA256
pub fn double_sha256(input: &[u8]) -> Hash {
    let first = Sha256::digest(input);
    let second = Sha256::digest(&first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}
