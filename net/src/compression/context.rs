use std::collections::VecDeque;
use std::fmt::{self, Debug};

use crate::block_header::{BlockHeader, Hash, HeaderHasher};

/// Number of distinct versions a context remembers
pub const VERSION_TABLE_SIZE: usize = 7;


/// The state threaded through the records of one headers2 batch.
///
/// Holds the version table (most recently used first) and a snapshot of the
/// previous header. A context belongs to exactly one batch or one connection
/// and is advanced once per header, after that header was encoded or decoded.
#[derive(Clone)]
pub struct CompressionContext {
    versions: VecDeque<i32>,
    previous_block_hash: Hash,
    previous_timestamp: u32,
    previous_bits: u32,
    hasher: HeaderHasher,
}

impl CompressionContext {
    pub fn new() -> CompressionContext {
        CompressionContext::with_hasher(BlockHeader::sha256d)
    }

    pub fn with_hasher(hasher: HeaderHasher) -> CompressionContext {
        CompressionContext {
            versions: VecDeque::with_capacity(VERSION_TABLE_SIZE + 1),
            previous_block_hash: [0; 32],
            previous_timestamp: 0,
            previous_bits: 0,
            hasher: hasher,
        }
    }

    /// Inserts a version at the front, dropping the least recently used one
    /// when the table overflows
    pub fn save_version_as_most_recent(&mut self, version: i32) {
        self.versions.push_front(version);
        self.versions.truncate(VERSION_TABLE_SIZE);
    }

    pub fn mark_version_as_most_recent(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        if let Some(version) = self.versions.remove(index) {
            self.versions.push_front(version);
        }
    }

    pub fn version_index(&self, version: i32) -> Option<usize> {
        self.versions.iter().position(|v| *v == version)
    }

    pub fn version_at(&self, index: usize) -> Option<i32> {
        self.versions.get(index).cloned()
    }

    #[inline]
    pub fn table_len(&self) -> usize {
        self.versions.len()
    }

    pub fn versions(&self) -> Vec<i32> {
        self.versions.iter().cloned().collect()
    }

    pub fn advance(&mut self, header: &BlockHeader) {
        self.previous_block_hash = (self.hasher)(header);
        self.previous_timestamp = header.timestamp;
        self.previous_bits = header.bits;
    }

    pub fn reset(&mut self) {
        self.versions.clear();
        self.previous_block_hash = [0; 32];
        self.previous_timestamp = 0;
        self.previous_bits = 0;
    }

    #[inline]
    pub fn previous_block_hash(&self) -> Hash {
        self.previous_block_hash
    }

    #[inline]
    pub fn previous_timestamp(&self) -> u32 {
        self.previous_timestamp
    }

    #[inline]
    pub fn previous_bits(&self) -> u32 {
        self.previous_bits
    }
}

impl Default for CompressionContext {
    fn default() -> CompressionContext {
        CompressionContext::new()
    }
}

impl Debug for CompressionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressionContext")
            .field("versions", &self.versions)
            .field("previous_timestamp", &self.previous_timestamp)
            .field("previous_bits", &format_args!("{:#010x}", self.previous_bits))
            .finish()
    }
}
