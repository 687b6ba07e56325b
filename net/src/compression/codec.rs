use std::fmt::{self, Debug};
use std::io;

use serde::{Deserialize, Serialize};

use crate::block_header::{BlockHeader, Hash, HeaderHasher};
use crate::compression::bitfield::{Bitfield, RecordFlags};
use crate::compression::context::CompressionContext;
use crate::decode::Buffer;
use crate::error::{DecodeResult, Error};
use crate::Encode;

/// What to do with a record whose version selector points past the end of
/// the version table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableReferencePolicy {
    /// Read a literal version in place of the missing entry and carry on
    Lenient,
    /// Reject the whole batch
    Strict,
}

impl Default for TableReferencePolicy {
    fn default() -> TableReferencePolicy {
        TableReferencePolicy::Lenient
    }
}

/// Turns single headers into DIP-0025 compressed records and back.
///
/// The codec itself holds no per-batch state; everything that changes from
/// record to record lives in the `CompressionContext` passed to each call.
#[derive(Clone, Copy)]
pub struct HeaderCodec {
    policy: TableReferencePolicy,
    hasher: HeaderHasher,
}

impl HeaderCodec {
    pub fn new(policy: TableReferencePolicy) -> HeaderCodec {
        HeaderCodec {
            policy: policy,
            hasher: BlockHeader::sha256d,
        }
    }

    pub fn with_hasher(policy: TableReferencePolicy, hasher: HeaderHasher) -> HeaderCodec {
        HeaderCodec {
            policy: policy,
            hasher: hasher,
        }
    }

    #[inline]
    pub fn policy(&self) -> TableReferencePolicy {
        self.policy
    }

    /// The header hash the contexts of this codec chain on
    pub fn hash(&self, header: &BlockHeader) -> Hash {
        (self.hasher)(header)
    }

    /// A fresh context that hashes headers the way this codec does
    pub fn context(&self) -> CompressionContext {
        CompressionContext::with_hasher(self.hasher)
    }

    /// Appends the compressed record of `header` to `buff`, returning its
    /// length.
    ///
    /// Updates the version table but does not advance `ctx`; the caller does
    /// that once the record is written.
    pub fn encode(&self,
                  header: &BlockHeader,
                  ctx: &mut CompressionContext,
                  is_first: bool,
                  mut buff: &mut Vec<u8>)
                  -> Result<usize, io::Error> {
        let start = buff.len();

        if is_first {
            ctx.save_version_as_most_recent(header.version);
            Bitfield::explicit().to_byte().encode(&mut buff)?;
            header.encode(&mut buff)?;
            return Ok(buff.len() - start);
        }

        let mut flags = RecordFlags::empty();

        let selector = match ctx.version_index(header.version) {
            Some(index) => {
                ctx.mark_version_as_most_recent(index);
                index as u8 + 1
            }
            None => {
                ctx.save_version_as_most_recent(header.version);
                0
            }
        };

        if header.prev_block != ctx.previous_block_hash() {
            flags |= RecordFlags::PREV_BLOCK_HASH;
        }

        let offset = header.timestamp as i64 - ctx.previous_timestamp() as i64;
        let short_offset = if offset >= i16::min_value() as i64 && offset <= i16::max_value() as i64 {
            Some(offset as i16)
        } else {
            flags |= RecordFlags::TIMESTAMP_FULL;
            None
        };

        if header.bits != ctx.previous_bits() {
            flags |= RecordFlags::NBITS_NEW;
        }

        let bitfield = Bitfield::new(selector, flags);
        bitfield.to_byte().encode(&mut buff)?;
        if bitfield.has_literal_version() {
            header.version.encode(&mut buff)?;
        }
        if bitfield.has_prev_block_hash() {
            header.prev_block.encode(&mut buff)?;
        }
        header.merkle_root.encode(&mut buff)?;
        match short_offset {
            Some(offset) => offset.encode(&mut buff)?,
            None => header.timestamp.encode(&mut buff)?,
        }
        if bitfield.has_bits() {
            header.bits.encode(&mut buff)?;
        }
        header.nonce.encode(&mut buff)?;

        let len = buff.len() - start;
        debug_assert_eq!(len, bitfield.record_len());
        trace!("encoded record bitfield={:#04x} len={}", bitfield.to_byte(), len);
        Ok(len)
    }

    /// Reads one compressed record from `buf`, returning the header and the
    /// number of bytes the record occupied.
    ///
    /// Like `encode`, this leaves advancing `ctx` to the caller.
    pub fn decode(&self,
                  buf: &mut Buffer<'_>,
                  ctx: &mut CompressionContext,
                  is_first: bool)
                  -> DecodeResult<(BlockHeader, usize)> {
        let start = buf.offset();
        let bitfield = Bitfield::from_byte(buf.read_u8("bitfield")?);

        // nothing precedes the first record, so there is nothing to derive from
        if is_first && !bitfield.is_explicit() {
            return Err(Error::CompressedFirstRecord { bitfield: bitfield.to_byte() });
        }

        let version = if bitfield.has_literal_version() {
            let version = buf.read_i32("version")?;
            ctx.save_version_as_most_recent(version);
            version
        } else {
            let index = (bitfield.version_selector() - 1) as usize;
            match ctx.version_at(index) {
                Some(version) => {
                    ctx.mark_version_as_most_recent(index);
                    version
                }
                None => self.missing_version(buf, ctx, index)?,
            }
        };

        let prev_block = if bitfield.has_prev_block_hash() {
            buf.read_hash("prev_block")?
        } else {
            ctx.previous_block_hash()
        };

        let merkle_root = buf.read_hash("merkle_root")?;

        let timestamp = if bitfield.has_full_timestamp() {
            buf.read_u32("timestamp")?
        } else {
            let offset = buf.read_i16("timestamp offset")?;
            ctx.previous_timestamp().wrapping_add(offset as i32 as u32)
        };

        let bits = if bitfield.has_bits() {
            buf.read_u32("bits")?
        } else {
            ctx.previous_bits()
        };

        let nonce = buf.read_u32("nonce")?;

        let consumed = buf.offset() - start;
        trace!("decoded record bitfield={:#04x} len={}", bitfield.to_byte(), consumed);

        Ok((BlockHeader {
            version: version,
            prev_block: prev_block,
            merkle_root: merkle_root,
            timestamp: timestamp,
            bits: bits,
            nonce: nonce,
        }, consumed))
    }

    fn missing_version(&self,
                       buf: &mut Buffer<'_>,
                       ctx: &mut CompressionContext,
                       index: usize)
                       -> DecodeResult<i32> {
        match self.policy {
            TableReferencePolicy::Strict => {
                Err(Error::InconsistentTableReference {
                    index: index,
                    table_len: ctx.table_len(),
                })
            }
            TableReferencePolicy::Lenient => {
                warn!("version table index {} out of range ({} entries), reading literal version",
                      index,
                      ctx.table_len());
                let version = buf.read_i32("version")?;
                ctx.save_version_as_most_recent(version);
                Ok(version)
            }
        }
    }
}

impl Debug for HeaderCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderCodec")
            .field("policy", &self.policy)
            .finish()
    }
}

impl Default for HeaderCodec {
    fn default() -> HeaderCodec {
        HeaderCodec::new(TableReferencePolicy::default())
    }
}
