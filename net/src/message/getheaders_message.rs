use crate::block_header::Hash;
use crate::decode::{Buffer, Decode};
use crate::error::{DecodeResult, Error};
use crate::{Encode, VarInt};

/// Most locator hashes a peer may send in one request
pub const MAX_LOCATOR_HASHES: usize = 101;


/// The payload shared by `getheaders` and `getheaders2`: where the requester's
/// chain is, and where to stop.
#[derive(Debug, Default, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BlockLocator {
    pub version: u32,
    #[count]
    pub locator_hashes: Vec<Hash>,
    pub hash_stop: Hash,
}

impl BlockLocator {
    #[inline]
    pub fn len(&self) -> usize {
        4 + VarInt::new(self.locator_hashes.len() as u64).len() + (self.locator_hashes.len() * 32) + 32
    }

    /// Decodes a locator and enforces the hash limit
    pub fn decode_checked(buf: &mut Buffer<'_>) -> DecodeResult<BlockLocator> {
        let locator = BlockLocator::decode(buf)?;
        if locator.locator_hashes.len() > MAX_LOCATOR_HASHES {
            return Err(Error::OversizedLocator {
                count: locator.locator_hashes.len(),
                max: MAX_LOCATOR_HASHES,
            });
        }
        Ok(locator)
    }
}

/// Legacy request answered with uncompressed `headers`
#[derive(Debug, Default, Clone, PartialEq, Eq, Encode)]
pub struct GetHeadersMessage {
    pub locator: BlockLocator,
}

impl GetHeadersMessage {
    #[inline]
    pub fn len(&self) -> usize {
        self.locator.len()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        "getheaders"
    }
}

impl Decode for GetHeadersMessage {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<GetHeadersMessage> {
        Ok(GetHeadersMessage { locator: BlockLocator::decode_checked(buf)? })
    }
}
