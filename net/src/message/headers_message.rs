use std::io;

use crate::block_header::{BlockHeader, BLOCK_HEADER_SIZE};
use crate::decode::{Buffer, Decode};
use crate::error::{DecodeResult, Error};
use crate::{Encode, VarInt};

/// Most headers in one uncompressed `headers` message
pub const MAX_LEGACY_HEADERS: usize = 2000;


/// Uncompressed headers, each followed by a transaction count that is always
/// zero
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadersMessage {
    pub headers: Vec<BlockHeader>,
}

impl HeadersMessage {
    #[inline]
    pub fn len(&self) -> usize {
        VarInt::new(self.headers.len() as u64).len() + ((BLOCK_HEADER_SIZE + 1) * self.headers.len())
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        "headers"
    }
}

impl Encode for HeadersMessage {
    fn encode(&self, mut buff: &mut Vec<u8>) -> Result<(), io::Error> {
        VarInt::new(self.headers.len() as u64).encode(&mut buff)?;
        for header in &self.headers {
            header.encode(&mut buff)?;
            VarInt::new(0).encode(&mut buff)?;
        }
        Ok(())
    }
}

impl Decode for HeadersMessage {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<HeadersMessage> {
        let count = VarInt::decode(buf)?.value();
        if count > MAX_LEGACY_HEADERS as u64 {
            return Err(Error::MalformedBatch {
                count: count,
                max: MAX_LEGACY_HEADERS,
            });
        }
        let mut headers = Vec::with_capacity(count as usize);
        for _ in 0..count {
            headers.push(BlockHeader::decode(buf)?);
            // transaction count, carried but meaningless here
            VarInt::decode(buf)?;
        }
        Ok(HeadersMessage { headers: headers })
    }
}
