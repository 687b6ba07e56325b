use std::io;

use crate::block_header::BlockHeader;
use crate::compression::{CompressionContext, HeaderCodec};
use crate::decode::{Buffer, Decode};
use crate::error::{DecodeResult, Error};
use crate::{Encode, VarInt};

/// Most headers in one `headers2` message
pub const MAX_HEADERS: usize = 8000;


/// A batch of DIP-0025 compressed headers.
///
/// The wire form is a `VarInt` count followed by that many variable length
/// records. Every message is compressed against its own fresh context, so
/// the first record always stands on its own.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers2Message {
    pub headers: Vec<BlockHeader>,
}

impl Headers2Message {
    pub fn new(headers: Vec<BlockHeader>) -> Headers2Message {
        Headers2Message { headers: headers }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        "headers2"
    }

    pub fn encode_with(&self, codec: &HeaderCodec, mut buff: &mut Vec<u8>) -> Result<(), io::Error> {
        if self.headers.len() > MAX_HEADERS {
            return Err(io::Error::new(io::ErrorKind::InvalidInput,
                                      format!("{} headers do not fit in one headers2 message",
                                              self.headers.len())));
        }
        let start = buff.len();
        VarInt::new(self.headers.len() as u64).encode(&mut buff)?;

        let mut ctx = codec.context();
        for (i, header) in self.headers.iter().enumerate() {
            codec.encode(header, &mut ctx, i == 0, &mut buff)?;
            ctx.advance(header);
        }
        debug!("encoded {} headers into {} bytes", self.headers.len(), buff.len() - start);
        Ok(())
    }

    /// Decodes a complete payload against a fresh context
    pub fn decode_with(payload: &[u8], codec: &HeaderCodec) -> DecodeResult<Headers2Message> {
        let mut ctx = codec.context();
        Headers2Message::decode_in(payload, codec, &mut ctx)
    }

    /// Decodes a complete payload in a context owned by the caller.
    ///
    /// The context is replaced by a fresh one from `codec` first, so it always
    /// hashes headers the way the codec does.
    ///
    /// Bytes left over after the declared records are ignored.
    pub fn decode_in(payload: &[u8],
                     codec: &HeaderCodec,
                     ctx: &mut CompressionContext)
                     -> DecodeResult<Headers2Message> {
        let mut buf = Buffer::new(payload);
        let message = Headers2Message::decode_records(&mut buf, codec, ctx)?;
        if !buf.is_empty() {
            debug!("ignoring {} bytes after {} headers2 records", buf.remaining(), message.headers.len());
        }
        Ok(message)
    }

    fn decode_records(buf: &mut Buffer<'_>,
                      codec: &HeaderCodec,
                      ctx: &mut CompressionContext)
                      -> DecodeResult<Headers2Message> {
        let count = VarInt::decode(buf)?.value();
        if count > MAX_HEADERS as u64 {
            return Err(Error::MalformedBatch {
                count: count,
                max: MAX_HEADERS,
            });
        }

        *ctx = codec.context();
        let mut offset = buf.offset();
        let mut headers = Vec::with_capacity(count as usize);
        for i in 0..count {
            let (header, consumed) = codec.decode(buf, ctx, i == 0)?;
            trace!("headers2 record {} at offset {}: {} bytes", i, offset, consumed);
            offset += consumed;
            ctx.advance(&header);
            headers.push(header);
        }
        debug!("decoded {} headers from {} bytes", headers.len(), offset);
        Ok(Headers2Message { headers: headers })
    }
}

impl Encode for Headers2Message {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        self.encode_with(&HeaderCodec::default(), buff)
    }
}

impl Decode for Headers2Message {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<Headers2Message> {
        let codec = HeaderCodec::default();
        let mut ctx = codec.context();
        Headers2Message::decode_records(buf, &codec, &mut ctx)
    }
}
