use crate::decode::{Buffer, Decode};
use crate::error::DecodeResult;
use crate::message::BlockLocator;
use crate::Encode;


/// Asks for headers in the compressed `headers2` format.
///
/// Carries the same locator as `getheaders`, but is its own type so the two
/// requests can never be mistaken for each other.
#[derive(Debug, Default, Clone, PartialEq, Eq, Encode)]
pub struct GetHeaders2Message {
    pub locator: BlockLocator,
}

impl GetHeaders2Message {
    #[inline]
    pub fn len(&self) -> usize {
        self.locator.len()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        "getheaders2"
    }
}

impl Decode for GetHeaders2Message {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<GetHeaders2Message> {
        Ok(GetHeaders2Message { locator: BlockLocator::decode_checked(buf)? })
    }
}
