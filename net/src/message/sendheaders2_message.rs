use std::io;

use crate::Encode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_implements_types_required_for_protocol() {
        let m = SendHeaders2Message;
        assert_eq!(m.name(), "sendheaders2");
        assert_eq!(m.len(), 0);
        let mut encoded = vec![];
        m.encode(&mut encoded).unwrap();
        assert!(encoded.is_empty());
    }
}

/// Announces once per connection that new headers should be relayed to us
/// as `headers2` rather than `headers` or `inv`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SendHeaders2Message;

impl SendHeaders2Message {
    #[inline]
    pub fn len(&self) -> usize {
        0
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        "sendheaders2"
    }
}

impl Encode for SendHeaders2Message {
    fn encode(&self, _buff: &mut Vec<u8>) -> Result<(), io::Error> {
        Ok(())
    }
}
