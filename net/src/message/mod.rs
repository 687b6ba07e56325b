use std::io;

use crate::compression::HeaderCodec;
use crate::decode::{Buffer, Decode};
use crate::error::DecodeResult;
use crate::Encode;

mod getheaders_message;
mod getheaders2_message;
mod headers_message;
mod headers2_message;
mod sendheaders2_message;

pub use self::getheaders_message::{BlockLocator, GetHeadersMessage, MAX_LOCATOR_HASHES};
pub use self::getheaders2_message::GetHeaders2Message;
pub use self::headers_message::{HeadersMessage, MAX_LEGACY_HEADERS};
pub use self::headers2_message::{Headers2Message, MAX_HEADERS};
pub use self::sendheaders2_message::SendHeaders2Message;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_header::BlockHeader;
    use crate::compression::TableReferencePolicy;

    fn locator() -> BlockLocator {
        BlockLocator {
            version: 70230,
            locator_hashes: vec![[5; 32], [6; 32]],
            hash_stop: [0; 32],
        }
    }

    fn round_trip(message: Message) {
        let codec = HeaderCodec::default();
        let mut payload = vec![];
        message.encode_with(&codec, &mut payload).unwrap();
        let decoded = Message::decode(message.name(), &payload, &codec).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn it_dispatches_the_headers_family() {
        let header = BlockHeader {
            version: 0x20000000,
            prev_block: [1; 32],
            merkle_root: [2; 32],
            timestamp: 1_700_000_000,
            bits: 0x1b04864c,
            nonce: 3,
        };
        round_trip(Message::GetHeaders(GetHeadersMessage { locator: locator() }));
        round_trip(Message::GetHeaders2(GetHeaders2Message { locator: locator() }));
        round_trip(Message::Headers(HeadersMessage { headers: vec![header] }));
        round_trip(Message::Headers2(Headers2Message::new(vec![header])));
        round_trip(Message::SendHeaders);
        round_trip(Message::SendHeaders2(SendHeaders2Message));
    }

    #[test]
    fn it_keeps_unknown_commands_unparsed() {
        let codec = HeaderCodec::new(TableReferencePolicy::Strict);
        let m = Message::decode("mnlistdiff", &[1, 2, 3], &codec).unwrap();
        assert_eq!(m, Message::Unparsed("mnlistdiff".into(), vec![1, 2, 3]));
        assert_eq!(m.name(), "mnlistdiff");
    }

    #[test]
    fn it_tells_the_two_requests_apart_by_command() {
        let codec = HeaderCodec::default();
        let mut payload = vec![];
        locator().encode(&mut payload).unwrap();
        let legacy = Message::decode("getheaders", &payload, &codec).unwrap();
        let compressed = Message::decode("getheaders2", &payload, &codec).unwrap();
        assert!(legacy != compressed);
    }
}

/// The header relay messages this crate understands.
///
/// Anything else is kept as `Unparsed` for the caller to deal with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GetHeaders(GetHeadersMessage),
    Headers(HeadersMessage),
    SendHeaders,
    GetHeaders2(GetHeaders2Message),
    Headers2(Headers2Message),
    SendHeaders2(SendHeaders2Message),
    Unparsed(String, Vec<u8>),
}

impl Message {
    pub fn name(&self) -> &str {
        match *self {
            Message::GetHeaders(ref m) => m.name(),
            Message::Headers(ref m) => m.name(),
            Message::SendHeaders => "sendheaders",
            Message::GetHeaders2(ref m) => m.name(),
            Message::Headers2(ref m) => m.name(),
            Message::SendHeaders2(ref m) => m.name(),
            Message::Unparsed(ref name, _) => name,
        }
    }

    /// Writes the payload; framing is left to the connection
    pub fn encode_with(&self, codec: &HeaderCodec, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        match *self {
            Message::GetHeaders(ref m) => m.encode(buff),
            Message::Headers(ref m) => m.encode(buff),
            Message::SendHeaders => Ok(()),
            Message::GetHeaders2(ref m) => m.encode(buff),
            Message::Headers2(ref m) => m.encode_with(codec, buff),
            Message::SendHeaders2(ref m) => m.encode(buff),
            Message::Unparsed(_, ref body) => {
                buff.extend_from_slice(body);
                Ok(())
            }
        }
    }

    /// Decodes an already delimited payload received under `command`
    pub fn decode(command: &str, payload: &[u8], codec: &HeaderCodec) -> DecodeResult<Message> {
        let message = match command {
            "getheaders" => Message::GetHeaders(GetHeadersMessage::decode(&mut Buffer::new(payload))?),
            "getheaders2" => {
                Message::GetHeaders2(GetHeaders2Message::decode(&mut Buffer::new(payload))?)
            }
            "headers" => Message::Headers(HeadersMessage::decode(&mut Buffer::new(payload))?),
            "headers2" => Message::Headers2(Headers2Message::decode_with(payload, codec)?),
            "sendheaders" => Message::SendHeaders,
            "sendheaders2" => Message::SendHeaders2(SendHeaders2Message),
            _ => {
                trace!("Unparsed message: {:?} ({} bytes)", command, payload.len());
                Message::Unparsed(command.into(), payload.into())
            }
        };
        Ok(message)
    }
}

impl Encode for Message {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        self.encode_with(&HeaderCodec::default(), buff)
    }
}
