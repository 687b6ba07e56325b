use crate::block_header::BlockHeader;
use crate::compression::{CompressionContext, HeaderCodec};
use crate::error::DecodeResult;
use crate::message::{BlockLocator, GetHeaders2Message, GetHeadersMessage, Headers2Message,
                     HeadersMessage, Message, SendHeaders2Message};
use crate::services::Services;

/// How new headers should be pushed to a peer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayFormat {
    /// The peer sent nothing; announce with `inv` instead
    Inventory,
    Headers,
    Headers2,
}

/// Header relay state of one connection.
///
/// Header sync follows the following sequence once the handshake is done:
/// --> SendHeaders2 (or SendHeaders)
/// <-- SendHeaders2 (or SendHeaders)
/// --> GetHeaders2 (or GetHeaders)
/// <-- Headers2 (or Headers)
///
/// The session owns the connection's `CompressionContext`; it is reset at
/// the start of every `headers2` batch.
#[derive(Debug)]
pub struct HeadersSession {
    codec: HeaderCodec,
    ctx: CompressionContext,
    local: Services,
    remote: Services,
    send_headers: bool,
    send_headers2: bool,
}

impl HeadersSession {
    pub fn new(codec: HeaderCodec, local: Services, remote: Services) -> HeadersSession {
        HeadersSession {
            ctx: codec.context(),
            codec: codec,
            local: local,
            remote: remote,
            send_headers: false,
            send_headers2: false,
        }
    }

    /// Both ends advertise `NODE_HEADERS_COMPRESSED`
    pub fn compressed_headers_supported(&self) -> bool {
        self.local.headers_compressed() && self.remote.headers_compressed()
    }

    /// The capability announcement to send after the handshake
    pub fn announcement(&self) -> Message {
        if self.compressed_headers_supported() {
            Message::SendHeaders2(SendHeaders2Message)
        } else {
            Message::SendHeaders
        }
    }

    pub fn headers_request(&self, locator: BlockLocator) -> Message {
        if self.compressed_headers_supported() {
            Message::GetHeaders2(GetHeaders2Message { locator: locator })
        } else {
            Message::GetHeaders(GetHeadersMessage { locator: locator })
        }
    }

    /// Records relay preferences announced by the peer
    pub fn on_message(&mut self, message: &Message) {
        match *message {
            Message::SendHeaders => {
                self.send_headers = true;
            }
            Message::SendHeaders2(_) => {
                if !self.compressed_headers_supported() {
                    warn!("peer sent sendheaders2 without compressed headers negotiated");
                }
                self.send_headers2 = true;
            }
            _ => {}
        }
    }

    pub fn relay_format(&self) -> RelayFormat {
        if self.send_headers2 && self.compressed_headers_supported() {
            RelayFormat::Headers2
        } else if self.send_headers || self.send_headers2 {
            RelayFormat::Headers
        } else {
            RelayFormat::Inventory
        }
    }

    /// Wraps new headers for relay, or `None` when they have to be announced
    /// by inventory
    pub fn relay(&self, headers: Vec<BlockHeader>) -> Option<Message> {
        match self.relay_format() {
            RelayFormat::Headers2 => Some(Message::Headers2(Headers2Message::new(headers))),
            RelayFormat::Headers => Some(Message::Headers(HeadersMessage { headers: headers })),
            RelayFormat::Inventory => None,
        }
    }

    /// Decodes a received `headers` or `headers2` payload.
    ///
    /// Any other command yields an empty list.
    pub fn receive_headers(&mut self, command: &str, payload: &[u8]) -> DecodeResult<Vec<BlockHeader>> {
        match command {
            "headers2" => {
                if !self.compressed_headers_supported() {
                    warn!("received headers2 without compressed headers negotiated");
                }
                let message = Headers2Message::decode_in(payload, &self.codec, &mut self.ctx)?;
                Ok(message.headers)
            }
            _ => match Message::decode(command, payload, &self.codec)? {
                Message::Headers(m) => Ok(m.headers),
                _ => Ok(vec![]),
            },
        }
    }

    pub fn context(&self) -> &CompressionContext {
        &self.ctx
    }
}
