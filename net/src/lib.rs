//! Dash header relay messages, including the DIP-0025 compressed
//! `getheaders2` / `headers2` / `sendheaders2` family.
//!
//! This crate only deals with payloads: framing (magic, command, length and
//! checksum) belongs to the connection that hands payloads in and out.

#[macro_use]
extern crate encode_derive;
#[macro_use]
extern crate log;

mod block_header;
pub mod compression;
mod decode;
mod encode;
mod error;
mod message;
mod services;
mod session;
pub mod util;
mod var_int;

pub use block_header::{double_sha256, BlockHeader, Hash, HeaderHasher, BLOCK_HEADER_SIZE};
pub use compression::{CompressionContext, HeaderCodec, TableReferencePolicy};
pub use decode::{Buffer, Decode};
pub use encode::Encode;
pub use error::{DecodeResult, Error};
pub use message::*;
pub use services::Services;
pub use session::{HeadersSession, RelayFormat};
pub use var_int::VarInt;
