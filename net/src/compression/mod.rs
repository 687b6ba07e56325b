//! DIP-0025 compressed block headers
//!
//! A header is turned into a record of 39 to 81 bytes by leaving out what the
//! receiver can reconstruct from the previous header of the same batch: a
//! version it has seen recently, the previous block hash, the high bytes of
//! the timestamp and an unchanged difficulty target.

mod bitfield;
mod codec;
mod context;

pub use self::bitfield::{Bitfield, RecordFlags};
pub use self::codec::{HeaderCodec, TableReferencePolicy};
pub use self::context::{CompressionContext, VERSION_TABLE_SIZE};
