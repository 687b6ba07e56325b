use std::io;

use thiserror::Error;

/// Failures while turning a payload back into a message.
///
/// Every variant aborts the message it was raised for; no partially decoded
/// header list is handed out.
#[derive(Debug, Error)]
pub enum Error {
    #[error("batch declares {count} headers, maximum is {max}")]
    MalformedBatch { count: u64, max: usize },

    #[error("payload truncated reading {field} at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedPayload {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("record references version table index {index}, table holds {table_len}")]
    InconsistentTableReference { index: usize, table_len: usize },

    #[error("first record of a batch is compressed (bitfield {bitfield:#04x})")]
    CompressedFirstRecord { bitfield: u8 },

    #[error("locator carries {count} hashes, maximum is {max}")]
    OversizedLocator { count: usize, max: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type DecodeResult<T> = Result<T, Error>;
