
//! A buffer is used for decoding raw payload bytes
//!
//! It wraps the payload slice together with an explicit running offset, so a
//! caller can always tell how many bytes a decode step consumed, and every
//! truncation error can say where it happened.

use std::cmp;
use std::convert::TryFrom;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{DecodeResult, Error};


#[derive(Clone, Copy, Debug)]
pub struct Buffer<'a> {
    inner: &'a [u8],
    offset: usize,
}

/// Trait implemented for types that can read themselves from a Buffer
pub trait Decode: Sized {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<Self>;
}

impl<'a> Buffer<'a> {
    pub fn new(slice: &'a [u8]) -> Self {
        Buffer {
            inner: slice,
            offset: 0,
        }
    }

    /// Number of bytes consumed so far
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.inner.len() - self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Takes `count` bytes, or fails without consuming anything
    pub fn decode_bytes(&mut self, field: &'static str, count: usize) -> DecodeResult<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::TruncatedPayload {
                field: field,
                offset: self.offset,
                needed: count,
                available: self.remaining(),
            });
        }
        let result = &self.inner[self.offset..self.offset + count];
        self.offset += count;
        Ok(result)
    }

    pub fn read_u8(&mut self, field: &'static str) -> DecodeResult<u8> {
        Ok(self.decode_bytes(field, 1)?[0])
    }

    pub fn read_u16(&mut self, field: &'static str) -> DecodeResult<u16> {
        Ok(LittleEndian::read_u16(self.decode_bytes(field, 2)?))
    }

    pub fn read_i16(&mut self, field: &'static str) -> DecodeResult<i16> {
        Ok(LittleEndian::read_i16(self.decode_bytes(field, 2)?))
    }

    pub fn read_u32(&mut self, field: &'static str) -> DecodeResult<u32> {
        Ok(LittleEndian::read_u32(self.decode_bytes(field, 4)?))
    }

    pub fn read_i32(&mut self, field: &'static str) -> DecodeResult<i32> {
        Ok(LittleEndian::read_i32(self.decode_bytes(field, 4)?))
    }

    pub fn read_u64(&mut self, field: &'static str) -> DecodeResult<u64> {
        Ok(LittleEndian::read_u64(self.decode_bytes(field, 8)?))
    }

    pub fn read_hash(&mut self, field: &'static str) -> DecodeResult<[u8; 32]> {
        let mut result = [0u8; 32];
        result.copy_from_slice(self.decode_bytes(field, 32)?);
        Ok(result)
    }

    /// Decodes `count` consecutive elements.
    ///
    /// The declared count comes off the wire, so the allocation is bounded by
    /// what the remaining bytes could possibly hold.
    pub fn decode_list<T: Decode>(&mut self, count: u64) -> DecodeResult<Vec<T>> {
        let count = usize::try_from(count).unwrap_or(usize::max_value());
        let mut result = Vec::with_capacity(cmp::min(count, self.remaining()));
        for _ in 0..count {
            result.push(T::decode(self)?);
        }
        Ok(result)
    }
}

macro_rules! impl_decode {
    ($ty:ty, $method:ident, $name:expr) => {
        impl Decode for $ty {
            #[inline]
            fn decode(buf: &mut Buffer<'_>) -> DecodeResult<$ty> {
                buf.$method($name)
            }
        }
    };
}

impl_decode!(u8, read_u8, "u8");
impl_decode!(u16, read_u16, "u16");
impl_decode!(i16, read_i16, "i16");
impl_decode!(u32, read_u32, "u32");
impl_decode!(i32, read_i32, "i32");
impl_decode!(u64, read_u64, "u64");
impl_decode!([u8; 32], read_hash, "hash");
