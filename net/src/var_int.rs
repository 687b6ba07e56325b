use std::io;

use crate::decode::{Buffer, Decode};
use crate::error::DecodeResult;
use crate::Encode;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarInt {
    value: u64
}

impl VarInt {
    pub fn new(i: u64) -> VarInt {
        VarInt {
            value: i
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Bytes this value occupies on the wire
    pub fn len(&self) -> usize {
        match self.value {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x10000..=0xFFFFFFFF => 5,
            _ => 9,
        }
    }
}

impl Encode for VarInt {
    fn encode(&self, mut buff: &mut Vec<u8>) -> Result<(), io::Error> {
        if self.value < 0xFD {
            (self.value as u8).encode(&mut buff)?;
            return Ok(());
        }
        if self.value <= 0xFFFF {
            0xFDu8.encode(&mut buff)?;
            (self.value as u16).encode(&mut buff)?;
            return Ok(());
        }
        if self.value <= 0xFFFFFFFF {
            0xFEu8.encode(&mut buff)?;
            (self.value as u32).encode(&mut buff)?;
            return Ok(());
        }
        0xFFu8.encode(&mut buff)?;
        self.value.encode(&mut buff)?;
        Ok(())
    }
}

impl Decode for VarInt {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<VarInt> {
        let byte1 = buf.read_u8("compact size")?;
        let value = match byte1 {
            0xFF => buf.read_u64("compact size")?,
            0xFE => buf.read_u32("compact size")? as u64,
            0xFD => buf.read_u16("compact size")? as u64,
            _ => byte1 as u64,
        };
        Ok(VarInt::new(value))
    }
}
