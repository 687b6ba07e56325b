use std::io;

use byteorder::{LittleEndian, WriteBytesExt};

#[cfg(test)]
mod tests {
    use super::Encode;

    #[test]
    fn it_encodes_a_u8() {
        let mut actual = vec![];
        let _ = 23u8.encode(&mut actual);
        assert_eq!(vec![23], actual);
    }

    #[test]
    fn it_encodes_a_u16() {
        let mut actual = vec![];
        let _ = 23u16.encode(&mut actual);
        assert_eq!(vec![23, 0], actual);
    }

    #[test]
    fn it_encodes_a_u32() {
        let mut actual = vec![];
        let _ = 23u32.encode(&mut actual);
        assert_eq!(vec![23, 0, 0, 0], actual);
    }

    #[test]
    fn it_encodes_a_u64() {
        let mut actual = vec![];
        let _ = 23u64.encode(&mut actual);
        assert_eq!(vec![23, 0, 0, 0, 0, 0, 0, 0], actual);
    }

    #[test]
    fn it_encodes_a_negative_i16() {
        let mut actual = vec![];
        let _ = (-2i16).encode(&mut actual);
        assert_eq!(vec![0xFE, 0xFF], actual);
    }

    #[test]
    fn it_encodes_a_i32() {
        let mut actual = vec![];
        let _ = 0x2000_0000i32.encode(&mut actual);
        assert_eq!(vec![0, 0, 0, 0x20], actual);
    }

    #[test]
    fn it_encodes_a_hash_verbatim() {
        let mut hash = [0u8; 32];
        hash[0] = 0x6f;
        hash[31] = 0x01;
        let mut actual = vec![];
        let _ = hash.encode(&mut actual);
        assert_eq!(actual.len(), 32);
        assert_eq!(actual[0], 0x6f);
        assert_eq!(actual[31], 0x01);
    }

    #[test]
    fn it_encodes_a_vec_without_a_count() {
        let mut actual = vec![];
        let _ = vec![1u16, 2u16].encode(&mut actual);
        assert_eq!(vec![1, 0, 2, 0], actual);
    }
}


pub trait Encode {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error>;
}

impl Encode for u8 {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        buff.write_u8(*self)
    }
}

impl Encode for u16 {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        buff.write_u16::<LittleEndian>(*self)
    }
}

impl Encode for u32 {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        buff.write_u32::<LittleEndian>(*self)
    }
}

impl Encode for u64 {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        buff.write_u64::<LittleEndian>(*self)
    }
}

impl Encode for i16 {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        buff.write_i16::<LittleEndian>(*self)
    }
}

impl Encode for i32 {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        buff.write_i32::<LittleEndian>(*self)
    }
}

/// Hashes go out in internal byte order, the reverse of how they are displayed
impl Encode for [u8; 32] {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        buff.extend_from_slice(&self[..]);
        Ok(())
    }
}

/// Elements only; a length prefix is written by `#[count]` on the field
impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, buff: &mut Vec<u8>) -> Result<(), io::Error> {
        for item in self {
            item.encode(buff)?;
        }
        Ok(())
    }
}
