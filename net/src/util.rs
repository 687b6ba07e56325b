//! General utility functions

pub fn to_hex(buf: &[u8]) -> String {
    buf.iter()
        .map(|n| format!("{:02x}", n))
        .collect::<Vec<_>>()
        .concat()
}

/// Hashes are printed in reverse of their wire order
pub fn to_hex_rev(buf: &[u8]) -> String {
    buf.iter()
        .rev()
        .map(|n| format!("{:02x}", n))
        .collect::<Vec<_>>()
        .concat()
}

/// Parses hex text, skipping whitespace.
///
/// Returns `None` on a non-hex character or an odd number of digits.
pub fn from_hex(str: &str) -> Option<Vec<u8>> {
    // This may be an overestimate if there is any whitespace
    let mut b = Vec::with_capacity(str.len() / 2);
    let mut modulus = 0;
    let mut buf = 0u8;

    for byte in str.bytes() {
        buf <<= 4;

        match byte {
            b'A'..=b'F' => buf |= byte - b'A' + 10,
            b'a'..=b'f' => buf |= byte - b'a' + 10,
            b'0'..=b'9' => buf |= byte - b'0',
            b' ' | b'\r' | b'\n' | b'\t' => {
                buf >>= 4;
                continue
            }
            _ => return None,
        }

        modulus += 1;
        if modulus == 2 {
            modulus = 0;
            b.push(buf);
        }
    }

    if modulus != 0 {
        return None;
    }
    Some(b)
}

/// Useful to keep hashes in the same format as usually printed
pub fn hash_from_hex(str: &str) -> Option<[u8; 32]> {
    let mut v = from_hex(str)?;
    if v.len() != 32 {
        return None;
    }
    v.reverse();
    let mut result = [0; 32];
    result.copy_from_slice(&v);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_hex_with_whitespace() {
        assert_eq!(from_hex("0a 0B\n ff"), Some(vec![0x0a, 0x0b, 0xff]));
    }

    #[test]
    fn it_rejects_bad_hex() {
        assert_eq!(from_hex("0g"), None);
        assert_eq!(from_hex("abc"), None);
    }

    #[test]
    fn it_round_trips_a_reversed_hash() {
        let text = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
        let hash = hash_from_hex(text).unwrap();
        assert_eq!(hash[31], 0x00);
        assert_eq!(hash[0], 0x6f);
        assert_eq!(to_hex_rev(&hash), text);
        assert_eq!(to_hex(&hash[..2]), "6fe2");
    }
}
