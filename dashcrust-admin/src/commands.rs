use std::fs;
use std::io::Write;
use std::path::Path;

use dashcrust_net::util::{from_hex, to_hex_rev};
use dashcrust_net::{BlockHeader, Buffer, Decode, HeaderCodec, Headers2Message, BLOCK_HEADER_SIZE,
                    MAX_HEADERS};

use crate::error::AdminError;

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn chain(count: usize) -> Vec<BlockHeader> {
        let mut headers: Vec<BlockHeader> = vec![];
        for i in 0..count {
            let prev = headers.last().map(|h| h.sha256d()).unwrap_or([0; 32]);
            headers.push(BlockHeader {
                version: 0x20000000,
                prev_block: prev,
                merkle_root: [i as u8; 32],
                timestamp: 1_700_000_000 + 150 * i as u32,
                bits: 0x1b04864c,
                nonce: i as u32,
            });
        }
        headers
    }

    fn raw(headers: &[BlockHeader]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        for h in headers {
            f.write_all(&h.to_bytes()).unwrap();
        }
        f
    }

    #[test]
    fn it_parses_raw_headers() {
        let headers = chain(3);
        let bytes: Vec<u8> = headers.iter().flat_map(|h| h.to_bytes()).collect();
        assert_eq!(parse_raw_headers(&bytes).unwrap(), headers);
    }

    #[test]
    fn it_rejects_a_ragged_input() {
        match parse_raw_headers(&[0u8; 81]) {
            Err(AdminError::RaggedInput { len: 81 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn it_encodes_and_decodes_a_file() {
        let headers = chain(5);
        let input = raw(&headers);
        let output = NamedTempFile::new().unwrap();
        let codec = HeaderCodec::default();

        let size = encode_file(&codec, input.path(), output.path()).unwrap();
        assert_eq!(size, 1 + 81 + 4 * 39);

        let mut out = vec![];
        let count = decode_file(&codec, output.path(), false, &mut out).unwrap();
        assert_eq!(count, 5);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[4].starts_with(&format!("4 {}", to_hex_rev(&headers[4].sha256d()))));
    }

    #[test]
    fn it_decodes_hex_input() {
        let headers = chain(2);
        let mut payload = vec![];
        Headers2Message::new(headers.clone()).encode_with(&HeaderCodec::default(), &mut payload).unwrap();
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "{}", dashcrust_net::util::to_hex(&payload)).unwrap();

        let mut out = vec![];
        assert_eq!(decode_file(&HeaderCodec::default(), f.path(), true, &mut out).unwrap(), 2);
    }

    #[test]
    fn it_rejects_bad_hex() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "01zz").unwrap();
        match decode_file(&HeaderCodec::default(), f.path(), true, &mut Vec::<u8>::new()) {
            Err(AdminError::BadHex) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}

/// Splits a concatenation of 80 byte headers
pub fn parse_raw_headers(bytes: &[u8]) -> Result<Vec<BlockHeader>, AdminError> {
    if bytes.len() % BLOCK_HEADER_SIZE != 0 {
        return Err(AdminError::RaggedInput { len: bytes.len() });
    }
    let mut buf = Buffer::new(bytes);
    let mut headers = Vec::with_capacity(bytes.len() / BLOCK_HEADER_SIZE);
    while !buf.is_empty() {
        headers.push(BlockHeader::decode(&mut buf)?);
    }
    Ok(headers)
}

/// Compresses raw headers at `input` into a headers2 payload at `output`.
///
/// Returns the payload size.
pub fn encode_file(codec: &HeaderCodec, input: &Path, output: &Path) -> Result<usize, AdminError> {
    let bytes = fs::read(input)?;
    let headers = parse_raw_headers(&bytes)?;
    if headers.len() > MAX_HEADERS {
        return Err(AdminError::TooManyHeaders {
            count: headers.len(),
            max: MAX_HEADERS,
        });
    }

    let mut payload = vec![];
    Headers2Message::new(headers).encode_with(codec, &mut payload)?;
    fs::write(output, &payload)?;

    info!("compressed {} bytes of headers into {} bytes", bytes.len(), payload.len());
    Ok(payload.len())
}

/// Prints one line per header in the headers2 payload at `input`:
/// position within the batch, hash, version, timestamp, bits and nonce.
///
/// Returns the number of headers.
pub fn decode_file<W: Write>(codec: &HeaderCodec,
                             input: &Path,
                             hex: bool,
                             out: &mut W)
                             -> Result<usize, AdminError> {
    let payload = if hex {
        let text = fs::read_to_string(input)?;
        from_hex(&text).ok_or(AdminError::BadHex)?
    } else {
        fs::read(input)?
    };

    let message = Headers2Message::decode_with(&payload, codec)?;
    debug!("decoded {} headers from {} bytes", message.headers.len(), payload.len());

    for (i, header) in message.headers.iter().enumerate() {
        writeln!(out,
                 "{} {} version={:#010x} time={} bits={:#010x} nonce={}",
                 i,
                 to_hex_rev(&codec.hash(header)),
                 header.version,
                 header.timestamp,
                 header.bits,
                 header.nonce)?;
    }
    Ok(message.headers.len())
}
