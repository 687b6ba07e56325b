#[macro_use]
extern crate encode_derive;
extern crate dashcrust_net;

use dashcrust_net::{Buffer, Decode, DecodeResult, Encode, Error, VarInt};

#[derive(Debug, PartialEq, Encode, Decode)]
struct TestStructWithCount {
    version: u32,
    #[count]
    data: Vec<u8>,
}

#[derive(Debug, PartialEq, Encode, Decode)]
struct TestStruct {
    version: u32,
    data: [u8; 32],
}

#[derive(Debug, PartialEq, Encode, Decode)]
struct TestNewtype(TestStruct);

#[test]
fn it_encodes() {
    let t = TestStruct {
        version: 70230,
        data: [0x00; 32],
    };
    let mut encoded = vec![];
    let _ = t.encode(&mut encoded);
    assert_eq!(encoded, vec![
        // version
        0x56, 0x12, 0x01, 0x00,
        // data
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn it_encodes_with_count() {
    let t = TestStructWithCount {
        version: 1,
        data: vec![0x07],
    };
    let mut encoded = vec![];
    let _ = t.encode(&mut encoded);
    assert_eq!(encoded, vec![
        // version
        1, 0, 0, 0,
        // len
        1,
        // data
        7]);
}

#[test]
fn it_decodes_with_count() {
    let input = [2, 0, 0, 0, 3, 9, 8, 7];
    let mut buf = Buffer::new(&input);
    let t = TestStructWithCount::decode(&mut buf).unwrap();
    assert_eq!(t, TestStructWithCount { version: 2, data: vec![9, 8, 7] });
    assert_eq!(buf.offset(), input.len());
}

#[test]
fn it_decodes_a_newtype() {
    let mut input = vec![5, 0, 0, 0];
    input.extend_from_slice(&[0xAB; 32]);
    let mut buf = Buffer::new(&input);
    let t = TestNewtype::decode(&mut buf).unwrap();
    assert_eq!(t.0.version, 5);
    assert_eq!(t.0.data, [0xAB; 32]);
}

#[test]
fn it_rejects_a_short_count() {
    // declares three elements, carries two
    let input = [2, 0, 0, 0, 3, 9, 8];
    let mut buf = Buffer::new(&input);
    match TestStructWithCount::decode(&mut buf) {
        Err(Error::TruncatedPayload { offset, .. }) => assert_eq!(offset, 7),
        other => panic!("unexpected {:?}", other),
    }
}
