// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Wire layout vectors: byte-exact reference encodings.
//
// Each test encodes a known deterministic value, verifies the exact bytes,
// then closes the loop: decode -> re-encode == original bytes. Any layout
// drift shows up here before it shows up on a peer.

use tagwire::{
    decode_scalar, decode_sequence, encode_scalar, encode_sequence, Extended, MemberStore, TypeTag,
};

/// Encode -> check bytes -> decode -> re-encode, byte for byte.
fn check_scalar_vector<T: tagwire::Scalar>(value: T, expected: &[u8]) {
    let bytes = encode_scalar(value);
    assert_eq!(bytes, expected, "encoding drifted from the reference bytes");

    let decoded: T = decode_scalar(&bytes[4..]).expect("reference payload decodes");
    let re_encoded = encode_scalar(decoded);
    assert_eq!(re_encoded, expected, "re-encode must reproduce the bytes");
}

#[test]
fn scalar_u16_vector() {
    check_scalar_vector(0x1234u16, &[0x01, 0x00, 0x00, 0x00, 0x34, 0x12]);
}

#[test]
fn scalar_i8_vector() {
    check_scalar_vector(-2i8, &[0x01, 0x00, 0x00, 0x00, 0xFE]);
}

#[test]
fn scalar_u32_vector() {
    check_scalar_vector(
        0xDEAD_BEEFu32,
        &[0x01, 0x00, 0x00, 0x00, 0xEF, 0xBE, 0xAD, 0xDE],
    );
}

#[test]
fn scalar_i64_vector() {
    check_scalar_vector(
        -1i64,
        &[0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    );
}

#[test]
fn scalar_f32_vector() {
    // 1.0f32 = 0x3F800000
    check_scalar_vector(1.0f32, &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3F]);
}

#[test]
fn scalar_f64_vector() {
    // -2.0f64 = 0xC000000000000000
    check_scalar_vector(
        -2.0f64,
        &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0],
    );
}

#[test]
fn extended_vector_pins_limb_order() {
    // low limb first, each limb little-endian
    let value = Extended::from_limbs(0x0807_0605_0403_0201, 0x100F_0E0D_0C0B_0A09);
    check_scalar_vector(
        value,
        &[
            0x01, 0x00, 0x00, 0x00, // count
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, // low limb
            0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10, // high limb
        ],
    );
}

#[test]
fn sequence_u8_vector() {
    let bytes = encode_sequence(&[1u8, 2, 3]);
    assert_eq!(bytes, [0x03, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03]);

    let mut decoded: Vec<u8> = Vec::new();
    decode_sequence(&bytes, &mut decoded).expect("reference sequence decodes");
    assert_eq!(encode_sequence(&decoded), bytes);
}

#[test]
fn sequence_u16_vector() {
    let bytes = encode_sequence(&[0x1234u16, 0xABCD]);
    assert_eq!(bytes, [0x02, 0x00, 0x00, 0x00, 0x34, 0x12, 0xCD, 0xAB]);
}

#[test]
fn sequence_empty_vector() {
    assert_eq!(encode_sequence::<f64>(&[]), [0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn sequence_count_reflects_encoded_elements_only() {
    // unsupported elements contribute no bytes and no count
    let bytes = encode_sequence(&[1u128, 2, 3]);
    assert_eq!(bytes, [0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn member_buffer_is_count_plus_payload() {
    let mut store = MemberStore::new();

    store.key("scalar").write(&0xAABBu16);
    let member = store.get("scalar").expect("written member exists");
    assert_eq!(member.tag(), TypeTag::U16);
    assert_eq!(member.bytes().len(), 4 + 2);
    assert_eq!(&member.bytes()[..4], &1u32.to_le_bytes());

    store.key("seq").write(&vec![7u64; 5]);
    let member = store.get("seq").expect("written member exists");
    assert_eq!(member.tag(), TypeTag::U64);
    assert_eq!(member.bytes().len(), 4 + 5 * 8);
    assert_eq!(&member.bytes()[..4], &5u32.to_le_bytes());
}

#[test]
fn scalar_and_sequence_share_physical_shape() {
    // a one-element sequence and a bare scalar produce identical buffers
    let mut store = MemberStore::new();
    store.key("as_scalar").write(&0x42u32);
    store.key("as_seq").write(&vec![0x42u32]);

    let scalar = store.get("as_scalar").expect("scalar member");
    let seq = store.get("as_seq").expect("sequence member");
    assert_eq!(scalar.bytes(), seq.bytes());
    assert_eq!(scalar.tag(), seq.tag());
}

#[test]
fn host_endianness_never_leaks() {
    // the encoded form is fully determined by the value, not the host:
    // spell out the expected bytes for a value whose byte order matters
    let bytes = encode_scalar(0x0102_0304u32);
    assert_eq!(&bytes[4..], &[0x04, 0x03, 0x02, 0x01]);

    let decoded: u32 = decode_scalar(&[0x04, 0x03, 0x02, 0x01]).expect("LE payload");
    assert_eq!(decoded, 0x0102_0304);
}
