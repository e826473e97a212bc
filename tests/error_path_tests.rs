//! Tests for malformed and hostile inputs

use veil_codec::serialization::*;
use veil_codec::*;

/// version 1, given flag byte, lock time 0
fn prefix(flag: u8) -> Vec<u8> {
    vec![0x01, 0x00, flag, 0x00, 0x00, 0x00, 0x00]
}

fn minimal_input() -> Vec<u8> {
    let mut bytes = vec![0u8; 32];
    bytes.extend_from_slice(&[0, 0, 0, 0]); // index
    bytes.push(0x00); // empty script
    bytes.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);
    bytes
}

fn minimal_output(tag: u8) -> Vec<u8> {
    let mut bytes = vec![tag];
    bytes.extend_from_slice(&1i64.to_le_bytes());
    bytes.push(0x00);
    bytes
}

#[test]
fn test_witness_marker_0x02_rejected() {
    let mut bytes = prefix(0x01);
    bytes.push(0x00); // zero inputs
    bytes.push(0x02); // unsupported marker
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_input());

    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::BadWitnessMarker(0x02)));
}

#[test]
fn test_witness_marker_0x01_rereads_input_count() {
    let mut bytes = prefix(0x01);
    bytes.push(0x00);
    bytes.push(0x01);
    bytes.push(0x01); // real input count
    bytes.extend_from_slice(&minimal_input());
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_output(0x00));
    bytes.push(0x00); // empty witness stack for the one input

    let tx = deserialize_transaction(&bytes).unwrap();
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.outputs.len(), 1);
    assert!(tx.inputs[0].witness.is_empty());
}

#[test]
fn test_zero_inputs_without_flag_needs_no_marker() {
    let mut bytes = prefix(0x00);
    bytes.push(0x00); // zero inputs, no marker follows
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_output(0x00));

    let tx = deserialize_transaction(&bytes).unwrap();
    assert!(tx.inputs.is_empty());
    assert_eq!(tx.outputs.len(), 1);
}

#[test]
fn test_any_nonzero_flag_byte_means_segwit() {
    let mut bytes = prefix(0x7f);
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_input());
    bytes.push(0x00); // no outputs
    // witness section is required because the flag is truthy
    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::Truncated { field: "witness item count", .. }));

    bytes.push(0x00);
    assert!(deserialize_transaction(&bytes).is_ok());
}

#[test]
fn test_input_count_over_limit_rejected_before_allocation() {
    let mut bytes = prefix(0x00);
    // 0xffffffff inputs claimed, nothing else present
    bytes.extend_from_slice(&[0xfe, 0xff, 0xff, 0xff, 0xff]);

    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(err.is_resource_limit());
    match err {
        CodecError::CountOverLimit { kind, count, max } => {
            assert_eq!(kind, CountKind::Inputs);
            assert_eq!(count, 0xffffffff);
            assert_eq!(max, MAX_TX_IN_PER_MESSAGE);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_input_count_at_limit_is_truncation_not_limit() {
    let mut bytes = prefix(0x00);
    let mut count = vec![];
    let max = MAX_TX_IN_PER_MESSAGE as u32;
    count.push(0xfe);
    count.extend_from_slice(&max.to_le_bytes());
    bytes.extend_from_slice(&count);

    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(err.is_truncation());
}

#[test]
fn test_output_count_over_limit() {
    let mut bytes = prefix(0x00);
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_input());
    bytes.extend_from_slice(&[0xff, 0, 0, 0, 0, 1, 0, 0, 0]);

    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(matches!(
        err,
        CodecError::CountOverLimit { kind: CountKind::Outputs, count: 0x100000000, .. }
    ));
}

#[test]
fn test_witness_item_count_over_configured_limit() {
    let config = CodecConfig {
        limits: DecodeLimits {
            max_witness_items_per_input: 4,
            ..DecodeLimits::default()
        },
        ..CodecConfig::default()
    };

    let mut bytes = prefix(0x01);
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_input());
    bytes.push(0x00);
    bytes.push(0x05); // five witness items claimed

    let err = deserialize_transaction_with_config(&bytes, &config).unwrap_err();
    assert!(matches!(
        err,
        CodecError::CountOverLimit { kind: CountKind::WitnessItems, count: 5, max: 4 }
    ));
}

#[test]
fn test_tight_payload_limit_caps_inputs() {
    let config = CodecConfig {
        limits: DecodeLimits {
            max_message_payload: 82,
            ..DecodeLimits::default()
        },
        ..CodecConfig::default()
    };
    // 82 / 41 + 1 = 3 inputs allowed
    let mut bytes = prefix(0x00);
    bytes.push(0x04);
    let err = deserialize_transaction_with_config(&bytes, &config).unwrap_err();
    assert!(matches!(err, CodecError::CountOverLimit { count: 4, max: 3, .. }));
}

#[test]
fn test_non_canonical_input_count() {
    let mut bytes = prefix(0x00);
    bytes.extend_from_slice(&[0xfd, 0x01, 0x00]);

    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(matches!(
        err,
        CodecError::NonCanonicalVarInt { field: "input count", value: 1, .. }
    ));
}

#[test]
fn test_non_canonical_script_length() {
    let mut bytes = prefix(0x00);
    bytes.push(0x01);
    bytes.extend_from_slice(&[0u8; 36]);
    bytes.extend_from_slice(&[0xfe, 0x10, 0x00, 0x00, 0x00]);

    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(matches!(
        err,
        CodecError::NonCanonicalVarInt { field: "signature script", discriminant: 0xfe, .. }
    ));
}

#[test]
fn test_huge_script_length_is_truncation() {
    let mut bytes = prefix(0x00);
    bytes.push(0x01);
    bytes.extend_from_slice(&[0u8; 36]);
    bytes.extend_from_slice(&[0xff, 0, 0, 0, 0, 0, 0, 0, 0x10]);

    let err = deserialize_transaction(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::Truncated { field: "signature script", .. }));
}

#[test]
fn test_truncation_at_every_prefix_length() {
    let mut bytes = prefix(0x00);
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_input());
    bytes.push(0x01);
    bytes.extend_from_slice(&minimal_output(0x01));
    assert!(deserialize_transaction(&bytes).is_ok());

    for len in 0..bytes.len() {
        let err = deserialize_transaction(&bytes[..len]).unwrap_err();
        assert!(err.is_truncation(), "prefix of {len} bytes gave {err:?}");
    }
}

#[test]
fn test_invalid_hex_input() {
    let codec = VeilCodec::new();
    assert!(matches!(codec.decode_transaction_hex("zz"), Err(CodecError::Hex(_))));
    assert!(matches!(codec.decode_block_hex("abc"), Err(CodecError::Hex(_))));
}
