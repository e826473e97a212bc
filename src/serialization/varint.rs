//! Canonical VarInt encoding/decoding
//!
//! Encoding rules:
//! - If value < 0xfd: single byte
//! - If value <= 0xffff: 0xfd prefix + 2 bytes (little-endian)
//! - If value <= 0xffffffff: 0xfe prefix + 4 bytes (little-endian)
//! - Otherwise: 0xff prefix + 8 bytes (little-endian)
//!
//! Decoding rejects any value that would have fit in a shorter form, so
//! every integer has exactly one accepted byte representation.

use super::primitives::{WireReader, WireWriter};
use crate::constants::*;
use crate::error::Result;

/// Smallest value a given discriminant may carry.
pub fn canonical_minimum(discriminant: u8) -> u64 {
    match discriminant {
        VARINT_U16 => 0xfd,
        VARINT_U32 => 0x10000,
        VARINT_U64 => 0x100000000,
        _ => 0,
    }
}

/// Serialized length of `value` as a varint
pub fn varint_size(value: u64) -> usize {
    if value < VARINT_U16 as u64 {
        1
    } else if value <= u16::MAX as u64 {
        3
    } else if value <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Encode a u64 value as a varint
///
/// # Examples
///
/// ```
/// use veil_codec::serialization::varint::encode_varint;
///
/// assert_eq!(encode_varint(252), vec![252]);
/// assert_eq!(encode_varint(253), vec![0xfd, 253, 0]);
/// assert_eq!(encode_varint(65536), vec![0xfe, 0, 0, 1, 0]);
/// ```
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut writer = WireWriter::new(Vec::with_capacity(varint_size(value)));
    // Writing into a Vec cannot fail.
    let _ = writer.write_var_int(value);
    writer.into_inner()
}

/// Decode a varint from the front of `data`
///
/// Returns the value and the number of bytes consumed.
///
/// # Examples
///
/// ```
/// use veil_codec::serialization::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[0xfd, 253, 0]).unwrap(), (253, 3));
/// assert!(decode_varint(&[0xfd, 0x01, 0x00]).is_err());
/// assert!(decode_varint(&[]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    let mut reader = WireReader::new(data);
    let value = reader.read_var_int("varint")?;
    Ok((value, reader.position() as usize))
}
