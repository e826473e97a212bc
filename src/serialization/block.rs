//! Block wire format serialization/deserialization
//!
//! Header layout (144 bytes, little-endian integers):
//! - Version (4)
//! - Previous block hash (32)
//! - Merkle root (32)
//! - Witness merkle root (32)
//! - Timestamp (4)
//! - Bits (4)
//! - Nonce (4)
//! - Accumulator checkpoint hash (32)
//!
//! followed by a VarInt transaction count and that many transactions.

use super::primitives::{WireReader, WireWriter};
use super::transaction::{decode_transaction, encode_transaction, preallocation};
use crate::config::{CodecConfig, DecodeLimits};
use crate::constants::BLOCK_HEADER_SIZE;
use crate::error::{CodecError, Result};
use crate::types::*;
use std::io::{Read, Write};
use tracing::{debug, trace};

pub fn decode_block_header<R: Read>(reader: &mut WireReader<R>) -> Result<BlockHeader> {
    Ok(BlockHeader {
        version: reader.read_u32("block version")? as i32,
        prev_block_hash: reader.read_hash("previous block hash")?,
        merkle_root: reader.read_hash("merkle root")?,
        witness_merkle_root: reader.read_hash("witness merkle root")?,
        timestamp: reader.read_u32("timestamp")?,
        bits: reader.read_u32("bits")?,
        nonce: reader.read_u32("nonce")?,
        accumulator_hash: reader.read_hash("accumulator hash")?,
    })
}

pub fn encode_block_header<W: Write>(header: &BlockHeader, writer: &mut WireWriter<W>) -> Result<()> {
    writer.write_u32(header.version as u32)?;
    writer.write_hash(&header.prev_block_hash)?;
    writer.write_hash(&header.merkle_root)?;
    writer.write_hash(&header.witness_merkle_root)?;
    writer.write_u32(header.timestamp)?;
    writer.write_u32(header.bits)?;
    writer.write_u32(header.nonce)?;
    writer.write_hash(&header.accumulator_hash)
}

pub fn serialize_block_header(header: &BlockHeader) -> Vec<u8> {
    let mut writer = WireWriter::new(Vec::with_capacity(BLOCK_HEADER_SIZE));
    // Writing into a Vec cannot fail.
    let _ = encode_block_header(header, &mut writer);
    writer.into_inner()
}

pub fn deserialize_block_header(data: &[u8]) -> Result<BlockHeader> {
    decode_block_header(&mut WireReader::new(data))
}

/// Decode a block: header, transaction count, then each transaction in order.
///
/// The transaction count itself is not bounded; a bogus count simply runs
/// out of bytes. A failing transaction aborts the block and is reported
/// with its index.
pub fn decode_block<R: Read>(reader: &mut WireReader<R>, limits: &DecodeLimits) -> Result<Block> {
    let header = decode_block_header(reader)?;
    let tx_count = reader.read_var_int("transaction count")?;

    let mut transactions = Vec::with_capacity(preallocation(tx_count));
    for index in 0..tx_count {
        let tx = decode_transaction(reader, limits).map_err(|source| {
            debug!(index, error = %source, "block transaction failed to decode");
            CodecError::Transaction {
                index,
                source: Box::new(source),
            }
        })?;
        transactions.push(tx);
    }

    trace!(transactions = transactions.len(), "decoded block");
    Ok(Block { header, transactions })
}

/// Deserialize a block with default limits. Trailing bytes are ignored.
pub fn deserialize_block(data: &[u8]) -> Result<Block> {
    deserialize_block_with_config(data, &CodecConfig::default())
}

pub fn deserialize_block_with_config(data: &[u8], config: &CodecConfig) -> Result<Block> {
    decode_block(&mut WireReader::new(data), &config.limits)
}

/// Encode a block with every transaction in witness-stripped form.
pub fn encode_block<W: Write>(block: &Block, writer: &mut WireWriter<W>) -> Result<()> {
    encode_block_header(&block.header, writer)?;
    writer.write_var_int(block.transactions.len() as u64)?;
    for tx in &block.transactions {
        encode_transaction(tx, writer, false)?;
    }
    Ok(())
}

pub fn serialize_block(block: &Block) -> Vec<u8> {
    let mut writer = WireWriter::new(Vec::new());
    // Writing into a Vec cannot fail.
    let _ = encode_block(block, &mut writer);
    writer.into_inner()
}
