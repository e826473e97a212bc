//! Transaction wire format serialization/deserialization
//!
//! Layout (all integers little-endian):
//! - Version (2 bytes)
//! - Segwit flag (1 byte, zero = false, anything else = true)
//! - Lock time (4 bytes)
//! - Input count (VarInt); if zero with the segwit flag set, a 0x01 marker
//!   byte and the real input count follow
//! - For each input: previous hash (32), previous index (4), script, sequence (4)
//! - Output count (VarInt)
//! - For each output: type tag (1), value (8, signed), script
//! - If the segwit flag is set: one witness stack per input
//!
//! The encoder writes the caller's flag byte but never writes witness data.

use super::primitives::{WireReader, WireWriter};
use super::script::{read_script, read_witness, script_size, write_script};
use super::varint::varint_size;
use crate::config::{CodecConfig, DecodeLimits};
use crate::constants::*;
use crate::error::{CodecError, CountKind, Result};
use crate::types::*;
use std::io::{Read, Write};
use tracing::{debug, trace};

/// Decode one transaction from a stream.
///
/// Stops right after the transaction; anything that follows is left in
/// the reader.
pub fn decode_transaction<R: Read>(
    reader: &mut WireReader<R>,
    limits: &DecodeLimits,
) -> Result<Transaction> {
    let version = reader.read_u16("version")? as i32;
    let use_segwit = reader.read_bool("segwit flag")?;
    let lock_time = reader.read_u32("lock time")?;

    let mut input_count = reader.read_var_int("input count")?;

    // A zero input count with the segwit flag set announces witness data.
    if input_count == 0 && use_segwit {
        let marker = reader.read_u8("witness marker")?;
        if marker != WITNESS_MARKER {
            debug!(marker, "witness tx with unsupported marker byte");
            return Err(CodecError::BadWitnessMarker(marker));
        }
        input_count = reader.read_var_int("input count")?;
    }

    let max_inputs = limits.max_inputs();
    if input_count > max_inputs {
        debug!(count = input_count, max = max_inputs, "rejecting input count over limit");
        return Err(CodecError::CountOverLimit {
            kind: CountKind::Inputs,
            count: input_count,
            max: max_inputs,
        });
    }

    let mut inputs = Vec::with_capacity(preallocation(input_count));
    for _ in 0..input_count {
        inputs.push(read_input(reader)?);
    }

    let output_count = reader.read_var_int("output count")?;
    let max_outputs = limits.max_outputs();
    if output_count > max_outputs {
        debug!(count = output_count, max = max_outputs, "rejecting output count over limit");
        return Err(CodecError::CountOverLimit {
            kind: CountKind::Outputs,
            count: output_count,
            max: max_outputs,
        });
    }

    let mut outputs = Vec::with_capacity(preallocation(output_count));
    for _ in 0..output_count {
        outputs.push(read_output(reader)?);
    }

    if use_segwit {
        for input in &mut inputs {
            input.witness = read_witness(reader, limits.max_witness_items_per_input)?;
        }
    }

    trace!(
        version,
        inputs = inputs.len(),
        outputs = outputs.len(),
        segwit = use_segwit,
        "decoded transaction"
    );

    Ok(Transaction {
        version,
        inputs,
        outputs,
        lock_time,
    })
}

fn read_input<R: Read>(reader: &mut WireReader<R>) -> Result<TransactionInput> {
    let hash = reader.read_hash("previous output hash")?;
    let index = reader.read_u32("previous output index")?;
    let script_sig = read_script(reader, "signature script")?;
    let sequence = reader.read_u32("sequence")?;

    Ok(TransactionInput {
        prevout: OutPoint { hash, index },
        script_sig,
        sequence,
        witness: Witness::new(),
    })
}

fn read_output<R: Read>(reader: &mut WireReader<R>) -> Result<TransactionOutput> {
    let output_type = reader.read_u8("output type")?;
    let value = reader.read_i64("output value")?;
    let script_pubkey = read_script(reader, "public key script")?;

    Ok(TransactionOutput {
        output_type,
        value,
        script_pubkey,
    })
}

pub(crate) fn preallocation(count: u64) -> usize {
    count.min(MAX_PREALLOCATED_ELEMENTS as u64) as usize
}

/// Deserialize a transaction that must span all of `data`, using default limits
pub fn deserialize_transaction(data: &[u8]) -> Result<Transaction> {
    deserialize_transaction_with_config(data, &CodecConfig::default())
}

/// Deserialize a transaction that must span all of `data`
pub fn deserialize_transaction_with_config(data: &[u8], config: &CodecConfig) -> Result<Transaction> {
    let mut reader = WireReader::new(data);
    let tx = decode_transaction(&mut reader, &config.limits)?;

    let remaining = data.len() - reader.position() as usize;
    if remaining > 0 {
        debug!(remaining, "trailing bytes after transaction");
        return Err(CodecError::TrailingBytes { remaining });
    }
    Ok(tx)
}

/// Encode a transaction to a stream.
///
/// `segwit_flag` is written as the flag byte. Witness stacks are never
/// written, whatever the flag or the inputs hold.
pub fn encode_transaction<W: Write>(
    tx: &Transaction,
    writer: &mut WireWriter<W>,
    segwit_flag: bool,
) -> Result<()> {
    writer.write_u16(tx.version as u16)?;
    writer.write_bool(segwit_flag)?;
    writer.write_u32(tx.lock_time)?;

    // TODO: emit the witness marker and per-input stacks once a consumer
    // needs the full segwit serialization.
    writer.write_var_int(tx.inputs.len() as u64)?;
    for input in &tx.inputs {
        writer.write_hash(&input.prevout.hash)?;
        writer.write_u32(input.prevout.index)?;
        write_script(writer, &input.script_sig)?;
        writer.write_u32(input.sequence)?;
    }

    writer.write_var_int(tx.outputs.len() as u64)?;
    for output in &tx.outputs {
        writer.write_u8(output.output_type)?;
        writer.write_i64(output.value)?;
        write_script(writer, &output.script_pubkey)?;
    }

    Ok(())
}

/// Serialize a transaction to bytes with the given flag byte
pub fn serialize_transaction(tx: &Transaction, segwit_flag: bool) -> Vec<u8> {
    let mut writer = WireWriter::new(Vec::with_capacity(base_size(tx)));
    // Writing into a Vec cannot fail.
    let _ = encode_transaction(tx, &mut writer, segwit_flag);
    writer.into_inner()
}

/// Serialize a transaction in the witness-stripped form used for hashing
pub fn serialize_transaction_no_witness(tx: &Transaction) -> Vec<u8> {
    serialize_transaction(tx, false)
}

/// Exact serialized size of the transaction without witness data
pub fn base_size(tx: &Transaction) -> usize {
    // version 2 + flag 1 + lock time 4
    let mut size = 7 + varint_size(tx.inputs.len() as u64) + varint_size(tx.outputs.len() as u64);

    for input in &tx.inputs {
        size += 32 + 4 + script_size(&input.script_sig) + 4;
    }

    for output in &tx.outputs {
        size += 1 + 8 + script_size(&output.script_pubkey);
    }

    size
}
