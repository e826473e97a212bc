//! Length-prefixed scripts and witness stacks

use super::primitives::{WireReader, WireWriter};
use super::varint::varint_size;
use crate::constants::MAX_PREALLOCATED_ELEMENTS;
use crate::error::{CodecError, CountKind, Result};
use crate::types::{ByteString, Witness};
use std::io::{Read, Write};
use tracing::debug;

/// Read a script: varint length followed by that many bytes.
pub fn read_script<R: Read>(reader: &mut WireReader<R>, field: &'static str) -> Result<ByteString> {
    let len = reader.read_var_int(field)?;
    reader.read_bytes(len, field)
}

pub fn write_script<W: Write>(writer: &mut WireWriter<W>, script: &[u8]) -> Result<()> {
    writer.write_var_int(script.len() as u64)?;
    writer.write_bytes(script)
}

/// Serialized length of a script including its length prefix
pub fn script_size(script: &[u8]) -> usize {
    varint_size(script.len() as u64) + script.len()
}

/// Read one input's witness stack.
///
/// The item count is checked against `max_items` before any item is read,
/// whatever the stream actually holds.
pub fn read_witness<R: Read>(reader: &mut WireReader<R>, max_items: u64) -> Result<Witness> {
    let count = reader.read_var_int("witness item count")?;
    if count > max_items {
        debug!(count, max = max_items, "rejecting witness stack over item limit");
        return Err(CodecError::CountOverLimit {
            kind: CountKind::WitnessItems,
            count,
            max: max_items,
        });
    }

    let mut witness = Vec::with_capacity(count.min(MAX_PREALLOCATED_ELEMENTS as u64) as usize);
    for _ in 0..count {
        witness.push(read_script(reader, "witness item")?);
    }
    Ok(witness)
}

pub fn write_witness<W: Write>(writer: &mut WireWriter<W>, witness: &Witness) -> Result<()> {
    writer.write_var_int(witness.len() as u64)?;
    for item in witness {
        write_script(writer, item)?;
    }
    Ok(())
}
