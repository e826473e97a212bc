//! Typed little-endian readers and writers over byte streams
//!
//! One function per wire type; there is no generic "read anything" entry
//! point. Every read names the field it is decoding so a short read can be
//! reported as `Truncated { field, offset }`.

use super::varint::canonical_minimum;
use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::types::Hash;
use std::io::{ErrorKind, Read, Write};

/// Reads wire primitives from any `Read`, tracking the byte offset.
pub struct WireReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> WireReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8], field: &'static str) -> Result<()> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(CodecError::Truncated {
                field,
                offset: self.position,
            }),
            Err(e) => Err(CodecError::Io(e)),
        }
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf, field)?;
        Ok(buf[0])
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf, field)?;
        Ok(u16::from_le_bytes(buf))
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, field)?;
        Ok(u32::from_le_bytes(buf))
    }

    pub fn read_u64(&mut self, field: &'static str) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf, field)?;
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_i64(&mut self, field: &'static str) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf, field)?;
        Ok(i64::from_le_bytes(buf))
    }

    /// One byte; zero is false, any other value is true.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool> {
        Ok(self.read_u8(field)? != 0x00)
    }

    pub fn read_hash(&mut self, field: &'static str) -> Result<Hash> {
        let mut hash = [0u8; 32];
        self.fill(&mut hash, field)?;
        Ok(hash)
    }

    /// Read a canonical variable length integer.
    pub fn read_var_int(&mut self, field: &'static str) -> Result<u64> {
        let discriminant = self.read_u8(field)?;
        let value = match discriminant {
            VARINT_U16 => self.read_u16(field)? as u64,
            VARINT_U32 => self.read_u32(field)? as u64,
            VARINT_U64 => self.read_u64(field)?,
            small => return Ok(small as u64),
        };

        // The encoding is not canonical if the value could have been
        // encoded using fewer bytes.
        let minimum = canonical_minimum(discriminant);
        if value < minimum {
            return Err(CodecError::NonCanonicalVarInt {
                field,
                discriminant,
                value,
                minimum,
            });
        }
        Ok(value)
    }

    /// Read exactly `len` raw bytes.
    ///
    /// The buffer grows as data arrives, so a hostile length costs no more
    /// memory than the bytes actually present in the stream.
    pub fn read_bytes(&mut self, len: u64, field: &'static str) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOCATED_ELEMENTS as u64) as usize);
        let read = (&mut self.inner).take(len).read_to_end(&mut buf)?;
        self.position += read as u64;
        if (read as u64) < len {
            return Err(CodecError::Truncated {
                field,
                offset: self.position,
            });
        }
        Ok(buf)
    }
}

/// Writes wire primitives to any `Write`, counting bytes written.
pub struct WireWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> WireWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(if value { 0x01 } else { 0x00 })
    }

    pub fn write_hash(&mut self, hash: &Hash) -> Result<()> {
        self.write_bytes(hash)
    }

    /// Write `value` using the smallest varint form that holds it.
    pub fn write_var_int(&mut self, value: u64) -> Result<()> {
        if value < VARINT_U16 as u64 {
            self.write_u8(value as u8)
        } else if value <= u16::MAX as u64 {
            self.write_u8(VARINT_U16)?;
            self.write_u16(value as u16)
        } else if value <= u32::MAX as u64 {
            self.write_u8(VARINT_U32)?;
            self.write_u32(value as u32)
        } else {
            self.write_u8(VARINT_U64)?;
            self.write_u64(value)
        }
    }
}
