//! Error types for wire format decoding and encoding

use std::fmt;
use thiserror::Error;

/// Which element count tripped a resource ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    Inputs,
    Outputs,
    WitnessItems,
}

impl fmt::Display for CountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountKind::Inputs => write!(f, "input transactions"),
            CountKind::Outputs => write!(f, "output transactions"),
            CountKind::WitnessItems => write!(f, "witness items"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Truncated input reading {field} at offset {offset}")]
    Truncated { field: &'static str, offset: u64 },

    #[error(
        "Non-canonical varint for {field}: discriminant {discriminant:#04x} \
         encodes {value}, minimum for this form is {minimum}"
    )]
    NonCanonicalVarInt {
        field: &'static str,
        discriminant: u8,
        value: u64,
        minimum: u64,
    },

    #[error("Too many {kind} to fit into max message size [count {count}, max {max}]")]
    CountOverLimit { kind: CountKind, count: u64, max: u64 },

    #[error("Witness tx but flag byte is {0:#04x}")]
    BadWitnessMarker(u8),

    #[error("{remaining} trailing bytes after end of data")]
    TrailingBytes { remaining: usize },

    #[error("Transaction {index} failed to decode: {source}")]
    Transaction {
        index: u64,
        #[source]
        source: Box<CodecError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CodecError {
    /// True when the input claimed more elements than the configured ceilings allow.
    pub fn is_resource_limit(&self) -> bool {
        match self {
            CodecError::CountOverLimit { .. } => true,
            CodecError::Transaction { source, .. } => source.is_resource_limit(),
            _ => false,
        }
    }

    /// True when the input simply ran out of bytes.
    pub fn is_truncation(&self) -> bool {
        match self {
            CodecError::Truncated { .. } => true,
            CodecError::Transaction { source, .. } => source.is_truncation(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_over_limit_message() {
        let err = CodecError::CountOverLimit {
            kind: CountKind::Inputs,
            count: 900_000,
            max: 818_401,
        };
        assert_eq!(
            err.to_string(),
            "Too many input transactions to fit into max message size [count 900000, max 818401]"
        );
        assert!(err.is_resource_limit());
        assert!(!err.is_truncation());
    }

    #[test]
    fn test_nested_transaction_error_classification() {
        let err = CodecError::Transaction {
            index: 3,
            source: Box::new(CodecError::Truncated { field: "sequence", offset: 80 }),
        };
        assert!(err.is_truncation());
        assert!(!err.is_resource_limit());
        assert!(err.to_string().starts_with("Transaction 3 failed to decode"));
    }

    #[test]
    fn test_bad_witness_marker_message() {
        assert_eq!(
            CodecError::BadWitnessMarker(0x02).to_string(),
            "Witness tx but flag byte is 0x02"
        );
    }
}
