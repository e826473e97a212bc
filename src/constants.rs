//! Veil wire format constants

/// Maximum bytes a single protocol message may carry (32 MiB)
pub const MAX_MESSAGE_PAYLOAD: u64 = 32 * 1024 * 1024;

/// Smallest possible serialized input: 32-byte hash + 4-byte index +
/// 1-byte empty script length + 4-byte sequence
pub const MIN_TX_IN_PAYLOAD: u64 = 41;

/// Smallest possible serialized output: 8-byte value + 1-byte empty script length
pub const MIN_TX_OUT_PAYLOAD: u64 = 9;

/// Maximum inputs that could fit in one message
pub const MAX_TX_IN_PER_MESSAGE: u64 = MAX_MESSAGE_PAYLOAD / MIN_TX_IN_PAYLOAD + 1;

/// Maximum outputs that could fit in one message
pub const MAX_TX_OUT_PER_MESSAGE: u64 = MAX_MESSAGE_PAYLOAD / MIN_TX_OUT_PAYLOAD + 1;

/// Maximum witness stack items per input
pub const MAX_WITNESS_ITEMS_PER_INPUT: u64 = 500_000;

/// The only supported witness marker following a zero input count
pub const WITNESS_MARKER: u8 = 0x01;

/// Serialized block header size in bytes
pub const BLOCK_HEADER_SIZE: usize = 144;

/// Upper bound on elements reserved up front from a decoded count
pub const MAX_PREALLOCATED_ELEMENTS: usize = 1024;

/// Varint discriminant for a 2-byte payload
pub const VARINT_U16: u8 = 0xfd;

/// Varint discriminant for a 4-byte payload
pub const VARINT_U32: u8 = 0xfe;

/// Varint discriminant for an 8-byte payload
pub const VARINT_U64: u8 = 0xff;

// Output tags and opcodes below are interpreted by address/script
// classifiers outside this crate.

/// Zerocoin mint opcode
pub const OP_ZEROCOINMINT: u8 = 0xc1;

/// Zerocoin spend opcode
pub const OP_ZEROCOINSPEND: u8 = 0xc2;

/// Internal marker for coinstake outputs
pub const STAKE_OUTPUT_TAG: u8 = 0xf7;

/// Internal marker for RingCT outputs
pub const RINGCT_OUTPUT_TAG: u8 = 0xf8;

/// Internal marker for range-proof data outputs
pub const CTDATA_OUTPUT_TAG: u8 = 0xf9;

/// Internal marker for coinbase outputs
pub const COINBASE_OUTPUT_TAG: u8 = 0xfa;

/// Sequence number for final transaction
pub const SEQUENCE_FINAL: u32 = 0xffffffff;
