//! Veil wire format serialization/deserialization
//!
//! Consensus-critical: transaction hashes are computed over these bytes, so
//! encoding must be byte-exact and varints canonical.
//!
//! All integers are little-endian.

pub mod block;
pub mod primitives;
pub mod script;
pub mod transaction;
pub mod varint;

pub use block::{
    decode_block, deserialize_block, deserialize_block_header, deserialize_block_with_config,
    encode_block, serialize_block, serialize_block_header,
};
pub use primitives::{WireReader, WireWriter};
pub use transaction::{
    base_size, decode_transaction, deserialize_transaction, deserialize_transaction_with_config,
    encode_transaction, serialize_transaction, serialize_transaction_no_witness,
};
pub use varint::{decode_varint, encode_varint, varint_size};
