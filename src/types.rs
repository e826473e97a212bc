//! Core transaction and block types for the Veil wire format

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit hash
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Witness Data: ordered stack of witness elements
pub type Witness = Vec<ByteString>;

/// Reference to an output of a previous transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

/// Transaction Input
///
/// `witness` is only populated when the transaction was decoded with the
/// segwit flag set. It is never written back out by the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub script_sig: ByteString,
    pub sequence: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub witness: Witness,
}

/// Transaction Output
///
/// `output_type` is the per-output tag byte of this chain variant. The codec
/// carries it through untouched; see [`crate::constants`] for the values that
/// downstream classifiers recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub output_type: u8,
    pub value: i64,
    pub script_pubkey: ByteString,
}

/// Transaction
///
/// `version` is a 16-bit value on the wire, widened here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// True if any input carries witness stack items.
    pub fn has_witness(&self) -> bool {
        self.inputs.iter().any(|input| !input.witness.is_empty())
    }

    /// Copy of the transaction with every witness stack cleared.
    pub fn without_witness(&self) -> Transaction {
        let mut stripped = self.clone();
        for input in &mut stripped.inputs {
            input.witness.clear();
        }
        stripped
    }
}

/// Block Header
///
/// Base Bitcoin header plus two chain-specific hashes: the witness merkle
/// root (after `merkle_root`) and the accumulator checkpoint hash (after
/// `nonce`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash,
    pub merkle_root: Hash,
    pub witness_merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
    pub accumulator_hash: Hash,
}

/// Block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}
