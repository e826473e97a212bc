//! Transaction identifiers and merkle roots
//!
//! TxId(tx) = SHA256(SHA256(Serialize(tx ∖ witness)))
//!
//! The identifier is computed from the witness-stripped serialization with
//! the segwit flag byte forced to zero, so it does not depend on whether the
//! source bytes carried witness data.

use crate::serialization::transaction::serialize_transaction_no_witness;
use crate::types::*;
use bitcoin_hashes::{sha256d, Hash as BitcoinHash, HashEngine};

/// Double SHA-256 of arbitrary bytes
pub fn double_sha256(data: &[u8]) -> Hash {
    sha256d::Hash::hash(data).into_inner()
}

/// Canonical transaction identifier
pub fn transaction_hash(tx: &Transaction) -> Hash {
    double_sha256(&serialize_transaction_no_witness(tx))
}

/// Display form of a hash: byte-reversed hex, as block explorers print txids
pub fn hash_to_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

pub fn txid_hex(tx: &Transaction) -> String {
    hash_to_hex(&transaction_hash(tx))
}

/// Merkle root over transaction identifiers
///
/// Odd levels duplicate their last hash. Returns `None` for an empty list.
pub fn merkle_root(transactions: &[Transaction]) -> Option<Hash> {
    let mut hashes: Vec<Hash> = transactions.iter().map(transaction_hash).collect();
    if hashes.is_empty() {
        return None;
    }

    while hashes.len() > 1 {
        hashes = hashes
            .chunks(2)
            .map(|pair| {
                let right = pair.get(1).unwrap_or(&pair[0]);
                hash_pair(&pair[0], right)
            })
            .collect();
    }

    Some(hashes[0])
}

fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut engine = sha256d::Hash::engine();
    engine.input(left);
    engine.input(right);
    sha256d::Hash::from_engine(engine).into_inner()
}
