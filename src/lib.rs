//! # Veil-Codec
//!
//! Byte-exact codec for the Veil transaction and block wire format.
//!
//! Veil extends the Bitcoin layout with a 16-bit transaction version, an
//! explicit segwit flag byte, a one-byte type tag on every output, and two
//! extra hashes in the block header. This crate decodes untrusted bytes into
//! plain structs and re-encodes them in the witness-stripped form that
//! transaction identifiers are computed over.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: decode/encode hold no state and can run on any thread
//! 2. **Canonical Encoding**: every varint has exactly one accepted form
//! 3. **Bounded Allocation**: element counts are checked before anything is reserved
//! 4. **Explicit Configuration**: limits and chain parameters are values, not globals
//!
//! ## Usage
//!
//! ```rust
//! use veil_codec::VeilCodec;
//! use veil_codec::types::*;
//!
//! let codec = VeilCodec::new();
//! let tx = Transaction {
//!     version: 1,
//!     inputs: vec![],
//!     outputs: vec![TransactionOutput {
//!         output_type: 0,
//!         value: 1000,
//!         script_pubkey: vec![0x51],
//!     }],
//!     lock_time: 0,
//! };
//! let bytes = codec.encode_transaction(&tx);
//! assert_eq!(codec.decode_transaction(&bytes).unwrap(), tx);
//! ```

pub mod types;
pub mod constants;
pub mod config;
pub mod network;
pub mod serialization;
pub mod hashing;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use config::{CodecConfig, DecodeLimits};
pub use network::{ChainParams, Network};
pub use error::{CodecError, CountKind, Result};

/// Codec bound to one configuration
///
/// # Examples
///
/// ```
/// use veil_codec::{VeilCodec, Network};
///
/// let codec = VeilCodec::for_network(Network::Testnet);
/// assert_eq!(codec.chain_params().bech32_hrp, "tv");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VeilCodec {
    config: CodecConfig,
    params: ChainParams,
}

impl VeilCodec {
    /// Mainnet codec with default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        let params = config.chain_params();
        Self { config, params }
    }

    pub fn for_network(network: Network) -> Self {
        Self::with_config(CodecConfig::for_network(network))
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn chain_params(&self) -> &ChainParams {
        &self.params
    }

    /// Decode a raw transaction. The bytes must hold exactly one transaction.
    ///
    /// # Examples
    ///
    /// ```
    /// use veil_codec::{VeilCodec, CodecError};
    ///
    /// let codec = VeilCodec::new();
    /// // zero inputs, segwit flag set, marker byte 0x02
    /// let bytes = [0x01, 0x00, 0x01, 0, 0, 0, 0, 0x00, 0x02];
    /// assert!(matches!(
    ///     codec.decode_transaction(&bytes),
    ///     Err(CodecError::BadWitnessMarker(0x02))
    /// ));
    /// ```
    pub fn decode_transaction(&self, data: &[u8]) -> Result<Transaction> {
        serialization::deserialize_transaction_with_config(data, &self.config)
    }

    pub fn decode_transaction_hex(&self, hex_str: &str) -> Result<Transaction> {
        self.decode_transaction(&hex::decode(hex_str)?)
    }

    pub fn decode_block(&self, data: &[u8]) -> Result<Block> {
        serialization::deserialize_block_with_config(data, &self.config)
    }

    pub fn decode_block_hex(&self, hex_str: &str) -> Result<Block> {
        self.decode_block(&hex::decode(hex_str)?)
    }

    /// Witness-stripped serialization (flag byte zero)
    pub fn encode_transaction(&self, tx: &Transaction) -> Vec<u8> {
        serialization::serialize_transaction_no_witness(tx)
    }

    pub fn encode_block(&self, block: &Block) -> Vec<u8> {
        serialization::serialize_block(block)
    }

    pub fn transaction_hash(&self, tx: &Transaction) -> Hash {
        hashing::transaction_hash(tx)
    }

    pub fn txid_hex(&self, tx: &Transaction) -> String {
        hashing::txid_hex(tx)
    }
}
