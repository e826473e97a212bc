//! Per-network chain parameters
//!
//! Address version bytes and network magics are plain values handed to
//! whoever needs them. Nothing here is registered globally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mainnet message start bytes
pub const MAINNET_MAGIC: u32 = 0xa3d0cfb6;

/// Testnet message start bytes
pub const TESTNET_MAGIC: u32 = 0xc4a7d1a8;

/// Veil network selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Map a backend chain name to a network. Only `"test"` selects testnet;
    /// every other name falls back to mainnet.
    pub fn from_chain_name(chain: &str) -> Self {
        match chain {
            "test" => Network::Testnet,
            _ => Network::Mainnet,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "main"),
            Network::Testnet => write!(f, "test"),
        }
    }
}

/// Chain parameters consumed by address encoders and P2P framing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    pub network: Network,
    pub net_magic: u32,
    pub pubkey_hash_addr_id: u8,
    pub script_hash_addr_id: u8,
    pub private_key_id: u8,
    pub bech32_hrp: String,
}

impl ChainParams {
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            net_magic: MAINNET_MAGIC,
            pubkey_hash_addr_id: 70,
            script_hash_addr_id: 5,
            private_key_id: 128,
            bech32_hrp: "bv".to_string(),
        }
    }

    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            net_magic: TESTNET_MAGIC,
            pubkey_hash_addr_id: 111,
            script_hash_addr_id: 196,
            private_key_id: 239,
            bech32_hrp: "tv".to_string(),
        }
    }

    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
        }
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::mainnet()
    }
}
