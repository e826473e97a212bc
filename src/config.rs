//! Configuration for veil-codec
//!
//! Decode limits and the selected network. Values can be built in code or
//! loaded from JSON; every field has a default matching the wire protocol.

use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::network::{ChainParams, Network};
use serde::{Deserialize, Serialize};

/// Resource ceilings applied while decoding untrusted bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeLimits {
    /// Maximum protocol message size; input and output count ceilings are
    /// derived from it.
    #[serde(default = "default_max_message_payload")]
    pub max_message_payload: u64,

    /// Maximum witness stack items per input
    #[serde(default = "default_max_witness_items_per_input")]
    pub max_witness_items_per_input: u64,
}

fn default_max_message_payload() -> u64 {
    MAX_MESSAGE_PAYLOAD
}

fn default_max_witness_items_per_input() -> u64 {
    MAX_WITNESS_ITEMS_PER_INPUT
}

impl DecodeLimits {
    /// Most inputs that could fit into one message.
    pub fn max_inputs(&self) -> u64 {
        self.max_message_payload / MIN_TX_IN_PAYLOAD + 1
    }

    /// Most outputs that could fit into one message.
    pub fn max_outputs(&self) -> u64 {
        self.max_message_payload / MIN_TX_OUT_PAYLOAD + 1
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_message_payload: MAX_MESSAGE_PAYLOAD,
            max_witness_items_per_input: MAX_WITNESS_ITEMS_PER_INPUT,
        }
    }
}

/// Top-level codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub network: Network,

    #[serde(default)]
    pub limits: DecodeLimits,
}

impl CodecConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            limits: DecodeLimits::default(),
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))
    }

    pub fn chain_params(&self) -> ChainParams {
        ChainParams::for_network(self.network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_match_protocol() {
        let limits = DecodeLimits::default();
        assert_eq!(limits.max_inputs(), MAX_TX_IN_PER_MESSAGE);
        assert_eq!(limits.max_outputs(), MAX_TX_OUT_PER_MESSAGE);
        assert_eq!(limits.max_witness_items_per_input, 500_000);
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.network, Network::Mainnet);
    }

    #[test]
    fn test_from_json_partial_limits() {
        let config = CodecConfig::from_json(
            r#"{"network": "testnet", "limits": {"max_witness_items_per_input": 16}}"#,
        )
        .unwrap();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.limits.max_witness_items_per_input, 16);
        assert_eq!(config.limits.max_message_payload, MAX_MESSAGE_PAYLOAD);
        assert_eq!(config.chain_params().bech32_hrp, "tv");
    }

    #[test]
    fn test_from_json_rejects_unknown_network() {
        let err = CodecConfig::from_json(r#"{"network": "regtest"}"#).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    fn test_small_payload_shrinks_bounds() {
        let limits = DecodeLimits {
            max_message_payload: 410,
            max_witness_items_per_input: 1,
        };
        assert_eq!(limits.max_inputs(), 11);
        assert_eq!(limits.max_outputs(), 46);
    }
}
