//! Target network and the fixed burn transaction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric chain id, rendered as `0x`-prefixed hex on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainId(pub u64);

impl ChainId {
    pub fn to_hex(self) -> String {
        format!("{:#x}", self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base mainnet.
pub const BASE_CHAIN_ID: ChainId = ChainId(8453);
pub const BASE_CHAIN_NAME: &str = "Base";
pub const BASE_RPC_URL: &str = "https://mainnet.base.org";
pub const BASE_EXPLORER_URL: &str = "https://basescan.org";

/// Zero address; funds sent here are unspendable.
pub const BURN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
/// 0.01 ETH in wei.
pub const MINT_VALUE_WEI: &str = "0x2386f26fc10000";
/// Plain transfer gas limit (21000).
pub const MINT_GAS_LIMIT: &str = "0x5208";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchChainParams {
    pub chain_id: String,
}

impl SwitchChainParams {
    pub fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id: chain_id.to_hex(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Payload of `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub native_currency: NativeCurrency,
    pub block_explorer_urls: Vec<String>,
}

impl AddChainParams {
    pub fn base() -> Self {
        Self {
            chain_id: BASE_CHAIN_ID.to_hex(),
            chain_name: BASE_CHAIN_NAME.to_string(),
            rpc_urls: vec![BASE_RPC_URL.to_string()],
            native_currency: NativeCurrency {
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
            block_explorer_urls: vec![BASE_EXPLORER_URL.to_string()],
        }
    }
}

/// Payload of `eth_sendTransaction`. Quantities are hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub value: String,
    pub gas: String,
}

impl TransactionRequest {
    /// The cosmetic "mint": a fixed transfer from `from` to the zero address.
    pub fn burn(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: BURN_ADDRESS.to_string(),
            value: MINT_VALUE_WEI.to_string(),
            gas: MINT_GAS_LIMIT.to_string(),
        }
    }
}

/// Human-readable amount for a hex wei quantity, e.g. `0.01 ETH`.
pub fn format_wei(hex: &str) -> Option<String> {
    let wei = u128::from_str_radix(hex.trim_start_matches("0x"), 16).ok()?;
    let unit: u128 = 1_000_000_000_000_000_000;
    let whole = wei / unit;
    let frac = wei % unit;
    if frac == 0 {
        return Some(format!("{} ETH", whole));
    }
    let frac = format!("{:018}", frac);
    Some(format!("{}.{} ETH", whole, frac.trim_end_matches('0')))
}
