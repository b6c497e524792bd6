//! Wallet boundary.
//!
//! Screens never talk to a wallet directly: they receive a
//! [`WalletProvider`] and go through it. The production implementation is
//! [`JsonRpcProvider`]; tests substitute a scripted fake.

mod chain;
#[cfg(test)]
pub(crate) mod fake;
mod rpc;

use async_trait::async_trait;
use thiserror::Error;

use crate::protocol::{RpcErrorObject, UNRECOGNIZED_CHAIN, USER_REJECTED_REQUEST};

pub use chain::{
    AddChainParams, ChainId, NativeCurrency, SwitchChainParams, TransactionRequest,
    BASE_CHAIN_ID, BASE_CHAIN_NAME, BASE_EXPLORER_URL, BASE_RPC_URL, BURN_ADDRESS,
    MINT_GAS_LIMIT, MINT_VALUE_WEI, format_wei,
};
pub use rpc::JsonRpcProvider;

/// Failure reported by a provider call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("wallet returned error {}: {}", .0.code, .0.message)]
    Rpc(RpcErrorObject),
    #[error("wallet connection failed: {0}")]
    Transport(String),
    #[error("wallet connection closed")]
    Closed,
    #[error("unexpected wallet response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Provider code, if the wallet answered with a JSON-RPC error.
    pub fn code(&self) -> Option<i64> {
        match self {
            ProviderError::Rpc(err) => Some(err.effective_code()),
            _ => None,
        }
    }
}

/// Wallet failures as the screens see them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WalletError {
    #[error("no wallet provider available")]
    NoProvider,
    #[error("request rejected in wallet")]
    UserRejected,
    #[error("wallet does not know the requested chain")]
    UnrecognizedChain,
    #[error("no wallet account connected")]
    NoAccount,
    #[error(transparent)]
    Provider(ProviderError),
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        match err.code() {
            Some(USER_REJECTED_REQUEST) => WalletError::UserRejected,
            Some(UNRECOGNIZED_CHAIN) => WalletError::UnrecognizedChain,
            _ => WalletError::Provider(err),
        }
    }
}

/// The account and transaction requests a wallet must answer.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Asks the user to expose their accounts (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Switches the wallet's active network (`wallet_switchEthereumChain`).
    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ProviderError>;

    /// Registers a network with the wallet (`wallet_addEthereumChain`).
    async fn add_chain(&self, params: &AddChainParams) -> Result<(), ProviderError>;

    /// Accounts already exposed to this application (`eth_accounts`).
    async fn accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Submits a transaction and returns its hash (`eth_sendTransaction`).
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, ProviderError>;
}
