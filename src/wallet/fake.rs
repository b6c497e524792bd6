//! Scripted provider for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{AddChainParams, ChainId, ProviderError, TransactionRequest, WalletProvider};
use crate::protocol::RpcErrorObject;

/// A call the fake received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RequestAccounts,
    SwitchChain(ChainId),
    AddChain(AddChainParams),
    Accounts,
    SendTransaction(TransactionRequest),
}

pub struct FakeProvider {
    pub request_accounts: Result<Vec<String>, ProviderError>,
    pub switch_chain: Result<(), ProviderError>,
    pub add_chain: Result<(), ProviderError>,
    pub accounts: Result<Vec<String>, ProviderError>,
    pub send_transaction: Result<String, ProviderError>,
    calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    /// A wallet that approves everything for `0xa11ce`.
    pub fn approving() -> Self {
        Self {
            request_accounts: Ok(vec!["0xa11ce".to_string()]),
            switch_chain: Ok(()),
            add_chain: Ok(()),
            accounts: Ok(vec!["0xa11ce".to_string()]),
            send_transaction: Ok("0xfeed".to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rpc_error(code: i64, message: &str) -> ProviderError {
        ProviderError::Rpc(RpcErrorObject::new(code, message))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl WalletProvider for FakeProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.record(Call::RequestAccounts);
        self.request_accounts.clone()
    }

    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ProviderError> {
        self.record(Call::SwitchChain(chain_id));
        self.switch_chain.clone()
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), ProviderError> {
        self.record(Call::AddChain(params.clone()));
        self.add_chain.clone()
    }

    async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.record(Call::Accounts);
        self.accounts.clone()
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, ProviderError> {
        self.record(Call::SendTransaction(tx.clone()));
        self.send_transaction.clone()
    }
}
