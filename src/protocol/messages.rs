//! JSON-RPC 2.0 envelopes exchanged with the wallet bridge.
//!
//! Requests follow EIP-1193 naming (`eth_requestAccounts`,
//! `wallet_switchEthereumChain`, ...). Every message is a single JSON text
//! frame on the WebSocket.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

pub const METHOD_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const METHOD_ACCOUNTS: &str = "eth_accounts";
pub const METHOD_SWITCH_CHAIN: &str = "wallet_switchEthereumChain";
pub const METHOD_ADD_CHAIN: &str = "wallet_addEthereumChain";
pub const METHOD_SEND_TRANSACTION: &str = "eth_sendTransaction";

/// The user declined the request in their wallet.
pub const USER_REJECTED_REQUEST: i64 = 4001;
/// The wallet does not know the requested chain.
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

/// Request sent to the wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    pub params: Value,
}

impl RpcRequest {
    pub fn new(id: String, method: &str, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }
}

/// Response received from the wallet. Exactly one of `result` and `error`
/// is expected to be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// The response id as a string, whether the peer echoed it as a string
    /// or a number.
    pub fn id_key(&self) -> Option<String> {
        match &self.id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<Value, RpcErrorObject> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// Error member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcErrorObject {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Some wallets wrap the provider code in `data.originalError.code`
    /// under a generic internal error.
    pub fn effective_code(&self) -> i64 {
        self.data
            .as_ref()
            .and_then(|data| data.get("originalError"))
            .and_then(|original| original.get("code"))
            .and_then(Value::as_i64)
            .unwrap_or(self.code)
    }
}
