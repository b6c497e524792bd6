//! WebSocket JSON-RPC wallet provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::protocol::{
    METHOD_ACCOUNTS, METHOD_ADD_CHAIN, METHOD_REQUEST_ACCOUNTS, METHOD_SEND_TRANSACTION,
    METHOD_SWITCH_CHAIN, RpcRequest, RpcResponse,
};

use super::{
    AddChainParams, ChainId, ProviderError, SwitchChainParams, TransactionRequest, WalletProvider,
};

type Reply = oneshot::Sender<Result<Value, ProviderError>>;

/// Requests waiting for a response, keyed by request id.
#[derive(Default)]
struct Pending {
    waiters: HashMap<String, Reply>,
    closed: bool,
}

type SharedPending = Arc<Mutex<Pending>>;

/// Talks to a wallet bridge over one WebSocket.
///
/// Requests are multiplexed by id and may be in flight concurrently. No
/// timeout is applied: the wallet decides how long a prompt stays open.
pub struct JsonRpcProvider {
    outgoing: mpsc::UnboundedSender<RpcRequest>,
    pending: SharedPending,
    writer: JoinHandle<()>,
    reader: JoinHandle<()>,
}

impl JsonRpcProvider {
    pub async fn connect(url: &str) -> Result<Self, ProviderError> {
        let (ws_stream, _) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        info!(url, "connected to wallet bridge");

        let (mut ws_sender, mut ws_receiver) = ws_stream.split();
        let (tx, mut rx) = mpsc::unbounded_channel::<RpcRequest>();
        let pending = SharedPending::default();

        let writer_pending = Arc::clone(&pending);
        let writer = tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let json = match serde_json::to_string(&request) {
                    Ok(json) => json,
                    Err(e) => {
                        fail(&writer_pending, &request.id, ProviderError::InvalidResponse(e.to_string()))
                            .await;
                        continue;
                    }
                };
                if let Err(e) = ws_sender.send(Message::Text(json.into())).await {
                    warn!(error = %e, "failed to send wallet request");
                    fail(&writer_pending, &request.id, ProviderError::Transport(e.to_string())).await;
                    break;
                }
            }
        });

        let reader_pending = Arc::clone(&pending);
        let reader = tokio::spawn(async move {
            while let Some(msg) = ws_receiver.next().await {
                let text = match msg {
                    Ok(Message::Text(text)) => text.to_string(),
                    Ok(Message::Close(_)) => break,
                    Err(e) => {
                        warn!(error = %e, "wallet connection error");
                        break;
                    }
                    _ => continue,
                };

                let response: RpcResponse = match serde_json::from_str(&text) {
                    Ok(response) => response,
                    Err(e) => {
                        debug!(error = %e, "ignoring unparseable wallet message");
                        continue;
                    }
                };

                let Some(id) = response.id_key() else {
                    continue;
                };
                let waiter = reader_pending.lock().await.waiters.remove(&id);
                match waiter {
                    Some(waiter) => {
                        let _ = waiter.send(response.into_result().map_err(ProviderError::Rpc));
                    }
                    None => debug!(%id, "response for unknown request"),
                }
            }

            let mut pending = reader_pending.lock().await;
            pending.closed = true;
            for (_, waiter) in pending.waiters.drain() {
                let _ = waiter.send(Err(ProviderError::Closed));
            }
            info!("wallet bridge disconnected");
        });

        Ok(Self {
            outgoing: tx,
            pending,
            writer,
            reader,
        })
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let id = Uuid::new_v4().to_string();
        let (tx, rx) = oneshot::channel();

        {
            let mut pending = self.pending.lock().await;
            if pending.closed {
                return Err(ProviderError::Closed);
            }
            pending.waiters.insert(id.clone(), tx);
        }

        debug!(method, %id, "wallet request");
        if self.outgoing.send(RpcRequest::new(id.clone(), method, params)).is_err() {
            self.pending.lock().await.waiters.remove(&id);
            return Err(ProviderError::Closed);
        }

        let result = rx.await.map_err(|_| ProviderError::Closed)?;
        if let Err(e) = &result {
            debug!(method, %id, error = %e, "wallet request failed");
        }
        result
    }

    async fn call_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, ProviderError> {
        let value = self.call(method, params).await?;
        serde_json::from_value(value)
            .map_err(|e| ProviderError::InvalidResponse(format!("{}: {}", method, e)))
    }
}

impl Drop for JsonRpcProvider {
    fn drop(&mut self) {
        self.writer.abort();
        self.reader.abort();
    }
}

async fn fail(pending: &SharedPending, id: &str, err: ProviderError) {
    if let Some(waiter) = pending.lock().await.waiters.remove(id) {
        let _ = waiter.send(Err(err));
    }
}

#[async_trait]
impl WalletProvider for JsonRpcProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.call_as(METHOD_REQUEST_ACCOUNTS, json!([])).await
    }

    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ProviderError> {
        self.call(METHOD_SWITCH_CHAIN, json!([SwitchChainParams::new(chain_id)]))
            .await
            .map(|_| ())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), ProviderError> {
        self.call(METHOD_ADD_CHAIN, json!([params])).await.map(|_| ())
    }

    async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.call_as(METHOD_ACCOUNTS, json!([])).await
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, ProviderError> {
        self.call_as(METHOD_SEND_TRANSACTION, json!([tx])).await
    }
}
