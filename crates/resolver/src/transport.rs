//! The RPC seam the resolver talks through.

use crate::error::Error;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Anything able to send a raw JSON-RPC request and await its result.
///
/// Implementations must be safe to call concurrently; the resolver never retries or times out
/// a request, so those concerns belong to the implementation.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Send `method` with `params` and return the `result` member of the response.
    async fn send(&self, method: &str, params: Value) -> Result<Value, Error>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    async fn send(&self, method: &str, params: Value) -> Result<Value, Error> {
        (**self).send(method, params).await
    }
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Box<T> {
    async fn send(&self, method: &str, params: Value) -> Result<Value, Error> {
        (**self).send(method, params).await
    }
}
