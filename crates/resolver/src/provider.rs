//! [`RpcTransport`] implementation backed by an alloy provider.
use crate::{error::Error, transport::RpcTransport};
use alloy::{
    network::Ethereum,
    providers::{Provider, ProviderBuilder, RootProvider},
};
use async_trait::async_trait;
use eyre::Result;
use serde_json::Value;
use std::borrow::Cow;
use tracing::trace;

/// [`AlloyTransport`] forwards raw requests to an alloy [`RootProvider`]. The transport kind
/// (http, ws or ipc) is picked by alloy from the rpc url.
#[derive(Clone, Debug)]
pub struct AlloyTransport {
    provider: RootProvider<Ethereum>,
}

impl AlloyTransport {
    /// Connect to a provider using the given rpc_url.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        if rpc_url.is_empty() {
            return Err(eyre::eyre!("No RPC URL provided"));
        }

        let provider = ProviderBuilder::new().connect(rpc_url).await?.root().clone();
        Ok(Self { provider })
    }

    /// Wrap an already connected provider.
    pub fn new(provider: RootProvider<Ethereum>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RpcTransport for AlloyTransport {
    async fn send(&self, method: &str, params: Value) -> Result<Value, Error> {
        trace!("sending raw request '{}'", method);
        self.provider
            .raw_request::<Value, Value>(Cow::Owned(method.to_string()), params)
            .await
            .map_err(|e| Error::RpcError(format!("failed to send '{method}': {e}")))
    }
}
