use crate::{
    endpoints::{EtherscanUrls, ETHERSCAN_ENDPOINTS},
    error::Error,
    provider::AlloyTransport,
    transport::RpcTransport,
};
use abiscan_common::{
    constants::{DEFAULT_LOCAL_NETWORK_NAME, ETH_CHAIN_ID_METHOD},
    utils::hex::parse_hex_quantity,
};
use abiscan_config::{resolve_rpc_alias, Configuration};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Options changing how [`EndpointResolver`] treats the selected network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Fail with [`Error::LocalNetwork`] when the selected network is the local development
    /// network, before any request is sent. Off by default so a local mainnet fork can still
    /// look up ABIs.
    pub reject_local_network: bool,

    /// Name of the local development network
    pub local_network_name: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            reject_local_network: false,
            local_network_name: DEFAULT_LOCAL_NETWORK_NAME.to_string(),
        }
    }
}

impl From<&Configuration> for ResolverOptions {
    fn from(config: &Configuration) -> Self {
        Self {
            reject_local_network: config.reject_local_network,
            local_network_name: config.local_network_name.clone(),
        }
    }
}

/// Resolves the explorer endpoints of the network a transport is connected to.
#[derive(Debug, Clone, Default)]
pub struct EndpointResolver {
    options: ResolverOptions,
}

impl EndpointResolver {
    /// Create a resolver with the given options.
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// Create a resolver from the user's [`Configuration`].
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(ResolverOptions::from(config))
    }

    /// The options this resolver was built with.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Ask the node behind `transport` for its chain ID.
    pub async fn request_chain_id<T>(transport: &T) -> Result<u64, Error>
    where
        T: RpcTransport + ?Sized,
    {
        debug!("requesting chain id via '{}'", ETH_CHAIN_ID_METHOD);
        let response = transport.send(ETH_CHAIN_ID_METHOD, Value::Array(vec![])).await?;
        trace!("raw '{}' response: {}", ETH_CHAIN_ID_METHOD, response);

        let quantity = response.as_str().ok_or_else(|| {
            Error::ParseError(format!(
                "expected a hex string from '{ETH_CHAIN_ID_METHOD}', got {response}"
            ))
        })?;

        Ok(parse_hex_quantity(quantity)?)
    }

    /// Resolve the explorer URLs of the network behind `transport`.
    ///
    /// `network_name` only labels error messages, and is compared against the local network
    /// name when [`ResolverOptions::reject_local_network`] is set.
    pub async fn resolve<T>(&self, transport: &T, network_name: &str) -> Result<EtherscanUrls, Error>
    where
        T: RpcTransport + ?Sized,
    {
        if self.options.reject_local_network && network_name == self.options.local_network_name {
            return Err(Error::LocalNetwork { network_name: network_name.to_string() });
        }

        let chain_id = Self::request_chain_id(transport).await?;

        match ETHERSCAN_ENDPOINTS.get(chain_id) {
            Some(urls) => {
                debug!("resolved chain id {} to explorer '{}'", chain_id, urls.api_url);
                Ok(urls)
            }
            None => {
                warn!("no explorer known for chain id {} (network '{}')", chain_id, network_name);
                Err(Error::UnsupportedNetwork { chain_id, network_name: network_name.to_string() })
            }
        }
    }

    /// Connect to `rpc_url` and resolve the explorer URLs of the network behind it. MESC
    /// endpoint names are expanded to their url first.
    pub async fn resolve_rpc_url(
        &self,
        rpc_url: &str,
        network_name: &str,
    ) -> Result<EtherscanUrls, Error> {
        let rpc_url = resolve_rpc_alias(rpc_url);
        let transport = AlloyTransport::connect(&rpc_url)
            .await
            .map_err(|e| Error::RpcError(format!("failed to connect to provider '{rpc_url}': {e}")))?;

        self.resolve(&transport, network_name).await
    }
}

/// Resolve the explorer URLs of the network behind `transport` with the default options.
///
/// ```no_run
/// use abiscan_resolver::{get_etherscan_endpoints, AlloyTransport};
///
/// # async fn run() -> eyre::Result<()> {
/// let transport = AlloyTransport::connect("https://eth.llamarpc.com").await?;
/// let urls = get_etherscan_endpoints(&transport, "mainnet").await?;
/// assert_eq!(urls.api_url, "https://api.etherscan.io/api");
/// # Ok(())
/// # }
/// ```
pub async fn get_etherscan_endpoints<T>(
    transport: &T,
    network_name: &str,
) -> Result<EtherscanUrls, Error>
where
    T: RpcTransport + ?Sized,
{
    EndpointResolver::default().resolve(transport, network_name).await
}

/// Connect to `rpc_url` and resolve its explorer URLs with the default options.
pub async fn resolve_rpc_url(rpc_url: &str, network_name: &str) -> Result<EtherscanUrls, Error> {
    EndpointResolver::default().resolve_rpc_url(rpc_url, network_name).await
}
