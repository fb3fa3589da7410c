//! Explorer endpoint resolution for abiscan
//!
//! Given anything that can send a JSON-RPC request, this crate asks the node for its chain ID
//! and maps it onto the API and browser URLs of the network's block explorer. The mapping is a
//! fixed table; unknown chain IDs fail with [`Error::UnsupportedNetwork`], whose message tells
//! the user how to fix their network configuration.

/// The static table of supported networks.
pub mod endpoints;
/// Error types for endpoint resolution.
pub mod error;
/// alloy-backed transport.
pub mod provider;
mod resolver;
/// The RPC transport abstraction.
pub mod transport;

pub use endpoints::{is_supported_chain, EndpointTable, EtherscanUrls, NetworkId, ETHERSCAN_ENDPOINTS};
pub use error::Error;
pub use provider::AlloyTransport;
pub use resolver::{get_etherscan_endpoints, resolve_rpc_url, EndpointResolver, ResolverOptions};
pub use transport::RpcTransport;
