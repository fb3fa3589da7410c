use abiscan_common::constants::PLUGIN_NAME;

/// Error type for endpoint resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No explorer is known for the chain ID reported by the node
    #[error(
        "An etherscan endpoint could not be found for this network. ChainID: {chain_id}. The selected network is {network_name}.

Possible causes are:
  - The selected network ({network_name}) is wrong.
  - Faulty network config.

If you use Mainnet fork mode try setting 'chainId: 1' in your network config"
    )]
    UnsupportedNetwork {
        /// Chain ID returned by `eth_chainId`
        chain_id: u64,
        /// Network name supplied by the caller
        network_name: String,
    },

    /// The local development network was selected while local networks are rejected
    #[error(
        "The selected network is {network_name}. Please select a network supported by Etherscan."
    )]
    LocalNetwork {
        /// Network name supplied by the caller
        network_name: String,
    },

    /// The transport failed to deliver a response
    #[error("RPCError: {0}")]
    RpcError(String),

    /// The `eth_chainId` response is not a hex quantity
    #[error("Parse error: {0}")]
    ParseError(String),

    /// An IO error occurred
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}

impl Error {
    /// A stable name for the error kind, suitable for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnsupportedNetwork { .. } => "UnsupportedNetwork",
            Error::LocalNetwork { .. } => "LocalNetwork",
            Error::RpcError(_) => "RpcError",
            Error::ParseError(_) => "ParseError",
            Error::IOError(_) => "IOError",
        }
    }

    /// The identifier of the plugin raising the error.
    pub fn plugin(&self) -> &'static str {
        PLUGIN_NAME
    }
}

impl From<abiscan_common::error::Error> for Error {
    fn from(e: abiscan_common::error::Error) -> Self {
        match e {
            abiscan_common::error::Error::ParseError(msg) => Error::ParseError(msg),
            abiscan_common::error::Error::IOError(e) => Error::IOError(e),
        }
    }
}
