//! The static table of supported networks and their explorer URLs.

use abiscan_common::constants::{
    CHAIN_ID_ARBITRUM, CHAIN_ID_BSC, CHAIN_ID_BSC_TESTNET, CHAIN_ID_ETHEREUM, CHAIN_ID_GOERLI,
    CHAIN_ID_KOVAN, CHAIN_ID_RINKEBY, CHAIN_ID_ROPSTEN,
};
use serde::Serialize;
use std::fmt;

/// The API and browser base URLs of a block explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EtherscanUrls {
    /// Base URL of the explorer API, used to verify and fetch contract ABIs
    #[serde(rename = "apiURL")]
    pub api_url: &'static str,
    /// Base URL of the human-facing explorer
    #[serde(rename = "browserURL")]
    pub browser_url: &'static str,
}

/// Networks with a known block explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkId {
    /// Ethereum mainnet
    Mainnet,
    /// Ropsten testnet
    Ropsten,
    /// Rinkeby testnet
    Rinkeby,
    /// Goerli testnet
    Goerli,
    /// Kovan testnet
    Kovan,
    /// Binance Smart Chain
    Bsc,
    /// Binance Smart Chain testnet
    BscTestnet,
    /// Arbitrum One
    Arbitrum,
}

impl NetworkId {
    /// Every supported network, ordered by chain ID.
    pub const ALL: [NetworkId; 8] = [
        NetworkId::Mainnet,
        NetworkId::Ropsten,
        NetworkId::Rinkeby,
        NetworkId::Goerli,
        NetworkId::Kovan,
        NetworkId::Bsc,
        NetworkId::BscTestnet,
        NetworkId::Arbitrum,
    ];

    /// Returns the network with the given chain ID, if it is supported.
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            CHAIN_ID_ETHEREUM => Some(Self::Mainnet),
            CHAIN_ID_ROPSTEN => Some(Self::Ropsten),
            CHAIN_ID_RINKEBY => Some(Self::Rinkeby),
            CHAIN_ID_GOERLI => Some(Self::Goerli),
            CHAIN_ID_KOVAN => Some(Self::Kovan),
            CHAIN_ID_BSC => Some(Self::Bsc),
            CHAIN_ID_BSC_TESTNET => Some(Self::BscTestnet),
            CHAIN_ID_ARBITRUM => Some(Self::Arbitrum),
            _ => None,
        }
    }

    /// The EIP-155 chain ID of the network.
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => CHAIN_ID_ETHEREUM,
            Self::Ropsten => CHAIN_ID_ROPSTEN,
            Self::Rinkeby => CHAIN_ID_RINKEBY,
            Self::Goerli => CHAIN_ID_GOERLI,
            Self::Kovan => CHAIN_ID_KOVAN,
            Self::Bsc => CHAIN_ID_BSC,
            Self::BscTestnet => CHAIN_ID_BSC_TESTNET,
            Self::Arbitrum => CHAIN_ID_ARBITRUM,
        }
    }

    /// A short lowercase name of the network.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Ropsten => "ropsten",
            Self::Rinkeby => "rinkeby",
            Self::Goerli => "goerli",
            Self::Kovan => "kovan",
            Self::Bsc => "bsc",
            Self::BscTestnet => "bsc-testnet",
            Self::Arbitrum => "arbitrum",
        }
    }

    /// The explorer URLs of the network.
    pub fn etherscan_urls(&self) -> EtherscanUrls {
        let (api_url, browser_url) = match self {
            Self::Mainnet => ("https://api.etherscan.io/api", "https://etherscan.io/"),
            Self::Ropsten => ("https://api-ropsten.etherscan.io/api", "https://ropsten.etherscan.io"),
            Self::Rinkeby => ("https://api-rinkeby.etherscan.io/api", "https://rinkeby.etherscan.io"),
            Self::Goerli => ("https://api-goerli.etherscan.io/api", "https://goerli.etherscan.io"),
            Self::Kovan => ("https://api-kovan.etherscan.io/api", "https://kovan.etherscan.io"),
            Self::Bsc => ("https://api.bscscan.com/api", "https://bscscan.com"),
            Self::BscTestnet => {
                ("https://api-testnet.bscscan.com/api", "https://testnet.bscscan.com")
            }
            Self::Arbitrum => ("https://api.arbiscan.io/api", "https://arbiscan.io"),
        };

        EtherscanUrls { api_url, browser_url }
    }
}

impl TryFrom<u64> for NetworkId {
    type Error = u64;

    /// Fails with the rejected chain ID when no explorer is known for it.
    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id).ok_or(chain_id)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only view over the supported networks, keyed by chain ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointTable;

/// The process-wide endpoint table.
pub static ETHERSCAN_ENDPOINTS: EndpointTable = EndpointTable;

impl EndpointTable {
    /// Returns the explorer URLs for `chain_id`, or `None` if the chain is not supported.
    pub fn get(&self, chain_id: u64) -> Option<EtherscanUrls> {
        NetworkId::from_chain_id(chain_id).map(|network| network.etherscan_urls())
    }

    /// Check if the chain ID has an entry in the table
    pub fn is_supported_chain(&self, chain_id: u64) -> bool {
        NetworkId::from_chain_id(chain_id).is_some()
    }

    /// All supported chain IDs, ascending.
    pub fn supported_chain_ids(&self) -> Vec<u64> {
        NetworkId::ALL.iter().map(NetworkId::chain_id).collect()
    }

    /// Iterate over `(chain_id, urls)` entries, ascending by chain ID.
    pub fn iter(&self) -> impl Iterator<Item = (u64, EtherscanUrls)> {
        NetworkId::ALL.into_iter().map(|network| (network.chain_id(), network.etherscan_urls()))
    }

    /// Number of supported networks.
    pub fn len(&self) -> usize {
        NetworkId::ALL.len()
    }

    /// Always `false`; present for symmetry with [`EndpointTable::len`].
    pub fn is_empty(&self) -> bool {
        NetworkId::ALL.is_empty()
    }
}

/// Check if the chain ID has a known block explorer
pub fn is_supported_chain(chain_id: u64) -> bool {
    ETHERSCAN_ENDPOINTS.is_supported_chain(chain_id)
}
