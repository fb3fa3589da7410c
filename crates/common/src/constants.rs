// Chain IDs of the networks with a known block explorer.
// Full registry at: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-155.md#list-of-chain-ids

/// Ethereum Mainnet chain ID
pub const CHAIN_ID_ETHEREUM: u64 = 1;
/// Ropsten testnet chain ID
pub const CHAIN_ID_ROPSTEN: u64 = 3;
/// Rinkeby testnet chain ID
pub const CHAIN_ID_RINKEBY: u64 = 4;
/// Goerli testnet chain ID
pub const CHAIN_ID_GOERLI: u64 = 5;
/// Kovan testnet chain ID
pub const CHAIN_ID_KOVAN: u64 = 42;
/// BSC Mainnet chain ID
pub const CHAIN_ID_BSC: u64 = 56;
/// BSC Testnet chain ID
pub const CHAIN_ID_BSC_TESTNET: u64 = 97;
/// Arbitrum One chain ID
pub const CHAIN_ID_ARBITRUM: u64 = 42161;

/// JSON-RPC method returning the chain ID of the connected node
pub const ETH_CHAIN_ID_METHOD: &str = "eth_chainId";

/// Identifier attached to every error surfaced to the host tool
pub const PLUGIN_NAME: &str = "abiscan";

/// Network name the host tool uses for its in-process development chain
pub const DEFAULT_LOCAL_NETWORK_NAME: &str = "hardhat";
