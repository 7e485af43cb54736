//! Static registry of supported assets across chains.
//!
//! The table is defined at process start and never mutated. Lookups are keyed
//! by (symbol, chain id); uniqueness of that pair is an invariant verified by
//! test.

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address};

/// Sentinel address used for a chain's native asset (ETH, MATIC, ...).
pub const NATIVE_TOKEN_ADDRESS: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Descriptor for one asset on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: Address,
    pub decimals: u8,
    pub chain: NamedChain,
}

impl TokenInfo {
    /// Numeric chain id of the chain this asset lives on.
    pub fn chain_id(&self) -> u64 {
        self.chain as u64
    }

    /// Human-facing name of the chain this asset lives on.
    pub fn chain_name(&self) -> &'static str {
        self.chain.display_name()
    }

    /// Whether this entry is the chain's native asset rather than a contract.
    pub fn is_native(&self) -> bool {
        self.address == NATIVE_TOKEN_ADDRESS
    }
}

/// Human-facing chain names for supported chains.
pub trait ChainDisplay {
    /// The name shown to users for this chain.
    fn display_name(&self) -> &'static str;
}

impl ChainDisplay for NamedChain {
    fn display_name(&self) -> &'static str {
        use NamedChain::*;

        match self {
            Mainnet => "Ethereum",
            Arbitrum => "Arbitrum",
            Base => "Base",
            Optimism => "Optimism",
            Polygon => "Polygon",
            Sepolia => "Sepolia",
            other => other.as_str(),
        }
    }
}

/// Human-facing name for a raw chain id, falling back to `"Chain {id}"` for
/// chains outside the known set.
pub fn chain_display_name(chain_id: u64) -> String {
    NamedChain::try_from(chain_id)
        .map(|chain| chain.display_name().to_string())
        .unwrap_or_else(|_| format!("Chain {chain_id}"))
}

/// All configured assets, in declaration order.
static TOKENS: &[TokenInfo] = &[
    // Native ETH across chains
    TokenInfo {
        symbol: "ETH",
        name: "Ethereum",
        address: NATIVE_TOKEN_ADDRESS,
        decimals: 18,
        chain: NamedChain::Mainnet,
    },
    TokenInfo {
        symbol: "ETH",
        name: "Ethereum",
        address: NATIVE_TOKEN_ADDRESS,
        decimals: 18,
        chain: NamedChain::Base,
    },
    TokenInfo {
        symbol: "ETH",
        name: "Ethereum",
        address: NATIVE_TOKEN_ADDRESS,
        decimals: 18,
        chain: NamedChain::Polygon,
    },
    TokenInfo {
        symbol: "ETH",
        name: "Ethereum",
        address: NATIVE_TOKEN_ADDRESS,
        decimals: 18,
        chain: NamedChain::Arbitrum,
    },
    TokenInfo {
        symbol: "ETH",
        name: "Ethereum",
        address: NATIVE_TOKEN_ADDRESS,
        decimals: 18,
        chain: NamedChain::Optimism,
    },
    // USDC
    TokenInfo {
        symbol: "USDC",
        name: "USD Coin",
        address: address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
        decimals: 6,
        chain: NamedChain::Mainnet,
    },
    TokenInfo {
        symbol: "USDC",
        name: "USD Coin",
        address: address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        decimals: 6,
        chain: NamedChain::Base,
    },
    TokenInfo {
        symbol: "USDC",
        name: "USD Coin",
        address: address!("3c499c542cEF5E3811e1192ce70d8cC03d5c3359"),
        decimals: 6,
        chain: NamedChain::Polygon,
    },
    TokenInfo {
        symbol: "USDC",
        name: "USD Coin",
        address: address!("af88d065e77c8cC2239327C5EDb3A432268e5831"),
        decimals: 6,
        chain: NamedChain::Arbitrum,
    },
    TokenInfo {
        symbol: "USDC",
        name: "USD Coin",
        address: address!("0b2C639c533813f4Aa9D7837CAf62653d097Ff85"),
        decimals: 6,
        chain: NamedChain::Optimism,
    },
    // USDT
    TokenInfo {
        symbol: "USDT",
        name: "Tether USD",
        address: address!("dAC17F958D2ee523a2206206994597C13D831ec7"),
        decimals: 6,
        chain: NamedChain::Mainnet,
    },
    TokenInfo {
        symbol: "USDT",
        name: "Tether USD",
        address: address!("c2132D05D31c914a87C6611C10748AEb04B58e8F"),
        decimals: 6,
        chain: NamedChain::Polygon,
    },
    TokenInfo {
        symbol: "USDT",
        name: "Tether USD",
        address: address!("Fd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
        decimals: 6,
        chain: NamedChain::Arbitrum,
    },
    TokenInfo {
        symbol: "USDT",
        name: "Tether USD",
        address: address!("94b008aA00579c1307B0EF2c499aD98a8ce58e58"),
        decimals: 6,
        chain: NamedChain::Optimism,
    },
    // WETH
    TokenInfo {
        symbol: "WETH",
        name: "Wrapped Ether",
        address: address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        decimals: 18,
        chain: NamedChain::Mainnet,
    },
    TokenInfo {
        symbol: "WETH",
        name: "Wrapped Ether",
        address: address!("4200000000000000000000000000000000000006"),
        decimals: 18,
        chain: NamedChain::Base,
    },
    TokenInfo {
        symbol: "WETH",
        name: "Wrapped Ether",
        address: address!("7ceB23fD6bC0adD59E62ac25578270cFf1b9f619"),
        decimals: 18,
        chain: NamedChain::Polygon,
    },
    TokenInfo {
        symbol: "WETH",
        name: "Wrapped Ether",
        address: address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
        decimals: 18,
        chain: NamedChain::Arbitrum,
    },
    TokenInfo {
        symbol: "WETH",
        name: "Wrapped Ether",
        address: address!("4200000000000000000000000000000000000006"),
        decimals: 18,
        chain: NamedChain::Optimism,
    },
    // DAI
    TokenInfo {
        symbol: "DAI",
        name: "Dai Stablecoin",
        address: address!("6B175474E89094C44Da98b954EedeAC495271d0F"),
        decimals: 18,
        chain: NamedChain::Mainnet,
    },
    TokenInfo {
        symbol: "DAI",
        name: "Dai Stablecoin",
        address: address!("8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063"),
        decimals: 18,
        chain: NamedChain::Polygon,
    },
    TokenInfo {
        symbol: "DAI",
        name: "Dai Stablecoin",
        address: address!("DA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
        decimals: 18,
        chain: NamedChain::Arbitrum,
    },
    TokenInfo {
        symbol: "DAI",
        name: "Dai Stablecoin",
        address: address!("DA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
        decimals: 18,
        chain: NamedChain::Optimism,
    },
    // MATIC
    TokenInfo {
        symbol: "MATIC",
        name: "Polygon",
        address: address!("0000000000000000000000000000000000001010"),
        decimals: 18,
        chain: NamedChain::Polygon,
    },
];

/// Looks up the unique descriptor for a (symbol, chain) pair.
///
/// Symbol matching is case-insensitive. An absent result means the asset is
/// not configured on that chain and should be treated as unsupported, not
/// retried.
pub fn find(symbol: &str, chain_id: u64) -> Option<&'static TokenInfo> {
    TOKENS
        .iter()
        .find(|token| token.symbol.eq_ignore_ascii_case(symbol) && token.chain_id() == chain_id)
}

/// All assets configured on the given chain, in declaration order.
pub fn tokens_for_chain(chain_id: u64) -> impl Iterator<Item = &'static TokenInfo> {
    TOKENS
        .iter()
        .filter(move |token| token.chain_id() == chain_id)
}
