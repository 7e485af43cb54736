use alloy_primitives::TxHash;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("invalid amount format: {input:?}")]
    InvalidAmountFormat { input: String },

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("token \"{symbol}\" not found on chain {chain_id}")]
    AssetNotFound { symbol: String, chain_id: u64 },

    #[error("failed to get swap quote: {reason}")]
    QuoteUnavailable { reason: String },

    #[error("failed to get routes: {reason}")]
    RoutesUnavailable { reason: String },

    #[error("signing failed: {reason}")]
    SigningFailed { reason: String },

    #[error("transaction submission failed: {reason}")]
    SubmissionFailed { reason: String },

    #[error("cross-chain transfer failed for transaction {tx_hash}")]
    CrossChainTransferFailed { tx_hash: TxHash },

    #[error("timed out waiting for settlement of {tx_hash} after {attempts} attempts")]
    PollTimeout { tx_hash: TxHash, attempts: u32 },

    #[error("swap aborted after {} confirmed transaction(s): {source}", .confirmed.len())]
    ExecutionAborted {
        confirmed: Vec<TxHash>,
        #[source]
        source: Box<SwapError>,
    },

    #[error("aggregator request failed: {0}")]
    Aggregator(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("hex conversion error: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, SwapError>;
