//! # swapflow
//!
//! Cross-chain swap and bridge orchestration for wallet-holder flows.
//!
//! Given a source asset/amount and a desired destination asset (possibly on
//! a different chain), `swapflow` obtains an execution quote from an external
//! liquidity/bridge aggregator, submits the quoted transaction sequence
//! through an injected signing capability, and polls cross-chain settlement
//! until each transfer completes or definitively fails.
//!
//! The crate does not discover user intent, route liquidity, or sign
//! transactions itself: route discovery and settlement proofs are delegated
//! to the aggregator, and signing is a capability supplied by the wallet
//! layer. Each orchestration run is ephemeral and owned by its caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swapflow::providers::{HttpAggregator, TokioClock};
//! use swapflow::{parse_amount, registry, SwapEngine, SwapError, SwapRequest};
//!
//! # async fn example() -> Result<(), SwapError> {
//! let engine = SwapEngine::builder()
//!     .aggregator(HttpAggregator::connect("https://router.example.com")?)
//!     .clock(TokioClock::new())
//!     .build();
//!
//! // Resolve assets, then quote 0.1 ETH -> USDC on mainnet.
//! let eth = registry::find("ETH", 1).expect("ETH is configured on mainnet");
//! let usdc = registry::find("USDC", 1).expect("USDC is configured on mainnet");
//!
//! let request = SwapRequest::builder()
//!     .origin_chain_id(eth.chain_id())
//!     .origin_token(eth.address)
//!     .destination_chain_id(usdc.chain_id())
//!     .destination_token(usdc.address)
//!     .amount(parse_amount("0.1", eth.decimals)?)
//!     .sender("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse()?)
//!     .build();
//!
//! let quote = engine.get_quote(&request).await?;
//! // Execution takes a wallet-supplied TransactionSigner:
//! // let result = engine.execute_swap(&quote, &signer).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Previewing for a UI
//!
//! ```rust,no_run
//! use swapflow::providers::{HttpAggregator, TokioClock};
//! use swapflow::{SwapEngine, SwapError, SwapPreviewRequest, SwapService};
//!
//! # async fn example() -> Result<(), SwapError> {
//! let engine = SwapEngine::builder()
//!     .aggregator(HttpAggregator::connect("https://router.example.com")?)
//!     .clock(TokioClock::new())
//!     .build();
//! let service = SwapService::new(engine);
//!
//! let response = service
//!     .preview_swap(&SwapPreviewRequest {
//!         from_token: "ETH".to_string(),
//!         from_chain: 1,
//!         to_token: "USDC".to_string(),
//!         to_chain: 8453,
//!         amount: "0.1".to_string(),
//!         sender: "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse()?,
//!     })
//!     .await;
//!
//! if let Some(preview) = response.quote {
//!     println!("{} {} -> {} {}", preview.from_amount, preview.from_token,
//!         preview.to_amount, preview.to_token);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Exact amount conversion** between decimal strings and base units,
//!   with no floating point in the path
//! - **Strictly ordered execution** of quoted steps, with partial progress
//!   reported rather than lost
//! - **Bounded settlement polling** with an injectable clock for fast tests
//! - **No hidden globals**: every collaborator is constructor-injected
//!
//! ## Public API
//!
//! - [`SwapEngine`] - quote acquisition, ordered execution, settlement polling
//! - [`SwapService`] - presentation-facing previews and route summaries
//! - [`parse_amount`] and [`format_amount`] - the amount codec
//! - [`registry`] - the static token registry
//! - [`traits`] - the [`Aggregator`](traits::Aggregator),
//!   [`TransactionSigner`](traits::TransactionSigner), and
//!   [`Clock`](traits::Clock) seams
//! - [`providers`] - production trait implementations
//! - [`testing`] - fakes for integration tests
//! - [`SwapError`] and [`Result`] - error types for error handling

mod amount;
mod config;
mod engine;
mod error;
mod service;
mod types;

pub mod providers;
pub mod registry;
pub mod testing;
pub mod traits;

pub use amount::{format_amount, parse_amount};
pub use config::PollingConfig;
pub use engine::SwapEngine;
pub use error::{Result, SwapError};
pub use registry::{chain_display_name, ChainDisplay, TokenInfo, NATIVE_TOKEN_ADDRESS};
pub use service::{
    RouteSummary, RoutesResponse, SwapPreview, SwapPreviewRequest, SwapPreviewResponse,
    SwapService,
};
pub use types::{
    ExecutionResult, PreparedTransaction, Quote, RouteEndpoint, RouteFilter, RouteInfo,
    SettlementStatus, Step, StepAction, SwapRequest, TransferStatusResponse,
};
