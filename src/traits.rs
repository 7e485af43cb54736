//! Capability seams consumed by the orchestration engine.
//!
//! The engine never talks to the network or a wallet directly; it goes
//! through these traits. Abstracting the aggregator, the signing capability,
//! and time control lets tests substitute fake implementations and exercise
//! failure modes (stuck transfers, signing failures, poll timeouts) without
//! a real chain or API.
//!
//! Production implementations live in [`crate::providers`]; fakes for tests
//! live in [`crate::testing`].

use std::time::{Duration, Instant};

use alloy_primitives::TxHash;
use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    PreparedTransaction, Quote, RouteFilter, RouteInfo, SwapRequest, TransferStatusResponse,
};

/// Trait for the external liquidity/bridge aggregator.
///
/// All operations are reads; `prepare_quote` computes a quote without
/// submitting anything on-chain.
///
/// # Test Scenarios
///
/// Implementing this trait with fakes enables testing:
/// - Quotes with zero or missing destination amounts
/// - Settlement state progressions (Pending → Completed)
/// - Authoritative settlement failures
/// - Flaky status queries near the attempt cap
#[async_trait]
pub trait Aggregator: Send + Sync {
    /// Computes an execution quote for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the aggregator call fails or the response cannot
    /// be parsed.
    async fn prepare_quote(&self, request: &SwapRequest) -> Result<Quote>;

    /// Reports settlement status for a submitted cross-chain transaction.
    ///
    /// Called repeatedly (polling) until the status becomes terminal or the
    /// caller's attempt budget runs out.
    async fn transfer_status(&self, tx_hash: TxHash, chain_id: u64)
        -> Result<TransferStatusResponse>;

    /// Lists available routes matching the filter.
    ///
    /// Results are never cached; each call re-fetches.
    async fn routes(&self, filter: &RouteFilter) -> Result<Vec<RouteInfo>>;
}

/// Trait for the wallet-supplied signing capability.
///
/// Implementations sign the transaction, broadcast it, and wait for local
/// confirmation on its chain. The engine never sees private key material.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Signs and broadcasts a prepared transaction, returning its hash once
    /// locally confirmed.
    ///
    /// # Errors
    ///
    /// Fails with [`SigningFailed`](crate::SwapError::SigningFailed) or
    /// [`SubmissionFailed`](crate::SwapError::SubmissionFailed); either
    /// aborts the remaining execution sequence.
    async fn sign_and_broadcast(&self, transaction: &PreparedTransaction) -> Result<TxHash>;
}

/// Trait for time-based operations.
///
/// Abstracting sleep and time queries enables fast-forward testing where the
/// settlement poll loop runs to its attempt cap without actually waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Asynchronously sleeps for the given duration.
    async fn sleep(&self, duration: Duration);

    /// Returns the current instant in time.
    fn now(&self) -> Instant;
}
