//! Test utilities and fake implementations of the engine's trait seams.
//!
//! These fakes let integration tests drive the full orchestration flow
//! (quoting, ordered execution, settlement polling) under adversarial
//! conditions such as stuck transfers, flaky status queries, and signing
//! failures,
//! without a real blockchain, wallet, or aggregator.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use alloy_primitives::TxHash;
use async_trait::async_trait;

use crate::error::{Result, SwapError};
use crate::traits::{Aggregator, Clock, TransactionSigner};
use crate::types::{
    PreparedTransaction, Quote, RouteFilter, RouteInfo, SettlementStatus, SwapRequest,
    TransferStatusResponse,
};

// ============================================================================
// Fake Aggregator
// ============================================================================

/// One scripted outcome of a settlement status query.
#[derive(Clone, Debug)]
pub enum StatusOutcome {
    /// The query succeeds with the given status.
    Status(SettlementStatus),
    /// The query itself fails (network blip, 5xx, ...).
    QueryError(String),
}

/// A fake aggregator returning pre-configured quotes, routes, and per-hash
/// status sequences.
///
/// Status sequences allow testing state progressions like
/// Pending → Pending → Completed; once a sequence is exhausted its last
/// outcome repeats, so an always-pending transfer is just a one-element
/// sequence.
#[derive(Clone, Debug, Default)]
pub struct FakeAggregator {
    quote: Arc<Mutex<Option<Quote>>>,
    quote_error: Arc<Mutex<Option<String>>>,
    routes: Arc<Mutex<Vec<RouteInfo>>>,
    routes_error: Arc<Mutex<Option<String>>>,
    statuses: Arc<Mutex<HashMap<TxHash, Vec<StatusOutcome>>>>,
    status_calls: Arc<Mutex<HashMap<TxHash, usize>>>,
}

impl FakeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the quote returned by every `prepare_quote` call.
    pub fn set_quote(&self, quote: Quote) {
        *self.quote.lock().unwrap() = Some(quote);
    }

    /// Configure `prepare_quote` to fail with the given reason.
    pub fn set_quote_error(&self, reason: &str) {
        *self.quote_error.lock().unwrap() = Some(reason.to_string());
    }

    /// Configure the routes returned by every `routes` call.
    pub fn set_routes(&self, routes: Vec<RouteInfo>) {
        *self.routes.lock().unwrap() = routes;
    }

    /// Configure `routes` to fail with the given reason.
    pub fn set_routes_error(&self, reason: &str) {
        *self.routes_error.lock().unwrap() = Some(reason.to_string());
    }

    /// Configure a sequence of status outcomes for a transaction hash.
    ///
    /// Each `transfer_status` call consumes the next outcome; the last one
    /// repeats once the sequence is exhausted.
    pub fn add_status_sequence(&self, tx_hash: TxHash, outcomes: Vec<StatusOutcome>) {
        self.statuses.lock().unwrap().insert(tx_hash, outcomes);
    }

    /// Configure a transfer that never leaves `PENDING` (for timeout tests).
    pub fn add_always_pending(&self, tx_hash: TxHash) {
        self.add_status_sequence(
            tx_hash,
            vec![StatusOutcome::Status(SettlementStatus::Pending)],
        );
    }

    /// Number of `transfer_status` calls made for a transaction hash.
    pub fn status_call_count(&self, tx_hash: TxHash) -> usize {
        self.status_calls
            .lock()
            .unwrap()
            .get(&tx_hash)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl Aggregator for FakeAggregator {
    async fn prepare_quote(&self, _request: &SwapRequest) -> Result<Quote> {
        if let Some(reason) = self.quote_error.lock().unwrap().clone() {
            return Err(SwapError::Aggregator(reason));
        }
        self.quote
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| SwapError::Aggregator("no quote configured".to_string()))
    }

    async fn transfer_status(
        &self,
        tx_hash: TxHash,
        _chain_id: u64,
    ) -> Result<TransferStatusResponse> {
        let call_index = {
            let mut calls = self.status_calls.lock().unwrap();
            let count = calls.entry(tx_hash).or_insert(0);
            *count += 1;
            *count - 1
        };

        let outcome = {
            let statuses = self.statuses.lock().unwrap();
            match statuses.get(&tx_hash) {
                Some(sequence) if !sequence.is_empty() => {
                    sequence[call_index.min(sequence.len() - 1)].clone()
                }
                // Unconfigured hashes look like transfers the aggregator has
                // not indexed yet.
                _ => StatusOutcome::Status(SettlementStatus::NotFound),
            }
        };

        match outcome {
            StatusOutcome::Status(status) => Ok(TransferStatusResponse { status }),
            StatusOutcome::QueryError(reason) => Err(SwapError::Aggregator(reason)),
        }
    }

    async fn routes(&self, _filter: &RouteFilter) -> Result<Vec<RouteInfo>> {
        if let Some(reason) = self.routes_error.lock().unwrap().clone() {
            return Err(SwapError::Aggregator(reason));
        }
        Ok(self.routes.lock().unwrap().clone())
    }
}

// ============================================================================
// Fake Signer
// ============================================================================

/// One scripted outcome of a `sign_and_broadcast` call.
#[derive(Clone, Debug)]
pub enum SignerOutcome {
    Confirmed(TxHash),
    SigningFailure(String),
    SubmissionFailure(String),
}

/// A fake signing capability that replays queued outcomes and records every
/// submitted transaction in order.
#[derive(Clone, Debug, Default)]
pub struct FakeSigner {
    outcomes: Arc<Mutex<VecDeque<SignerOutcome>>>,
    submitted: Arc<Mutex<Vec<PreparedTransaction>>>,
}

impl FakeSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful confirmation returning the given hash.
    pub fn queue_confirmation(&self, tx_hash: TxHash) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(SignerOutcome::Confirmed(tx_hash));
    }

    /// Queue a signing failure.
    pub fn queue_signing_failure(&self, reason: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(SignerOutcome::SigningFailure(reason.to_string()));
    }

    /// Queue a broadcast/confirmation failure.
    pub fn queue_submission_failure(&self, reason: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(SignerOutcome::SubmissionFailure(reason.to_string()));
    }

    /// Transactions handed to the signer, in submission order.
    pub fn submitted(&self) -> Vec<PreparedTransaction> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSigner for FakeSigner {
    async fn sign_and_broadcast(&self, transaction: &PreparedTransaction) -> Result<TxHash> {
        self.submitted.lock().unwrap().push(transaction.clone());

        match self.outcomes.lock().unwrap().pop_front() {
            Some(SignerOutcome::Confirmed(tx_hash)) => Ok(tx_hash),
            Some(SignerOutcome::SigningFailure(reason)) => {
                Err(SwapError::SigningFailed { reason })
            }
            Some(SignerOutcome::SubmissionFailure(reason)) => {
                Err(SwapError::SubmissionFailed { reason })
            }
            None => Err(SwapError::SigningFailed {
                reason: "no signer outcome queued".to_string(),
            }),
        }
    }
}

// ============================================================================
// Fake Clock
// ============================================================================

/// A fake clock that records sleeps and advances instantly, so poll loops
/// run to their attempt cap without wall-clock waiting.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current_time: Arc<Mutex<Instant>>,
    sleep_log: Arc<Mutex<Vec<Duration>>>,
}

impl Default for FakeClock {
    fn default() -> Self {
        Self {
            current_time: Arc::new(Mutex::new(Instant::now())),
            sleep_log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fast-forward the clock by the given duration.
    pub fn advance(&self, duration: Duration) {
        *self.current_time.lock().unwrap() += duration;
    }

    /// Total time "slept" through this clock.
    pub fn total_sleep_time(&self) -> Duration {
        self.sleep_log.lock().unwrap().iter().sum()
    }

    /// Number of times sleep was called.
    pub fn sleep_count(&self) -> usize {
        self.sleep_log.lock().unwrap().len()
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        self.sleep_log.lock().unwrap().push(duration);
        self.advance(duration);
    }

    fn now(&self) -> Instant {
        *self.current_time.lock().unwrap()
    }
}
