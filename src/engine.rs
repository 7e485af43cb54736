//! Swap orchestration engine: quote acquisition, ordered multi-step
//! execution, and the cross-chain settlement poller.

use alloy_primitives::TxHash;
use bon::Builder;
use tracing::{debug, error, info, instrument, Level};

use crate::config::PollingConfig;
use crate::error::{Result, SwapError};
use crate::traits::{Aggregator, Clock, TransactionSigner};
use crate::types::{ExecutionResult, Quote, RouteFilter, RouteInfo, SettlementStatus, SwapRequest};

/// Cross-chain swap orchestration engine.
///
/// One engine value per tenant or test; there is no hidden global instance.
/// It is generic over:
///
/// - `A`: aggregator used for quotes, route discovery, and settlement status
/// - `C`: clock driving the settlement poll loop
///
/// Multiple independent flows may share one engine concurrently: the
/// aggregator and clock are read-only, and each `execute_swap` call
/// exclusively owns its own result log and poll state.
///
/// # Examples
///
/// ```rust,no_run
/// use swapflow::providers::{HttpAggregator, TokioClock};
/// use swapflow::{PollingConfig, SwapEngine};
///
/// # fn example() -> Result<(), swapflow::SwapError> {
/// let engine = SwapEngine::builder()
///     .aggregator(HttpAggregator::connect("https://router.example.com")?)
///     .clock(TokioClock::new())
///     .polling(PollingConfig::default())
///     .build();
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
pub struct SwapEngine<A, C>
where
    A: Aggregator,
    C: Clock,
{
    aggregator: A,
    clock: C,
    #[builder(default)]
    polling: PollingConfig,
}

impl<A, C> SwapEngine<A, C>
where
    A: Aggregator,
    C: Clock,
{
    /// Returns the aggregator.
    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the settlement polling configuration.
    pub fn polling(&self) -> PollingConfig {
        self.polling
    }

    /// Obtains an execution quote for a validated swap request.
    ///
    /// Also usable standalone (read-only) to preview pricing without
    /// committing to execution.
    ///
    /// # Errors
    ///
    /// Fails with [`SwapError::QuoteUnavailable`] when the aggregator call
    /// errors or returns a quote whose destination amount is zero or missing.
    #[instrument(skip(self, request), level = Level::INFO, fields(
        origin_chain_id = request.origin_chain_id,
        destination_chain_id = request.destination_chain_id,
    ))]
    pub async fn get_quote(&self, request: &SwapRequest) -> Result<Quote> {
        let quote = self
            .aggregator
            .prepare_quote(request)
            .await
            .map_err(|e| match e {
                err @ SwapError::QuoteUnavailable { .. } => err,
                other => SwapError::QuoteUnavailable {
                    reason: other.to_string(),
                },
            })?;

        if quote.destination_amount.is_zero() {
            error!(event = "quote_rejected_zero_destination");
            return Err(SwapError::QuoteUnavailable {
                reason: "aggregator returned a zero destination amount".to_string(),
            });
        }

        info!(
            origin_amount = %quote.origin_amount,
            destination_amount = %quote.destination_amount,
            estimated_execution_time_ms = quote.estimated_execution_time_ms,
            steps = quote.steps.len(),
            event = "quote_received"
        );

        Ok(quote)
    }

    /// Executes an accepted quote through the injected signing capability.
    ///
    /// Steps run in declared order; within each step, transactions run in
    /// declared order. Each confirmed hash is appended to the result
    /// immediately. A transaction whose action implies cross-chain
    /// settlement blocks the sequence on [`Self::wait_for_completion`]
    /// before the next transaction begins.
    ///
    /// # Errors
    ///
    /// A failure at any transaction aborts the remaining sequence with
    /// [`SwapError::ExecutionAborted`]. Hashes confirmed before the failure
    /// are carried in the error: those transactions are settled on-chain and
    /// there is no undo; partial execution is observable, not rolled back.
    /// Dropping the returned future likewise stops further submission and
    /// polling but cannot un-submit anything already confirmed.
    #[instrument(skip(self, quote, signer), level = Level::INFO, fields(steps = quote.steps.len()))]
    pub async fn execute_swap<S>(&self, quote: &Quote, signer: &S) -> Result<ExecutionResult>
    where
        S: TransactionSigner,
    {
        let mut confirmed: Vec<TxHash> = Vec::new();

        for (step_index, step) in quote.steps.iter().enumerate() {
            for transaction in &step.transactions {
                let tx_hash = match signer.sign_and_broadcast(transaction).await {
                    Ok(tx_hash) => tx_hash,
                    Err(e) => {
                        error!(
                            step = step_index,
                            chain_id = transaction.chain_id,
                            error = %e,
                            event = "transaction_failed"
                        );
                        return Err(Self::abort(confirmed, e));
                    }
                };

                confirmed.push(tx_hash);
                info!(
                    step = step_index,
                    tx_hash = %tx_hash,
                    chain_id = transaction.chain_id,
                    action = ?transaction.action,
                    event = "transaction_confirmed"
                );

                if transaction.action.requires_settlement() {
                    if let Err(e) = self.wait_for_completion(tx_hash, transaction.chain_id).await {
                        return Err(Self::abort(confirmed, e));
                    }
                }
            }
        }

        info!(transactions = confirmed.len(), event = "swap_executed");
        Ok(ExecutionResult {
            transaction_hashes: confirmed,
        })
    }

    /// Lists available routes matching the filter.
    ///
    /// # Errors
    ///
    /// Fails with [`SwapError::RoutesUnavailable`] when the aggregator call
    /// errors.
    #[instrument(skip(self, filter), level = Level::INFO)]
    pub async fn get_available_routes(&self, filter: &RouteFilter) -> Result<Vec<RouteInfo>> {
        let routes = self.aggregator.routes(filter).await.map_err(|e| match e {
            err @ SwapError::RoutesUnavailable { .. } => err,
            other => SwapError::RoutesUnavailable {
                reason: other.to_string(),
            },
        })?;

        debug!(routes = routes.len(), event = "routes_received");
        Ok(routes)
    }

    /// Polls the aggregator until a cross-chain transfer settles.
    ///
    /// State machine per (hash, chain): Pending → Completed | Failed |
    /// TimedOut. `COMPLETED` returns; `FAILED` fails immediately with
    /// [`SwapError::CrossChainTransferFailed`]; the aggregator's verdict is
    /// authoritative and is not retried. Any other status, or a status-query
    /// error, consumes one attempt from the shared budget and sleeps
    /// [`PollingConfig::poll_interval`] before the next tick. Exhausting
    /// [`PollingConfig::max_attempts`] fails with [`SwapError::PollTimeout`].
    #[instrument(skip(self), level = Level::INFO, fields(tx_hash = %tx_hash, chain_id = chain_id))]
    pub async fn wait_for_completion(&self, tx_hash: TxHash, chain_id: u64) -> Result<()> {
        let PollingConfig {
            max_attempts,
            poll_interval,
        } = self.polling;

        info!(
            max_attempts,
            poll_interval_ms = poll_interval.as_millis() as u64,
            event = "settlement_polling_started"
        );

        for attempt in 1..=max_attempts {
            match self.aggregator.transfer_status(tx_hash, chain_id).await {
                Ok(response) => match response.status {
                    SettlementStatus::Completed => {
                        info!(attempt, event = "settlement_complete");
                        return Ok(());
                    }
                    SettlementStatus::Failed => {
                        error!(attempt, event = "settlement_failed");
                        return Err(SwapError::CrossChainTransferFailed { tx_hash });
                    }
                    status @ (SettlementStatus::Pending | SettlementStatus::NotFound) => {
                        debug!(
                            attempt,
                            max_attempts,
                            status = ?status,
                            event = "settlement_pending"
                        );
                    }
                },
                Err(e) => {
                    // A failed status query spends an attempt exactly like a
                    // pending response; the budget is shared.
                    debug!(
                        attempt,
                        max_attempts,
                        error = %e,
                        event = "settlement_query_failed"
                    );
                }
            }

            self.clock.sleep(poll_interval).await;
        }

        error!(max_attempts, event = "settlement_timeout");
        Err(SwapError::PollTimeout {
            tx_hash,
            attempts: max_attempts,
        })
    }

    fn abort(confirmed: Vec<TxHash>, source: SwapError) -> SwapError {
        SwapError::ExecutionAborted {
            confirmed,
            source: Box::new(source),
        }
    }
}
