//! Presentation-facing preview layer.
//!
//! [`SwapService`] composes the token registry, the amount codec, and the
//! engine into the request/response shapes the chat/UI layer consumes:
//! validated swap previews with display amounts and price impact, and route
//! discovery summaries. Shape changes here require a version bump.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::amount::{format_amount, parse_amount};
use crate::engine::SwapEngine;
use crate::error::{Result, SwapError};
use crate::registry::{self, chain_display_name};
use crate::traits::{Aggregator, Clock};
use crate::types::{RouteEndpoint, RouteFilter, RouteInfo, SwapRequest};

/// Fallback shown when the aggregator reports no execution-time estimate.
const DEFAULT_ESTIMATED_TIME_MS: u64 = 180_000;

/// Route discovery page size.
const DEFAULT_ROUTE_LIMIT: u32 = 20;

/// A swap preview request as produced by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapPreviewRequest {
    /// Symbol like "ETH", "USDC".
    pub from_token: String,
    pub from_chain: u64,
    pub to_token: String,
    pub to_chain: u64,
    /// Human-typed decimal amount like "0.1".
    pub amount: String,
    pub sender: Address,
}

/// A priced swap preview, with amounts in display form.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapPreview {
    pub from_token: String,
    pub from_chain: String,
    pub from_amount: String,
    pub to_token: String,
    pub to_chain: String,
    pub to_amount: String,
    pub estimated_time_ms: u64,
    pub price_impact: f64,
}

/// Preview response envelope: a preview on success, a human-readable error
/// string on failure.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapPreviewResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<SwapPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SwapPreviewResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            quote: None,
            error: Some(message.into()),
        }
    }
}

/// One supported pairing in display form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub from_token: String,
    pub from_chain: String,
    pub to_token: String,
    pub to_chain: String,
}

/// Route discovery response envelope.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutesResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Swap preview and route discovery for the presentation layer.
pub struct SwapService<A, C>
where
    A: Aggregator,
    C: Clock,
{
    engine: SwapEngine<A, C>,
}

impl<A, C> SwapService<A, C>
where
    A: Aggregator,
    C: Clock,
{
    pub fn new(engine: SwapEngine<A, C>) -> Self {
        Self { engine }
    }

    /// Returns the underlying engine, e.g. to execute a previewed swap.
    pub fn engine(&self) -> &SwapEngine<A, C> {
        &self.engine
    }

    /// Resolves, prices, and formats a swap preview.
    ///
    /// Never fails: input and aggregator errors come back as an unsuccessful
    /// response with a human-readable message. Caller-input errors (bad
    /// symbol, bad amount) surface verbatim so the user can correct them;
    /// aggregator errors are mapped to a friendlier message when they match
    /// known user-actionable conditions.
    pub async fn preview_swap(&self, request: &SwapPreviewRequest) -> SwapPreviewResponse {
        if request.from_token.trim().is_empty()
            || request.to_token.trim().is_empty()
            || request.amount.trim().is_empty()
        {
            return SwapPreviewResponse::failure("Missing required swap parameters");
        }

        match self.build_preview(request).await {
            Ok(preview) => SwapPreviewResponse {
                success: true,
                quote: Some(preview),
                error: None,
            },
            Err(e) => {
                warn!(error = %e, event = "swap_preview_failed");
                SwapPreviewResponse::failure(user_message(&e))
            }
        }
    }

    async fn build_preview(&self, request: &SwapPreviewRequest) -> Result<SwapPreview> {
        let from = registry::find(&request.from_token, request.from_chain).ok_or_else(|| {
            SwapError::AssetNotFound {
                symbol: request.from_token.clone(),
                chain_id: request.from_chain,
            }
        })?;
        let to = registry::find(&request.to_token, request.to_chain).ok_or_else(|| {
            SwapError::AssetNotFound {
                symbol: request.to_token.clone(),
                chain_id: request.to_chain,
            }
        })?;

        let amount = parse_amount(&request.amount, from.decimals)?;

        let swap_request = SwapRequest::builder()
            .origin_chain_id(from.chain_id())
            .origin_token(from.address)
            .destination_chain_id(to.chain_id())
            .destination_token(to.address)
            .amount(amount)
            .sender(request.sender)
            .build();

        let quote = self.engine.get_quote(&swap_request).await?;

        let from_amount = format_amount(quote.origin_amount, from.decimals);
        let to_amount = format_amount(quote.destination_amount, to.decimals);
        let price_impact = price_impact(&from_amount, &to_amount);

        let estimated_time_ms = if quote.estimated_execution_time_ms == 0 {
            DEFAULT_ESTIMATED_TIME_MS
        } else {
            quote.estimated_execution_time_ms
        };

        debug!(
            from_amount = %from_amount,
            to_amount = %to_amount,
            price_impact,
            event = "swap_preview_built"
        );

        Ok(SwapPreview {
            from_token: from.symbol.to_string(),
            from_chain: from.chain_name().to_string(),
            from_amount,
            to_token: to.symbol.to_string(),
            to_chain: to.chain_name().to_string(),
            to_amount,
            estimated_time_ms,
            price_impact,
        })
    }

    /// Lists supported route pairings, optionally narrowed to an origin
    /// asset. An unresolvable origin filter is ignored rather than treated
    /// as an error.
    pub async fn available_routes(
        &self,
        from_token: Option<&str>,
        from_chain: Option<u64>,
    ) -> RoutesResponse {
        let mut filter = RouteFilter::builder().limit(DEFAULT_ROUTE_LIMIT).build();
        if let (Some(symbol), Some(chain_id)) = (from_token, from_chain) {
            if let Some(token) = registry::find(symbol, chain_id) {
                filter.origin_chain_id = Some(token.chain_id());
                filter.origin_token = Some(token.address);
            }
        }

        match self.engine.get_available_routes(&filter).await {
            Ok(routes) => RoutesResponse {
                success: true,
                routes: Some(routes.iter().map(route_summary).collect()),
                error: None,
            },
            Err(e) => {
                warn!(error = %e, event = "route_discovery_failed");
                RoutesResponse {
                    success: false,
                    routes: None,
                    error: Some(user_message(&e)),
                }
            }
        }
    }
}

fn route_summary(route: &RouteInfo) -> RouteSummary {
    RouteSummary {
        from_token: route.origin_token.symbol.clone(),
        from_chain: endpoint_chain(&route.origin_token),
        to_token: route.destination_token.symbol.clone(),
        to_chain: endpoint_chain(&route.destination_token),
    }
}

fn endpoint_chain(endpoint: &RouteEndpoint) -> String {
    endpoint
        .chain_name
        .clone()
        .unwrap_or_else(|| chain_display_name(endpoint.chain_id))
}

/// Price impact over *display* amounts, `|1 - to/from| * 100`.
///
/// Raw base units would skew the ratio by the decimal difference between the
/// two assets, so only decimal-converted strings go in. A non-finite result
/// (zero origin display) is coerced to 0 rather than propagated.
fn price_impact(from_display: &str, to_display: &str) -> f64 {
    let from: f64 = from_display.parse().unwrap_or(0.0);
    let to: f64 = to_display.parse().unwrap_or(0.0);

    let impact = (1.0 - to / from).abs() * 100.0;
    if impact.is_finite() {
        impact
    } else {
        0.0
    }
}

/// Maps an orchestration error to the string shown to the user.
///
/// Aggregator failures get a more specific message when they match known
/// user-actionable conditions; caller-input errors surface verbatim.
fn user_message(error: &SwapError) -> String {
    match error {
        SwapError::QuoteUnavailable { reason } => {
            map_aggregator_reason(reason, "Failed to prepare swap quote")
        }
        SwapError::RoutesUnavailable { reason } => {
            map_aggregator_reason(reason, "Failed to get swap routes")
        }
        other => other.to_string(),
    }
}

fn map_aggregator_reason(reason: &str, fallback: &str) -> String {
    let lowered = reason.to_ascii_lowercase();
    if lowered.contains("insufficient") {
        "Insufficient balance for this swap".to_string()
    } else if lowered.contains("not supported") || lowered.contains("unsupported") {
        "This token pair is not supported for swapping".to_string()
    } else if lowered.contains("network") {
        "Network error - please try again".to_string()
    } else if reason.is_empty() {
        fallback.to_string()
    } else {
        reason.to_string()
    }
}
