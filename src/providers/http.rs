//! HTTP aggregator client.

use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::error::Result;
use crate::traits::Aggregator;
use crate::types::{Quote, RouteFilter, RouteInfo, SwapRequest, TransferStatusResponse};

/// Quote endpoint path, relative to the aggregator base URL.
const QUOTE_PATH: &str = "v1/quote";
/// Settlement status endpoint path.
const STATUS_PATH: &str = "v1/status";
/// Route discovery endpoint path.
const ROUTES_PATH: &str = "v1/routes";

/// Aggregator client speaking the service's HTTP API.
///
/// All three operations are request/response reads; the quote call computes
/// pricing without submitting anything on-chain.
///
/// # Examples
///
/// ```rust,no_run
/// use swapflow::providers::HttpAggregator;
///
/// # fn example() -> Result<(), swapflow::SwapError> {
/// let aggregator = HttpAggregator::connect("https://router.example.com")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpAggregator {
    base_url: Url,
    client: Client,
}

impl HttpAggregator {
    /// Creates a client against the given aggregator base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Parses `base_url` and creates a client against it.
    pub fn connect(base_url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// Returns the aggregator base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Wire shape of the quote request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRequestBody {
    origin_chain_id: u64,
    origin_token_address: Address,
    destination_chain_id: u64,
    destination_token_address: Address,
    /// Base units as a decimal string.
    amount: String,
    sender: Address,
    receiver: Address,
}

impl From<&SwapRequest> for QuoteRequestBody {
    fn from(request: &SwapRequest) -> Self {
        Self {
            origin_chain_id: request.origin_chain_id,
            origin_token_address: request.origin_token,
            destination_chain_id: request.destination_chain_id,
            destination_token_address: request.destination_token,
            amount: request.amount.to_string(),
            sender: request.sender,
            receiver: request.sender,
        }
    }
}

#[async_trait]
impl Aggregator for HttpAggregator {
    #[instrument(skip(self, request), fields(
        origin_chain_id = request.origin_chain_id,
        destination_chain_id = request.destination_chain_id,
    ))]
    async fn prepare_quote(&self, request: &SwapRequest) -> Result<Quote> {
        let url = self.base_url.join(QUOTE_PATH)?;
        trace!(url = %url, "Requesting quote from aggregator");

        let response = self
            .client
            .post(url)
            .json(&QuoteRequestBody::from(request))
            .send()
            .await?
            .error_for_status()?;

        let quote = response.json::<Quote>().await?;
        debug!(steps = quote.steps.len(), "Quote response parsed");
        Ok(quote)
    }

    #[instrument(skip(self), fields(tx_hash = %tx_hash, chain_id = chain_id))]
    async fn transfer_status(
        &self,
        tx_hash: TxHash,
        chain_id: u64,
    ) -> Result<TransferStatusResponse> {
        let mut url = self.base_url.join(STATUS_PATH)?;
        url.query_pairs_mut()
            .append_pair("transactionHash", &tx_hash.to_string())
            .append_pair("chainId", &chain_id.to_string());
        trace!(url = %url, "Requesting settlement status from aggregator");

        let response = self.client.get(url).send().await?.error_for_status()?;

        let status = response.json::<TransferStatusResponse>().await?;
        debug!(status = ?status.status, "Status response parsed");
        Ok(status)
    }

    #[instrument(skip(self, filter))]
    async fn routes(&self, filter: &RouteFilter) -> Result<Vec<RouteInfo>> {
        let mut url = self.base_url.join(ROUTES_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(chain_id) = filter.origin_chain_id {
                pairs.append_pair("originChainId", &chain_id.to_string());
            }
            if let Some(token) = filter.origin_token {
                pairs.append_pair("originTokenAddress", &token.to_string());
            }
            if let Some(chain_id) = filter.destination_chain_id {
                pairs.append_pair("destinationChainId", &chain_id.to_string());
            }
            if let Some(token) = filter.destination_token {
                pairs.append_pair("destinationTokenAddress", &token.to_string());
            }
            if let Some(limit) = filter.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        trace!(url = %url, "Requesting routes from aggregator");

        let response = self.client.get(url).send().await?.error_for_status()?;

        let routes = response.json::<Vec<RouteInfo>>().await?;
        debug!(routes = routes.len(), "Routes response parsed");
        Ok(routes)
    }
}
