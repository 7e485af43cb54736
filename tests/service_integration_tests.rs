//! Integration tests for the preview layer over fake collaborators
//!
//! These cover the caller-facing response contract: display-amount
//! formatting, price impact, chain display names, and user-facing error
//! messages.

use alloy_primitives::{Address, U256};
use swapflow::testing::{FakeAggregator, FakeClock};
use swapflow::{
    Quote, RouteEndpoint, RouteInfo, SwapEngine, SwapPreviewRequest, SwapService,
};

fn create_test_service(aggregator: FakeAggregator) -> SwapService<FakeAggregator, FakeClock> {
    let engine = SwapEngine::builder()
        .aggregator(aggregator)
        .clock(FakeClock::new())
        .build();
    SwapService::new(engine)
}

fn preview_request(from: &str, to: &str, amount: &str) -> SwapPreviewRequest {
    SwapPreviewRequest {
        from_token: from.to_string(),
        from_chain: 1,
        to_token: to.to_string(),
        to_chain: 1,
        amount: amount.to_string(),
        sender: Address::ZERO,
    }
}

fn eth_to_usdc_quote() -> Quote {
    Quote {
        // 0.1 ETH in, 350 USDC out.
        origin_amount: U256::from(100_000_000_000_000_000u128),
        destination_amount: U256::from(350_000_000u64),
        estimated_execution_time_ms: 120_000,
        steps: vec![],
    }
}

#[tokio::test]
async fn test_preview_swap_end_to_end() {
    let aggregator = FakeAggregator::new();
    aggregator.set_quote(eth_to_usdc_quote());
    let service = create_test_service(aggregator);

    let response = service
        .preview_swap(&preview_request("ETH", "USDC", "0.1"))
        .await;

    assert!(response.success, "unexpected error: {:?}", response.error);
    let preview = response.quote.expect("successful preview carries a quote");

    assert_eq!(preview.from_token, "ETH");
    assert_eq!(preview.from_chain, "Ethereum");
    assert_eq!(preview.from_amount, "0.1");
    assert_eq!(preview.to_token, "USDC");
    assert_eq!(preview.to_chain, "Ethereum");
    assert_eq!(preview.to_amount, "350.0");
    assert_eq!(preview.estimated_time_ms, 120_000);
    // |1 - 350/0.1| * 100, computed over display amounts.
    assert!((preview.price_impact - 349_900.0).abs() < 1e-3);
}

#[tokio::test]
async fn test_preview_swap_applies_default_estimate() {
    let aggregator = FakeAggregator::new();
    let mut quote = eth_to_usdc_quote();
    quote.estimated_execution_time_ms = 0;
    aggregator.set_quote(quote);
    let service = create_test_service(aggregator);

    let response = service
        .preview_swap(&preview_request("ETH", "USDC", "0.1"))
        .await;

    assert_eq!(response.quote.unwrap().estimated_time_ms, 180_000);
}

#[tokio::test]
async fn test_preview_swap_cross_chain_display_names() {
    let aggregator = FakeAggregator::new();
    aggregator.set_quote(eth_to_usdc_quote());
    let service = create_test_service(aggregator);

    let response = service
        .preview_swap(&SwapPreviewRequest {
            from_token: "eth".to_string(),
            from_chain: 1,
            to_token: "usdc".to_string(),
            to_chain: 8453,
            amount: "0.1".to_string(),
            sender: Address::ZERO,
        })
        .await;

    let preview = response.quote.expect("symbols resolve case-insensitively");
    assert_eq!(preview.from_chain, "Ethereum");
    assert_eq!(preview.to_chain, "Base");
}

#[tokio::test]
async fn test_preview_swap_unknown_token() {
    let service = create_test_service(FakeAggregator::new());

    let response = service
        .preview_swap(&preview_request("NOPE", "USDC", "0.1"))
        .await;

    assert!(!response.success);
    assert!(response.quote.is_none());
    assert_eq!(
        response.error.as_deref(),
        Some("token \"NOPE\" not found on chain 1")
    );
}

#[tokio::test]
async fn test_preview_swap_zero_amount() {
    let service = create_test_service(FakeAggregator::new());

    let response = service
        .preview_swap(&preview_request("ETH", "USDC", "0"))
        .await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("amount must be greater than zero")
    );
}

#[tokio::test]
async fn test_preview_swap_malformed_amount() {
    let service = create_test_service(FakeAggregator::new());

    let response = service
        .preview_swap(&preview_request("ETH", "USDC", "1.2.3"))
        .await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("invalid amount format: \"1.2.3\"")
    );
}

#[tokio::test]
async fn test_preview_swap_missing_parameters() {
    let service = create_test_service(FakeAggregator::new());

    let response = service.preview_swap(&preview_request("ETH", "USDC", "")).await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Missing required swap parameters")
    );
}

#[tokio::test]
async fn test_preview_swap_maps_insufficient_balance_errors() {
    let aggregator = FakeAggregator::new();
    aggregator.set_quote_error("execution reverted: insufficient funds for transfer");
    let service = create_test_service(aggregator);

    let response = service
        .preview_swap(&preview_request("ETH", "USDC", "0.1"))
        .await;

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Insufficient balance for this swap")
    );
}

#[tokio::test]
async fn test_preview_swap_rejects_zero_destination_quote() {
    let aggregator = FakeAggregator::new();
    aggregator.set_quote(Quote {
        origin_amount: U256::from(100_000_000_000_000_000u128),
        destination_amount: U256::ZERO,
        estimated_execution_time_ms: 0,
        steps: vec![],
    });
    let service = create_test_service(aggregator);

    let response = service
        .preview_swap(&preview_request("ETH", "USDC", "0.1"))
        .await;

    assert!(!response.success);
    assert!(response
        .error
        .as_deref()
        .unwrap()
        .contains("zero destination"));
}

fn route(
    from: (&str, u64, Option<&str>),
    to: (&str, u64, Option<&str>),
) -> RouteInfo {
    RouteInfo {
        origin_token: RouteEndpoint {
            symbol: from.0.to_string(),
            chain_id: from.1,
            chain_name: from.2.map(str::to_string),
            address: Address::ZERO,
        },
        destination_token: RouteEndpoint {
            symbol: to.0.to_string(),
            chain_id: to.1,
            chain_name: to.2.map(str::to_string),
            address: Address::ZERO,
        },
    }
}

#[tokio::test]
async fn test_available_routes_summarizes_endpoints() {
    let aggregator = FakeAggregator::new();
    aggregator.set_routes(vec![
        route(("ETH", 1, Some("Ethereum")), ("USDC", 8453, None)),
        route(("DAI", 10, None), ("USDT", 424_242, None)),
    ]);
    let service = create_test_service(aggregator);

    let response = service.available_routes(Some("ETH"), Some(1)).await;

    assert!(response.success);
    let routes = response.routes.unwrap();
    assert_eq!(routes.len(), 2);

    assert_eq!(routes[0].from_chain, "Ethereum");
    // Missing chain names fall back to the registry's display names.
    assert_eq!(routes[0].to_chain, "Base");
    assert_eq!(routes[1].from_chain, "Optimism");
    // Unknown chains fall back to the raw id.
    assert_eq!(routes[1].to_chain, "Chain 424242");
}

#[tokio::test]
async fn test_available_routes_reports_errors() {
    let aggregator = FakeAggregator::new();
    aggregator.set_routes_error("route index offline");
    let service = create_test_service(aggregator);

    let response = service.available_routes(None, None).await;

    assert!(!response.success);
    assert!(response.routes.is_none());
    assert!(response.error.unwrap().contains("route index offline"));
}
