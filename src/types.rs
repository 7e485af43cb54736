//! Request, quote, and status types exchanged with the aggregator.

use alloy_primitives::{Address, Bytes, TxHash, U256};
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for requesting a swap or bridge quote.
///
/// Chain ids and token addresses must already be resolved against the
/// [`registry`](crate::registry) before a request is built; the quote path
/// does not re-validate symbols. The amount is in origin base units and must
/// be positive (see [`parse_amount`](crate::parse_amount)).
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub origin_chain_id: u64,
    pub origin_token: Address,
    pub destination_chain_id: u64,
    pub destination_token: Address,
    pub amount: U256,
    pub sender: Address,
}

/// A priced, time-bounded proposal for converting one asset into another,
/// including the exact transaction steps needed to realize it.
///
/// Produced once per quote call and immutable thereafter. Step order, and
/// transaction order within a step, must be preserved exactly as returned by
/// the aggregator; reordering can invalidate nonces or cross-chain proofs.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(deserialize_with = "deserialize_amount")]
    pub origin_amount: U256,
    /// Zero when the aggregator omitted the field; such quotes are rejected
    /// by [`SwapEngine::get_quote`](crate::SwapEngine::get_quote) before use.
    #[serde(default, deserialize_with = "deserialize_amount_or_zero")]
    pub destination_amount: U256,
    #[serde(default)]
    pub estimated_execution_time_ms: u64,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One stage of a quoted execution plan.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    pub action: StepAction,
    #[serde(default)]
    pub transactions: Vec<PreparedTransaction>,
}

/// Declared effect of a step or transaction.
///
/// Closed set: the settlement decision below is an exhaustive match, never a
/// string comparison. Unknown wire tags decode as [`StepAction::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    /// Same-chain exchange; final once locally confirmed.
    Swap,
    /// Cross-chain transfer; not final until the aggregator reports
    /// settlement on the destination chain.
    Bridge,
    /// Anything else the aggregator schedules (approvals, fee payments).
    #[default]
    #[serde(other)]
    Other,
}

impl StepAction {
    /// Whether a locally-confirmed transaction of this kind still awaits
    /// settlement on a second chain.
    pub fn requires_settlement(&self) -> bool {
        matches!(self, StepAction::Bridge)
    }
}

/// An opaque transaction descriptor to be signed and broadcast externally.
///
/// The engine reads only `chain_id` and `action`; everything else passes
/// through to the signer untouched.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTransaction {
    pub chain_id: u64,
    pub to: Address,
    #[serde(default)]
    pub data: Bytes,
    #[serde(default, deserialize_with = "deserialize_amount_or_zero")]
    pub value: U256,
    #[serde(default)]
    pub action: StepAction,
}

/// Broadcast transaction hashes in submission order, one per submitted
/// transaction.
///
/// Appended to as each transaction confirms; never reordered or truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub transaction_hashes: Vec<TxHash>,
}

/// Settlement status reported by the aggregator for a cross-chain transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementStatus {
    Completed,
    Failed,
    Pending,
    /// The aggregator has not indexed the transaction yet. Non-terminal;
    /// treated like `Pending` for retry purposes.
    NotFound,
}

impl SettlementStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SettlementStatus::Completed | SettlementStatus::Failed)
    }
}

/// Response from the aggregator's settlement status endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatusResponse {
    pub status: SettlementStatus,
}

/// Filter for route discovery.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilter {
    pub origin_chain_id: Option<u64>,
    pub origin_token: Option<Address>,
    pub destination_chain_id: Option<u64>,
    pub destination_token: Option<Address>,
    pub limit: Option<u32>,
}

/// One endpoint (asset + chain) of a discovered route.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteEndpoint {
    pub symbol: String,
    pub chain_id: u64,
    #[serde(default)]
    pub chain_name: Option<String>,
    pub address: Address,
}

/// A supported origin/destination pairing reported by the aggregator.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub origin_token: RouteEndpoint,
    pub destination_token: RouteEndpoint,
}

/// Amounts on the wire arrive as decimal strings, 0x-hex strings, or plain
/// integers depending on aggregator version; all three decode to `U256`.
fn deserialize_wire_amount<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireAmount {
        Integer(u64),
        Text(String),
    }

    match Option::<WireAmount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WireAmount::Integer(value)) => Ok(Some(U256::from(value))),
        Some(WireAmount::Text(text)) if text.is_empty() => Ok(None),
        Some(WireAmount::Text(text)) => {
            let parsed = match text.strip_prefix("0x") {
                Some(hex) => U256::from_str_radix(hex, 16),
                None => U256::from_str_radix(&text, 10),
            };
            parsed.map(Some).map_err(serde::de::Error::custom)
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_wire_amount(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("missing amount"))
}

fn deserialize_amount_or_zero<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_wire_amount(deserializer)?.unwrap_or(U256::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_quote_with_decimal_amounts() {
        let json = r#"{
            "originAmount": "100000000000000000",
            "destinationAmount": "350000000",
            "estimatedExecutionTimeMs": 120000,
            "steps": [
                {
                    "action": "bridge",
                    "transactions": [
                        {
                            "chainId": 1,
                            "to": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
                            "data": "0xdeadbeef",
                            "value": "0",
                            "action": "bridge"
                        }
                    ]
                }
            ]
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();

        assert_eq!(
            quote.origin_amount,
            U256::from(100_000_000_000_000_000u128)
        );
        assert_eq!(quote.destination_amount, U256::from(350_000_000u64));
        assert_eq!(quote.estimated_execution_time_ms, 120_000);
        assert_eq!(quote.steps.len(), 1);
        assert_eq!(quote.steps[0].action, StepAction::Bridge);
        assert_eq!(quote.steps[0].transactions[0].chain_id, 1);
        assert!(quote.steps[0].transactions[0].action.requires_settlement());
    }

    #[test]
    fn test_deserialize_quote_with_hex_and_integer_amounts() {
        let json = r#"{"originAmount": "0xff", "destinationAmount": 1000}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();

        assert_eq!(quote.origin_amount, U256::from(255u64));
        assert_eq!(quote.destination_amount, U256::from(1000u64));
        assert!(quote.steps.is_empty());
        assert_eq!(quote.estimated_execution_time_ms, 0);
    }

    #[test]
    fn test_missing_destination_amount_is_zero() {
        let json = r#"{"originAmount": "1"}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert!(quote.destination_amount.is_zero());

        let json = r#"{"originAmount": "1", "destinationAmount": null}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert!(quote.destination_amount.is_zero());
    }

    #[test]
    fn test_missing_origin_amount_is_an_error() {
        assert!(serde_json::from_str::<Quote>(r#"{"destinationAmount": "1"}"#).is_err());
    }

    #[test]
    fn test_invalid_amount_string_is_an_error() {
        assert!(serde_json::from_str::<Quote>(r#"{"originAmount": "not-a-number"}"#).is_err());
    }

    #[test]
    fn test_unknown_step_action_decodes_as_other() {
        let json = r#"{"action": "approval", "transactions": []}"#;
        let step: Step = serde_json::from_str(json).unwrap();
        assert_eq!(step.action, StepAction::Other);
        assert!(!step.action.requires_settlement());
    }

    #[test]
    fn test_missing_action_defaults_to_other() {
        let json = r#"{
            "chainId": 10,
            "to": "0x4200000000000000000000000000000000000006"
        }"#;
        let transaction: PreparedTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.action, StepAction::Other);
        assert!(transaction.data.is_empty());
        assert!(transaction.value.is_zero());
    }

    #[test]
    fn test_deserialize_all_settlement_statuses() {
        for (wire, expected) in [
            ("COMPLETED", SettlementStatus::Completed),
            ("FAILED", SettlementStatus::Failed),
            ("PENDING", SettlementStatus::Pending),
            ("NOT_FOUND", SettlementStatus::NotFound),
        ] {
            let json = format!(r#"{{"status": "{wire}"}}"#);
            let response: TransferStatusResponse = serde_json::from_str(&json).unwrap();
            assert_eq!(response.status, expected);
        }
    }

    #[test]
    fn test_unknown_settlement_status_is_rejected() {
        assert!(serde_json::from_str::<TransferStatusResponse>(r#"{"status": "HALTED"}"#).is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(SettlementStatus::Completed.is_terminal());
        assert!(SettlementStatus::Failed.is_terminal());
        assert!(!SettlementStatus::Pending.is_terminal());
        assert!(!SettlementStatus::NotFound.is_terminal());
    }

    #[test]
    fn test_swap_request_builder() {
        let request = SwapRequest::builder()
            .origin_chain_id(1)
            .origin_token(Address::ZERO)
            .destination_chain_id(8453)
            .destination_token(Address::ZERO)
            .amount(U256::from(1000))
            .sender(Address::ZERO)
            .build();

        assert_eq!(request.origin_chain_id, 1);
        assert_eq!(request.destination_chain_id, 8453);
        assert_eq!(request.amount, U256::from(1000));
    }

    #[test]
    fn test_route_filter_builder_defaults() {
        let filter = RouteFilter::builder().limit(20).build();
        assert_eq!(filter.limit, Some(20));
        assert!(filter.origin_chain_id.is_none());
        assert!(filter.origin_token.is_none());
    }

    #[test]
    fn test_deserialize_route_info() {
        let json = r#"{
            "originToken": {
                "symbol": "ETH",
                "chainId": 1,
                "chainName": "Ethereum",
                "address": "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE"
            },
            "destinationToken": {
                "symbol": "USDC",
                "chainId": 8453,
                "address": "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"
            }
        }"#;
        let route: RouteInfo = serde_json::from_str(json).unwrap();
        assert_eq!(route.origin_token.symbol, "ETH");
        assert_eq!(route.origin_token.chain_name.as_deref(), Some("Ethereum"));
        assert_eq!(route.destination_token.chain_id, 8453);
        assert!(route.destination_token.chain_name.is_none());
    }
}
