//! Wire types for the Alchemy JSON-RPC API

use serde::{Deserialize, Serialize};

/// JSON-RPC request envelope
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.to_string(),
            params,
            id: 1,
        }
    }
}

/// JSON-RPC response envelope: carries either `result` or `error`
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub message: String,
    #[serde(default)]
    pub code: i64,
}

/// A transfer `value` as delivered by Alchemy: either a string
/// (hex `0x..` or decimal) or a JSON number.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TransferValue {
    Text(String),
    Number(serde_json::Number),
}

impl TransferValue {
    /// Parse into an unsigned integer amount.
    ///
    /// Accepts `0x`-prefixed hex strings, decimal strings, and JSON
    /// numbers (floats are truncated toward zero). Returns None for
    /// anything unparseable; callers skip the record rather than fail.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            TransferValue::Text(s) => {
                if let Some(hex) = s.strip_prefix("0x") {
                    u128::from_str_radix(hex, 16).ok()
                } else {
                    s.parse::<u128>().ok()
                }
            }
            TransferValue::Number(n) => {
                if let Some(v) = n.as_u64() {
                    Some(v as u128)
                } else {
                    // Alchemy reports some erc20 values as floats
                    n.as_f64()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f as u128)
                }
            }
        }
    }
}

/// One transfer record from `alchemy_getAssetTransfers`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<TransferValue>,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub metadata: Option<TransferMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferMetadata {
    #[serde(default)]
    pub block_timestamp: Option<String>,
}

/// `alchemy_getAssetTransfers` result page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfersPage {
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub page_key: Option<String>,
}

/// `alchemy_getTokenMetadata` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl TokenMetadata {
    /// Fallback used when the metadata lookup fails: the holders report
    /// still renders with placeholder naming and 18 decimals.
    pub fn unknown() -> Self {
        Self {
            symbol: Some("UNKNOWN".to_string()),
            name: Some("Unknown Token".to_string()),
            decimals: Some(18),
        }
    }
}

/// `alchemy_getTokenBalances` result
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesResult {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub token_balances: Vec<TokenBalanceEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceEntry {
    #[serde(default)]
    pub contract_address: Option<String>,
    /// Hex-encoded raw balance (e.g. "0x1a2b")
    #[serde(default)]
    pub token_balance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_string_value() {
        let value = TransferValue::Text("0x1a".to_string());
        assert_eq!(value.as_u128(), Some(26));
    }

    #[test]
    fn test_decimal_string_value() {
        let value = TransferValue::Text("26".to_string());
        assert_eq!(value.as_u128(), Some(26));
    }

    #[test]
    fn test_numeric_value() {
        let value = TransferValue::Number(serde_json::Number::from(26u64));
        assert_eq!(value.as_u128(), Some(26));
    }

    #[test]
    fn test_float_value_truncated() {
        let value: TransferValue = serde_json::from_str("26.9").unwrap();
        assert_eq!(value.as_u128(), Some(26));
    }

    #[test]
    fn test_garbage_value_is_none() {
        let value = TransferValue::Text("not-a-number".to_string());
        assert_eq!(value.as_u128(), None);
    }

    #[test]
    fn test_negative_value_is_none() {
        let value: TransferValue = serde_json::from_str("-5").unwrap();
        assert_eq!(value.as_u128(), None);
    }

    #[test]
    fn test_transfer_deserializes_hex_value() {
        let json = r#"{
            "from": "0x0000000000000000000000000000000000000000",
            "to": "0xAbC0000000000000000000000000000000000001",
            "value": "0x64",
            "asset": "TEST",
            "hash": "0xdeadbeef",
            "metadata": {"blockTimestamp": "2024-01-01T00:00:00.000Z"}
        }"#;
        let transfer: Transfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.value.unwrap().as_u128(), Some(100));
        assert!(transfer.metadata.unwrap().block_timestamp.is_some());
    }

    #[test]
    fn test_page_key_optional() {
        let page: AssetTransfersPage = serde_json::from_str(r#"{"transfers": []}"#).unwrap();
        assert!(page.transfers.is_empty());
        assert!(page.page_key.is_none());
    }

    #[test]
    fn test_rpc_error_envelope() {
        let response: RpcResponse<AssetTransfersPage> =
            serde_json::from_str(r#"{"error": {"message": "bad request", "code": -32600}}"#)
                .unwrap();
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().message, "bad request");
    }
}
