//! Other significant token holdings for a wallet
//!
//! Uses alchemy_getTokenBalances (one call per wallet) and filters by
//! per-symbol significance thresholds. Rendering of these holdings is
//! off by default; enable via SHOW_OTHER_HOLDINGS.

use crate::alchemy::AlchemyClient;
use crate::logger::{self, LogTag};
use crate::utils::safe_truncate;

/// Maximum holdings reported per wallet
const MAX_HOLDINGS: usize = 10;

/// Assumed decimals when metadata is unavailable
const FALLBACK_DECIMALS: u32 = 18;

#[derive(Debug, Clone)]
pub struct SignificantHolding {
    pub address: String,
    pub symbol: String,
    /// Balance scaled by the token's decimals
    pub balance: f64,
    /// Unscaled on-chain balance, used for sorting
    pub raw_balance: u128,
}

/// Per-symbol significance thresholds on the decimals-scaled balance:
/// ETH/WETH at 1+, stablecoins at 1K+, everything else at 1M+.
pub fn is_significant(symbol: &str, readable_balance: f64) -> bool {
    match symbol.to_uppercase().as_str() {
        "ETH" | "WETH" => readable_balance >= 1.0,
        "USDC" | "USDT" | "DAI" => readable_balance >= 1_000.0,
        _ => readable_balance >= 1_000_000.0,
    }
}

fn parse_hex_balance(hex: &str) -> Option<u128> {
    u128::from_str_radix(hex.strip_prefix("0x")?, 16).ok()
}

/// Fetch a wallet's other significant token holdings, excluding the
/// token under analysis. Best effort: any failure yields an empty list.
pub async fn significant_holdings(
    client: &AlchemyClient,
    address: &str,
    exclude_token: &str,
) -> Vec<SignificantHolding> {
    let balances = match client.get_token_balances(address).await {
        Ok(result) => result.token_balances,
        Err(e) => {
            logger::warning(
                LogTag::Holders,
                &format!(
                    "Error fetching other tokens for {}: {}",
                    safe_truncate(address, 10),
                    e
                ),
            );
            return Vec::new();
        }
    };

    let exclude = exclude_token.to_lowercase();
    let mut holdings: Vec<SignificantHolding> = Vec::new();

    for entry in balances {
        let contract = match entry.contract_address {
            Some(c) => c.to_lowercase(),
            None => continue,
        };

        let raw_balance = match entry.token_balance.as_deref().and_then(parse_hex_balance) {
            Some(b) if b > 0 => b,
            _ => continue,
        };

        if contract == exclude {
            continue;
        }

        match client.get_token_metadata(&contract).await {
            Ok(metadata) => {
                let symbol = metadata.symbol.unwrap_or_else(|| "UNKNOWN".to_string());
                let decimals = metadata.decimals.unwrap_or(FALLBACK_DECIMALS);
                let readable = raw_balance as f64 / 10f64.powi(decimals as i32);

                if is_significant(&symbol, readable) {
                    holdings.push(SignificantHolding {
                        address: contract,
                        symbol,
                        balance: readable,
                        raw_balance,
                    });
                }
            }
            Err(_) => {
                // Without metadata only very large raw balances qualify,
                // assuming 18 decimals
                let assumed = raw_balance as f64 / 10f64.powi(FALLBACK_DECIMALS as i32);
                if assumed >= 1_000_000.0 {
                    holdings.push(SignificantHolding {
                        address: contract,
                        symbol: "UNKNOWN".to_string(),
                        balance: assumed,
                        raw_balance,
                    });
                }
            }
        }
    }

    holdings.sort_by(|a, b| b.raw_balance.cmp(&a.raw_balance));
    holdings.truncate(MAX_HOLDINGS);

    logger::info(
        LogTag::Holders,
        &format!(
            "Found {} significant tokens for {}...",
            holdings.len(),
            safe_truncate(address, 8)
        ),
    );

    holdings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eth_threshold() {
        assert!(is_significant("ETH", 1.0));
        assert!(is_significant("weth", 2.5));
        assert!(!is_significant("ETH", 0.5));
    }

    #[test]
    fn test_stablecoin_threshold() {
        assert!(is_significant("USDC", 1_000.0));
        assert!(is_significant("usdt", 5_000.0));
        assert!(!is_significant("DAI", 999.0));
    }

    #[test]
    fn test_default_threshold() {
        assert!(is_significant("PEPE", 1_000_000.0));
        assert!(!is_significant("PEPE", 999_999.0));
    }

    #[test]
    fn test_parse_hex_balance() {
        assert_eq!(parse_hex_balance("0x64"), Some(100));
        assert_eq!(parse_hex_balance("0x0"), Some(0));
        assert_eq!(parse_hex_balance("100"), None);
        assert_eq!(parse_hex_balance("0xzz"), None);
    }
}
