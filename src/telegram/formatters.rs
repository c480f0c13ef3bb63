//! HTML message formatters for Telegram output

use crate::alchemy::TokenMetadata;
use crate::holders::{HolderEntry, SignificantHolding};

/// Block explorer for Abstract mainnet
const EXPLORER_BASE_URL: &str = "https://abscan.org/address";

/// Balances below this are treated as already decimals-scaled.
///
/// Heuristic: raw on-chain amounts for typical 18-decimals tokens are
/// far above one trillion, while human-scale amounts are far below it.
/// A legitimately huge pre-scaled balance or a tiny raw balance both
/// defeat this guess; that ambiguity is inherited from the data source
/// and deliberately left as-is.
const RAW_BALANCE_THRESHOLD: f64 = 1e12;

/// Escape the characters Telegram's HTML parse mode treats specially
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Shorten an EVM address for display: `0x1234...abcd`
pub fn shorten_address(address: &str) -> String {
    if address.len() < 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Format a token balance for humans, with K/M suffixes.
///
/// Applies the raw-vs-scaled heuristic documented on
/// [`RAW_BALANCE_THRESHOLD`] before dividing by `10^decimals`.
pub fn format_balance(balance: i128, decimals: u32) -> String {
    let readable = if (balance as f64) < RAW_BALANCE_THRESHOLD {
        balance as f64
    } else {
        balance as f64 / 10f64.powi(decimals as i32)
    };

    if readable >= 1_000_000.0 {
        format!("{:.2}M", readable / 1_000_000.0)
    } else if readable >= 1_000.0 {
        format!("{:.2}K", readable / 1_000.0)
    } else {
        let formatted = format!("{:.4}", readable);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn explorer_link(address: &str, label: &str) -> String {
    format!(
        "<a href=\"{}/{}\">{}</a>",
        EXPLORER_BASE_URL,
        address,
        html_escape(label)
    )
}

/// Build the ranked holders report for /th
pub fn format_holders_response(
    token_address: &str,
    metadata: &TokenMetadata,
    holders: &[HolderEntry],
    holdings: Option<&[Vec<SignificantHolding>]>,
) -> String {
    let symbol = metadata.symbol.as_deref().unwrap_or("UNKNOWN");
    let name = metadata.name.as_deref().unwrap_or("Unknown Token");
    let decimals = metadata.decimals.unwrap_or(18);

    let mut response = format!(
        "🏆 <b>Top {} Holders of {}</b>\n<i>{}</i>\n📍 Contract: {}\n\n",
        holders.len(),
        html_escape(symbol),
        html_escape(name),
        explorer_link(token_address, &shorten_address(token_address)),
    );

    for (i, holder) in holders.iter().enumerate() {
        response.push_str(&format!(
            "<b>#{}</b> {}\n💰 <b>{} {}</b>\n",
            i + 1,
            explorer_link(&holder.address, &shorten_address(&holder.address)),
            format_balance(holder.balance, decimals),
            html_escape(symbol),
        ));

        if let Some(all_holdings) = holdings {
            if let Some(holder_holdings) = all_holdings.get(i) {
                for holding in holder_holdings.iter().take(5) {
                    response.push_str(&format!(
                        "   └ {:.2} {}\n",
                        holding.balance,
                        html_escape(&holding.symbol)
                    ));
                }
            }
        }

        response.push('\n');
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x1234567890123456789012345678901234567890"),
            "0x1234...7890"
        );
        // Too short to shorten
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_format_balance_prescaled() {
        // Below one trillion: treated as already human-scale
        assert_eq!(format_balance(50, 18), "50");
        assert_eq!(format_balance(1_500, 18), "1.50K");
        assert_eq!(format_balance(2_500_000, 18), "2.50M");
    }

    #[test]
    fn test_format_balance_raw() {
        // 5000 tokens at 18 decimals
        let raw = 5_000i128 * 10i128.pow(18);
        assert_eq!(format_balance(raw, 18), "5.00K");
    }

    #[test]
    fn test_format_balance_trims_trailing_zeros() {
        assert_eq!(format_balance(123, 18), "123");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("A & B <c>"), "A &amp; B &lt;c&gt;");
    }

    #[test]
    fn test_holders_response_contains_entries() {
        let metadata = TokenMetadata {
            symbol: Some("TEST".to_string()),
            name: Some("Test Token".to_string()),
            decimals: Some(18),
        };
        let holders = vec![
            HolderEntry {
                address: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
                balance: 1_000,
            },
            HolderEntry {
                address: "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".to_string(),
                balance: 500,
            },
        ];

        let response = format_holders_response(
            "0x1234567890123456789012345678901234567890",
            &metadata,
            &holders,
            None,
        );

        assert!(response.contains("Top 2 Holders of TEST"));
        assert!(response.contains("#1"));
        assert!(response.contains("0xaaaa...aaaa"));
        assert!(response.contains("1.00K TEST"));
    }
}
