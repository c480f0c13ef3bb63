//! Shared helpers: address validation and display truncation

/// Validate an EVM address: 40 hex characters after an optional `0x` prefix.
///
/// This runs before any API call so malformed input never reaches Alchemy.
pub fn is_valid_address(address: &str) -> bool {
    let hex_part = address.strip_prefix("0x").unwrap_or(address);

    if hex_part.len() != 40 {
        return false;
    }

    hex_part.chars().all(|c| c.is_ascii_hexdigit())
}

/// Canonical form used for balance-map keys and comparisons:
/// lower-cased, `0x`-prefixed.
pub fn normalize_address(address: &str) -> String {
    let lower = address.to_lowercase();
    if lower.starts_with("0x") {
        lower
    } else {
        format!("0x{}", lower)
    }
}

/// Truncate a string for log output to at most `max_len` bytes.
///
/// The cut backs up to the nearest char boundary so multibyte UTF-8
/// input (upstream error bodies are arbitrary text) never panics.
pub fn safe_truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_with_prefix() {
        let address = format!("0x{}", "ab".repeat(20));
        assert!(is_valid_address(&address));
    }

    #[test]
    fn test_valid_address_without_prefix() {
        assert!(is_valid_address(&"ab".repeat(20)));
    }

    #[test]
    fn test_short_address_rejected() {
        assert!(!is_valid_address("1234"));
    }

    #[test]
    fn test_non_hex_address_rejected() {
        let address = format!("0x{}", "zz".repeat(20));
        assert!(!is_valid_address(&address));
    }

    #[test]
    fn test_empty_address_rejected() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0x"));
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            normalize_address("0xABCDEF1234567890ABCDEF1234567890ABCDEF12"),
            "0xabcdef1234567890abcdef1234567890abcdef12"
        );
        assert_eq!(normalize_address("AB12"), "0xab12");
    }

    #[test]
    fn test_safe_truncate() {
        assert_eq!(safe_truncate("0x1234567890", 8), "0x123456");
        assert_eq!(safe_truncate("short", 8), "short");
    }

    #[test]
    fn test_safe_truncate_multibyte_backs_up_to_char_boundary() {
        // Each Greek letter is 2 bytes; byte 3 falls inside β
        assert_eq!(safe_truncate("αβγδε", 3), "α");
        assert_eq!(safe_truncate("αβγδε", 4), "αβ");
        assert_eq!(safe_truncate("日本語", 0), "");
    }
}
