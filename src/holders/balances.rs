//! Balance reconstruction from transfer history
//!
//! Replays the full transfer sequence from empty state on every request:
//! subtract from sender, add to receiver, then keep only strictly
//! positive balances. The fold is commutative and associative per
//! address, so the result does not depend on pagination order.

use crate::alchemy::types::Transfer;
use crate::holders::HolderEntry;
use crate::logger::{self, LogTag};
use crate::utils::normalize_address;
use std::collections::HashMap;

/// The all-zero address marks mint (as sender) and burn (as receiver)
/// and must never accumulate a balance.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Fold a transfer sequence into a map of strictly positive balances.
///
/// Records with unparseable values are skipped, never failing the whole
/// fold. Addresses are compared lower-cased. Negative and zero results
/// (underflow from malformed or truncated transfer subsets) are dropped
/// rather than surfaced.
pub fn calculate_balances(transfers: &[Transfer]) -> HashMap<String, i128> {
    let mut balances: HashMap<String, i128> = HashMap::new();
    let mut skipped = 0usize;

    for transfer in transfers {
        // Values above i128::MAX cannot be accumulated signed; skip the
        // record like any other unparseable value
        let value = match transfer
            .value
            .as_ref()
            .and_then(|v| v.as_u128())
            .and_then(|v| i128::try_from(v).ok())
        {
            Some(v) => v,
            None => {
                skipped += 1;
                continue;
            }
        };

        if let Some(from) = transfer.from.as_deref().filter(|a| !a.is_empty()) {
            let from = normalize_address(from);
            if from != ZERO_ADDRESS {
                *balances.entry(from).or_insert(0) -= value;
            }
        }

        if let Some(to) = transfer.to.as_deref().filter(|a| !a.is_empty()) {
            let to = normalize_address(to);
            if to != ZERO_ADDRESS {
                *balances.entry(to).or_insert(0) += value;
            }
        }
    }

    if skipped > 0 {
        logger::debug(
            LogTag::Holders,
            &format!("Skipped {} transfers with unparseable values", skipped),
        );
    }

    balances.retain(|_, balance| *balance > 0);
    balances
}

/// Rank balances descending and return the top `n` holders.
///
/// Ties break by ascending address order so equal balances always rank
/// the same way between runs. Empty input yields an empty ranking.
pub fn rank_top(balances: &HashMap<String, i128>, n: usize) -> Vec<HolderEntry> {
    let mut holders: Vec<HolderEntry> = balances
        .iter()
        .map(|(address, balance)| HolderEntry {
            address: address.clone(),
            balance: *balance,
        })
        .collect();

    holders.sort_by(|a, b| {
        b.balance
            .cmp(&a.balance)
            .then_with(|| a.address.cmp(&b.address))
    });
    holders.truncate(n);

    holders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alchemy::types::TransferValue;

    fn transfer(from: &str, to: &str, value: &str) -> Transfer {
        Transfer {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            value: Some(TransferValue::Text(value.to_string())),
            asset: None,
            hash: None,
            metadata: None,
        }
    }

    const A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const C: &str = "0xcccccccccccccccccccccccccccccccccccccccc";

    #[test]
    fn test_mint_then_transfer_scenario() {
        // 0x64 = 100 minted to A, 0x32 = 50 sent A -> B
        let transfers = vec![transfer(ZERO_ADDRESS, A, "0x64"), transfer(A, B, "0x32")];

        let balances = calculate_balances(&transfers);
        assert_eq!(balances.get(A), Some(&50));
        assert_eq!(balances.get(B), Some(&50));
        assert_eq!(balances.len(), 2);
    }

    #[test]
    fn test_fold_is_order_independent() {
        let mut transfers = vec![
            transfer(ZERO_ADDRESS, A, "1000"),
            transfer(A, B, "300"),
            transfer(B, C, "100"),
            transfer(A, C, "0x64"),
        ];

        let expected = calculate_balances(&transfers);
        transfers.reverse();
        assert_eq!(calculate_balances(&transfers), expected);
        transfers.swap(0, 2);
        assert_eq!(calculate_balances(&transfers), expected);
    }

    #[test]
    fn test_self_transfer_nets_to_zero() {
        let transfers = vec![transfer(ZERO_ADDRESS, A, "100"), transfer(A, A, "40")];

        let balances = calculate_balances(&transfers);
        assert_eq!(balances.get(A), Some(&100));
    }

    #[test]
    fn test_zero_address_never_keyed() {
        let transfers = vec![
            transfer(ZERO_ADDRESS, A, "100"),
            transfer(A, ZERO_ADDRESS, "30"),
        ];

        let balances = calculate_balances(&transfers);
        assert!(!balances.contains_key(ZERO_ADDRESS));
        assert_eq!(balances.get(A), Some(&70));
    }

    #[test]
    fn test_non_positive_balances_dropped() {
        // B receives 50 then sends 80 (truncated history underflow)
        let transfers = vec![
            transfer(ZERO_ADDRESS, A, "100"),
            transfer(A, B, "50"),
            transfer(B, C, "80"),
        ];

        let balances = calculate_balances(&transfers);
        assert!(!balances.contains_key(B));
        assert_eq!(balances.get(C), Some(&80));
    }

    #[test]
    fn test_unparseable_value_skips_record() {
        let transfers = vec![
            transfer(ZERO_ADDRESS, A, "100"),
            transfer(A, B, "garbage"),
        ];

        let balances = calculate_balances(&transfers);
        assert_eq!(balances.get(A), Some(&100));
        assert!(!balances.contains_key(B));
    }

    #[test]
    fn test_value_above_i128_max_skipped_not_wrapped() {
        // u128::MAX parses fine but cannot be accumulated signed; the
        // record must be skipped, not wrapped into a subtraction
        let transfers = vec![
            transfer(ZERO_ADDRESS, A, &format!("{:#x}", u128::MAX)),
            transfer(ZERO_ADDRESS, A, "100"),
        ];

        let balances = calculate_balances(&transfers);
        assert_eq!(balances.get(A), Some(&100));
    }

    #[test]
    fn test_addresses_compared_case_insensitively() {
        let transfers = vec![
            transfer(ZERO_ADDRESS, &A.to_uppercase().replace("0X", "0x"), "100"),
            transfer(A, B, "40"),
        ];

        let balances = calculate_balances(&transfers);
        assert_eq!(balances.get(A), Some(&60));
    }

    #[test]
    fn test_empty_transfers_empty_map() {
        let balances = calculate_balances(&[]);
        assert!(balances.is_empty());
        assert!(rank_top(&balances, 20).is_empty());
    }

    #[test]
    fn test_rank_top_descending_and_capped() {
        let mut balances = HashMap::new();
        balances.insert(A.to_string(), 10);
        balances.insert(B.to_string(), 30);
        balances.insert(C.to_string(), 20);

        let top = rank_top(&balances, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].address, B);
        assert_eq!(top[0].balance, 30);
        assert_eq!(top[1].address, C);
        assert!(top[0].balance >= top[1].balance);
    }

    #[test]
    fn test_rank_top_ties_break_by_address() {
        let mut balances = HashMap::new();
        balances.insert(C.to_string(), 10);
        balances.insert(A.to_string(), 10);
        balances.insert(B.to_string(), 10);

        let top = rank_top(&balances, 3);
        assert_eq!(top[0].address, A);
        assert_eq!(top[1].address, B);
        assert_eq!(top[2].address, C);
    }

    #[test]
    fn test_rank_top_n_larger_than_holders() {
        let mut balances = HashMap::new();
        balances.insert(A.to_string(), 5);

        let top = rank_top(&balances, 20);
        assert_eq!(top.len(), 1);
    }
}
