//! Holder analysis: balance reconstruction, ranking, and holdings
//!
//! The core pipeline is fetch -> fold -> rank:
//! transfers are fetched in full from Alchemy, folded into a balance
//! map, and the top N positive balances come back ranked. Everything is
//! computed per request from empty state; nothing persists between
//! lookups.

pub mod balances;
pub mod holdings;

pub use balances::{calculate_balances, rank_top, ZERO_ADDRESS};
pub use holdings::{significant_holdings, SignificantHolding};

use crate::alchemy::{AlchemyClient, TokenMetadata};
use crate::errors::HolderBotError;
use crate::logger::{self, LogTag};
use crate::utils::safe_truncate;

/// One ranked holder: address and strictly positive balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderEntry {
    pub address: String,
    pub balance: i128,
}

/// Fetch the full transfer history of a token and rank its holders.
///
/// Returns at most `top_n` entries sorted by descending balance. An
/// empty result means the token has no transfers or no positive
/// balances; that is not an error.
pub async fn get_top_holders(
    client: &AlchemyClient,
    contract_address: &str,
    top_n: usize,
) -> Result<Vec<HolderEntry>, HolderBotError> {
    logger::info(
        LogTag::Holders,
        &format!(
            "Fetching ALL transfers for token {}",
            safe_truncate(contract_address, 12)
        ),
    );

    let transfers = client.get_asset_transfers(contract_address).await?;

    if transfers.is_empty() {
        logger::warning(LogTag::Holders, "No transfers found");
        return Ok(Vec::new());
    }

    let balances = calculate_balances(&transfers);

    if balances.is_empty() {
        logger::warning(LogTag::Holders, "No balances calculated");
        return Ok(Vec::new());
    }

    logger::info(
        LogTag::Holders,
        &format!(
            "Calculated {} addresses with positive balances from {} transfers",
            balances.len(),
            transfers.len()
        ),
    );

    Ok(rank_top(&balances, top_n))
}

/// Fetch token metadata, falling back to placeholder values on failure
/// so the holders report still renders.
pub async fn get_token_info(client: &AlchemyClient, contract_address: &str) -> TokenMetadata {
    match client.get_token_metadata(contract_address).await {
        Ok(metadata) => metadata,
        Err(e) => {
            logger::warning(
                LogTag::Holders,
                &format!("Could not fetch token metadata: {}", e),
            );
            TokenMetadata::unknown()
        }
    }
}
