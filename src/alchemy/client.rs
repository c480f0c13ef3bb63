//! Alchemy JSON-RPC client for Abstract mainnet
//!
//! Issues blocking, sequential requests with a fixed per-call timeout.
//! No retry or backoff: a first-page failure surfaces to the caller,
//! while a mid-pagination failure returns the transfers accumulated so
//! far (availability over completeness).

use crate::alchemy::types::{
    AssetTransfersPage, RpcRequest, RpcResponse, TokenBalancesResult, TokenMetadata, Transfer,
};
use crate::errors::HolderBotError;
use crate::logger::{self, LogTag};
use crate::utils::safe_truncate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Abstract mainnet chain id (fixed, single-chain bot)
pub const CHAIN_ID: u64 = 2741;

/// Per-request HTTP timeout in seconds
const TIMEOUT_SECS: u64 = 30;

/// Maximum transfers per page accepted by alchemy_getAssetTransfers
const MAX_TRANSFERS_PER_PAGE: u32 = 1000;

pub struct AlchemyClient {
    client: Client,
    base_url: String,
}

impl AlchemyClient {
    pub fn new(api_key: &str) -> Result<Self, HolderBotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| HolderBotError::Upstream(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: format!("https://abstract-mainnet.g.alchemy.com/v2/{}", api_key),
        })
    }

    /// POST one JSON-RPC request and unwrap the result envelope
    async fn rpc_request<T>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, HolderBotError>
    where
        T: DeserializeOwned,
    {
        let payload = RpcRequest::new(method, params);

        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HolderBotError::Upstream(format!(
                "HTTP {}: {}",
                status,
                safe_truncate(&body, 200)
            )));
        }

        let envelope: RpcResponse<T> = response.json().await.map_err(|e| {
            HolderBotError::Upstream(format!("Failed to parse {} response: {}", method, e))
        })?;

        if let Some(err) = envelope.error {
            logger::error(
                LogTag::Alchemy,
                &format!("API error from {}: {}", method, err.message),
            );
            return Err(HolderBotError::Upstream(err.message));
        }

        envelope.result.ok_or_else(|| {
            HolderBotError::Upstream(format!("{} response missing result", method))
        })
    }

    /// Fetch ALL ERC-20 transfers for a token via alchemy_getAssetTransfers.
    ///
    /// Pages of up to 1000 transfers are fetched sequentially; the loop
    /// ends when the response has no pageKey or an empty page. A failure
    /// after the first successful page returns the partial accumulation
    /// instead of the error.
    pub async fn get_asset_transfers(
        &self,
        contract_address: &str,
    ) -> Result<Vec<Transfer>, HolderBotError> {
        let mut transfers: Vec<Transfer> = Vec::new();
        let mut page_key: Option<String> = None;

        loop {
            let mut filter = json!({
                "category": ["erc20"],
                "contractAddresses": [contract_address],
                "withMetadata": true,
                "excludeZeroValue": true,
                "maxCount": format!("{:#x}", MAX_TRANSFERS_PER_PAGE),
            });

            if let Some(key) = &page_key {
                filter["pageKey"] = json!(key);
            }

            let page: AssetTransfersPage = match self
                .rpc_request("alchemy_getAssetTransfers", json!([filter]))
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    if transfers.is_empty() {
                        // Nothing fetched yet, surface the failure
                        return Err(e);
                    }
                    // Partial-result policy: keep what we have
                    logger::warning(
                        LogTag::Alchemy,
                        &format!(
                            "Error fetching transfer page, returning {} transfers fetched so far: {}",
                            transfers.len(),
                            e
                        ),
                    );
                    break;
                }
            };

            let batch_empty = page.transfers.is_empty();
            transfers.extend(page.transfers);
            page_key = page.page_key;

            logger::debug(
                LogTag::Alchemy,
                &format!(
                    "Fetched transfer page for {} ({} total, next page: {})",
                    safe_truncate(contract_address, 10),
                    transfers.len(),
                    page_key.is_some()
                ),
            );

            if page_key.is_none() || batch_empty {
                break;
            }
        }

        logger::info(
            LogTag::Alchemy,
            &format!("Fetched {} total transfers", transfers.len()),
        );

        Ok(transfers)
    }

    /// Fetch symbol, name, and decimals via alchemy_getTokenMetadata
    pub async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<TokenMetadata, HolderBotError> {
        self.rpc_request("alchemy_getTokenMetadata", json!([contract_address]))
            .await
    }

    /// Fetch all ERC-20 balances of a wallet via alchemy_getTokenBalances
    pub async fn get_token_balances(
        &self,
        address: &str,
    ) -> Result<TokenBalancesResult, HolderBotError> {
        self.rpc_request("alchemy_getTokenBalances", json!([address, "erc20"]))
            .await
    }
}
