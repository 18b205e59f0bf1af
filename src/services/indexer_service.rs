use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ethers::types::Address;
use futures::future;
use log::{debug, info, warn};

use crate::errors::IndexerError;
use crate::models::query::QueryResult;
use crate::models::token::TokenMetadata;
use crate::services::metadata_cache::MetadataCache;
use crate::services::token_api::TokenApi;
use crate::services::FlightGuard;

/// Orchestrates one balance query: a single balance API call, cached or
/// concurrent metadata resolution, order-preserving assembly.
pub struct IndexerService {
    api: Arc<dyn TokenApi>,
    cache: Arc<MetadataCache>,
    querying: AtomicBool,
}

impl IndexerService {
    pub fn new(api: Arc<dyn TokenApi>, cache: Arc<MetadataCache>) -> Self {
        Self {
            api,
            cache,
            querying: AtomicBool::new(false),
        }
    }

    /// Busy flag for the presentation layer.
    pub fn is_querying(&self) -> bool {
        self.querying.load(Ordering::Acquire)
    }

    pub async fn query_balances(&self, address: &str) -> Result<QueryResult, IndexerError> {
        let address = validate_address(address)?;
        let _guard = FlightGuard::try_acquire(&self.querying)
            .ok_or(IndexerError::RequestInFlight)?;

        let balances = self.api.get_token_balances(&address).await?;
        debug!("Address {} holds {} tokens", address, balances.len());

        // Cache hits resolve locally; each distinct missing contract gets
        // one concurrent fetch.
        let mut resolved: HashMap<String, TokenMetadata> = HashMap::new();
        let mut missing: Vec<String> = Vec::new();
        for entry in &balances {
            if resolved.contains_key(&entry.contract_address)
                || missing.contains(&entry.contract_address)
            {
                continue;
            }
            match self.cache.get(&entry.contract_address).await {
                Some(metadata) => {
                    resolved.insert(entry.contract_address.clone(), metadata);
                }
                None => missing.push(entry.contract_address.clone()),
            }
        }

        if !missing.is_empty() {
            info!("Fetching metadata for {} uncached contracts", missing.len());
            let fetches = missing
                .iter()
                .map(|contract| self.api.get_token_metadata(contract));
            // One failed fetch fails the whole query, and nothing from the
            // batch is cached. Only settled metadata ever enters the cache.
            let fetched = future::try_join_all(fetches).await?;

            for (contract, metadata) in missing.into_iter().zip(fetched) {
                self.cache.put(contract.clone(), metadata.clone()).await;
                resolved.insert(contract, metadata);
            }
            if let Err(e) = self.cache.persist().await {
                warn!("Failed to persist metadata cache: {}", e);
            }
        }

        // Assemble in balance-entry order, whatever order the fetches
        // settled in.
        let metadata = balances
            .iter()
            .filter_map(|entry| resolved.get(&entry.contract_address).cloned())
            .collect();

        Ok(QueryResult {
            address,
            balances,
            metadata,
        })
    }
}

/// Non-empty, and a `0x` string must parse as a 20-byte address. Any other
/// non-empty string passes through for the API to resolve as a name.
fn validate_address(address: &str) -> Result<String, IndexerError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(IndexerError::InvalidAddress(
            "address must not be empty".to_string(),
        ));
    }
    if address.starts_with("0x") && Address::from_str(address).is_err() {
        return Err(IndexerError::InvalidAddress(address.to_string()));
    }
    Ok(address.to_string())
}
