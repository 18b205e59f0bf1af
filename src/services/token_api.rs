use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::IndexerError;
use crate::models::token::{TokenBalanceEntry, TokenMetadata};
use crate::services::rpc_client::RpcClient;

/// Hosted blockchain-data API surface consumed by the orchestrator.
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Fetch all ERC-20 balances held by an address.
    async fn get_token_balances(
        &self,
        address: &str,
    ) -> Result<Vec<TokenBalanceEntry>, IndexerError>;

    /// Fetch metadata for a token contract.
    async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<TokenMetadata, IndexerError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBalancesResponse {
    token_balances: Vec<TokenBalanceEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenMetadataResponse {
    symbol: Option<String>,
    decimals: Option<u8>,
    logo: Option<String>,
}

/// Client for an Alchemy-style hosted token API.
pub struct AlchemyClient {
    rpc: RpcClient,
}

impl AlchemyClient {
    /// The API key becomes part of the endpoint URL and must stay out of
    /// logs; see `rpc_client` for how transport errors are scrubbed.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, IndexerError> {
        let rpc = RpcClient::new(format!("{}/{}", base_url.trim_end_matches('/'), api_key))?;
        Ok(Self { rpc })
    }
}

#[async_trait]
impl TokenApi for AlchemyClient {
    async fn get_token_balances(
        &self,
        address: &str,
    ) -> Result<Vec<TokenBalanceEntry>, IndexerError> {
        let response: TokenBalancesResponse = self
            .rpc
            .call("alchemy_getTokenBalances", (address, "erc20"))
            .await?;

        Ok(response.token_balances)
    }

    async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<TokenMetadata, IndexerError> {
        let response: TokenMetadataResponse = self
            .rpc
            .call("alchemy_getTokenMetadata", (contract_address,))
            .await?;

        // Null fields map deterministically: unnamed tokens keep an empty
        // symbol and zero decimals.
        Ok(TokenMetadata {
            symbol: response.symbol.unwrap_or_default(),
            decimals: response.decimals.unwrap_or(0),
            logo: response.logo,
        })
    }
}
