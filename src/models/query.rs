use serde::Serialize;

use crate::models::token::{TokenBalanceEntry, TokenCard, TokenMetadata};

/// Result of one balance query: balance entries and their metadata as
/// parallel vectors, index-aligned by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub address: String,
    pub balances: Vec<TokenBalanceEntry>,
    pub metadata: Vec<TokenMetadata>,
}

impl QueryResult {
    pub fn cards(&self) -> Vec<TokenCard> {
        self.balances
            .iter()
            .zip(&self.metadata)
            .map(|(entry, metadata)| TokenCard::from_entry(entry, metadata))
            .collect()
    }
}
