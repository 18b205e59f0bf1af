use ethers::types::U256;
use serde::{Deserialize, Serialize};

/// One held token as reported by the balance API. `token_balance` is the raw
/// integer amount, hex-encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceEntry {
    pub contract_address: String,
    pub token_balance: U256,
}

/// Descriptive attributes of a token contract. Immutable once fetched;
/// contracts do not change symbol or decimals post-deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub symbol: String,
    pub decimals: u8,
    pub logo: Option<String>,
}

/// Per-token presentation payload for the frontend grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCard {
    pub contract_address: String,
    pub symbol: String,
    pub balance: String,
    pub display_balance: String,
    pub logo: Option<String>,
}

impl TokenCard {
    pub fn from_entry(entry: &TokenBalanceEntry, metadata: &TokenMetadata) -> Self {
        let balance = format_units(entry.token_balance, metadata.decimals);
        Self {
            contract_address: entry.contract_address.clone(),
            symbol: metadata.symbol.clone(),
            display_balance: truncate_balance(&balance),
            balance,
            logo: metadata.logo.clone(),
        }
    }
}

/// Format a raw integer amount as a decimal string using the token's
/// decimals. String-based so no precision is lost on large amounts.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let mut amount_str = amount.to_string();
    let decimals = decimals as usize;

    if amount_str.len() <= decimals {
        amount_str.insert_str(0, &"0".repeat(decimals - amount_str.len() + 1));
    }

    let point = amount_str.len() - decimals;
    amount_str.insert(point, '.');

    // Trim trailing zeros and decimal point if necessary
    let amount_str = amount_str
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();

    if amount_str.is_empty() {
        "0".to_string()
    } else {
        amount_str
    }
}

const MAX_DISPLAY_LENGTH: usize = 10;

/// Cosmetic truncation for long formatted balances. Display only; the full
/// value is carried alongside.
pub fn truncate_balance(balance: &str) -> String {
    if balance.len() > MAX_DISPLAY_LENGTH {
        format!("{}...", &balance[..MAX_DISPLAY_LENGTH])
    } else {
        balance.to_string()
    }
}
