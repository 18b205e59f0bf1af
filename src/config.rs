use std::path::PathBuf;

use crate::models::network_config::NetworkConfig;
use crate::services::network_config::get_network_config;

// No Debug derive: api_key must never end up in logs.
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub network: NetworkConfig,
    pub api_base_url: String,
    pub wallet_rpc_url: Option<String>,
    pub cache_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let network_name =
            std::env::var("NETWORK").unwrap_or_else(|_| "mainnet".to_string());
        let network = get_network_config(&network_name)
            .unwrap_or_else(|| panic!("Unsupported NETWORK: {}", network_name));
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| network.api_base_url.clone());

        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Failed to parse PORT"),
            api_key: std::env::var("API_KEY").expect("API_KEY must be set"),
            wallet_rpc_url: std::env::var("WALLET_RPC_URL").ok(),
            cache_path: std::env::var("CACHE_PATH")
                .unwrap_or_else(|_| "data/cached_token_metadata.json".to_string())
                .into(),
            api_base_url,
            network,
        }
    }
}
