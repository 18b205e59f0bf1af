use crate::models::network_config::NetworkConfig;

/// Get hosted data-API configuration for a named network
pub fn get_network_config(network: &str) -> Option<NetworkConfig> {
    match network {
        "mainnet" => Some(NetworkConfig {
            chain_id: 1,
            name: "Ethereum Mainnet".to_string(),
            api_base_url: "https://eth-mainnet.g.alchemy.com/v2".to_string(),
        }),
        "sepolia" => Some(NetworkConfig {
            chain_id: 11155111,
            name: "Sepolia Testnet".to_string(),
            api_base_url: "https://eth-sepolia.g.alchemy.com/v2".to_string(),
        }),
        "polygon" => Some(NetworkConfig {
            chain_id: 137,
            name: "Polygon Mainnet".to_string(),
            api_base_url: "https://polygon-mainnet.g.alchemy.com/v2".to_string(),
        }),
        // Add more networks as needed
        _ => None,
    }
}
