pub mod api_response;
pub mod network_config;
pub mod query;
pub mod token;
pub mod wallet;
