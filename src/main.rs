use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

mod api;
mod config;
mod errors;
mod models;
mod services;

use api::AppState;
use services::indexer_service::IndexerService;
use services::metadata_cache::MetadataCache;
use services::token_api::AlchemyClient;
use services::wallet_service::{RpcWalletProvider, WalletProvider, WalletService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env();

    let cache = Arc::new(MetadataCache::new(config.cache_path.clone()));
    cache.load_from_storage().await;
    info!(
        "Loaded {} cached token metadata entries",
        cache.len().await
    );

    let api_client =
        AlchemyClient::new(&config.api_base_url, &config.api_key).map_err(to_io_error)?;
    let wallet_provider: Option<Arc<dyn WalletProvider>> = match &config.wallet_rpc_url {
        Some(url) => Some(Arc::new(
            RpcWalletProvider::new(url.clone()).map_err(to_io_error)?,
        )),
        None => None,
    };

    let state = web::Data::new(AppState::new(
        IndexerService::new(Arc::new(api_client), cache),
        WalletService::new(wallet_provider),
    ));

    info!(
        "Serving {} token balances on port {}",
        config.network.name, config.port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials();
        App::new()
            .app_data(state.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind(("127.0.0.1", config.port))?
    .run()
    .await
}

fn to_io_error(error: errors::IndexerError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}
