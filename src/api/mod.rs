use actix_web::web;
use tokio::sync::RwLock;

use crate::models::wallet::WalletSession;
use crate::services::indexer_service::IndexerService;
use crate::services::wallet_service::WalletService;

mod handlers;

/// Shared state handed to every handler. The session survives across
/// requests until a later successful connect replaces it.
pub struct AppState {
    pub indexer: IndexerService,
    pub wallet: WalletService,
    pub session: RwLock<Option<WalletSession>>,
}

impl AppState {
    pub fn new(indexer: IndexerService, wallet: WalletService) -> Self {
        Self {
            indexer,
            wallet,
            session: RwLock::new(None),
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::connect_wallet)
            .service(handlers::current_wallet)
            .service(handlers::get_balances)
            .service(handlers::get_status),
    );
}
