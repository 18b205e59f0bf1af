use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;

use crate::api::AppState;
use crate::errors::IndexerError;
use crate::models::api_response::success_response;
use crate::models::token::TokenCard;

#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    pub address: String,
    pub tokens: Vec<TokenCard>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub connecting: bool,
    pub querying: bool,
    pub connected_address: Option<String>,
}

#[post("/wallet/connect")]
async fn connect_wallet(state: web::Data<AppState>) -> Result<HttpResponse, IndexerError> {
    let session = state.wallet.connect().await?;
    *state.session.write().await = Some(session.clone());
    Ok(success_response(session))
}

#[get("/wallet")]
async fn current_wallet(state: web::Data<AppState>) -> Result<HttpResponse, IndexerError> {
    let session = state.session.read().await.clone();
    Ok(success_response(session))
}

#[get("/balances/{address}")]
async fn get_balances(
    state: web::Data<AppState>,
    address: web::Path<String>,
) -> Result<HttpResponse, IndexerError> {
    let result = state.indexer.query_balances(&address).await?;
    Ok(success_response(BalancesResponse {
        tokens: result.cards(),
        address: result.address,
    }))
}

#[get("/status")]
async fn get_status(state: web::Data<AppState>) -> Result<HttpResponse, IndexerError> {
    let connected_address = state
        .session
        .read()
        .await
        .as_ref()
        .map(|session| session.address.clone());

    Ok(success_response(StatusResponse {
        connecting: state.wallet.is_connecting(),
        querying: state.indexer.is_querying(),
        connected_address,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use ethers::types::U256;
    use serde_json::Value;

    use super::*;
    use crate::models::token::{TokenBalanceEntry, TokenMetadata};
    use crate::services::indexer_service::IndexerService;
    use crate::services::metadata_cache::MetadataCache;
    use crate::services::token_api::mock::MockTokenApi;
    use crate::services::wallet_service::mock::MockWalletProvider;
    use crate::services::wallet_service::{WalletProvider, WalletService};

    const HOLDER: &str = "0x5555555555555555555555555555555555555555";
    const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

    fn state(api: MockTokenApi, provider: Option<Arc<dyn WalletProvider>>) -> web::Data<AppState> {
        let indexer =
            IndexerService::new(Arc::new(api), Arc::new(MetadataCache::in_memory()));
        web::Data::new(AppState::new(indexer, WalletService::new(provider)))
    }

    async fn call(
        state: &web::Data<AppState>,
        request: test::TestRequest,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::api::config),
        )
        .await;
        let response = test::call_service(&app, request.to_request()).await;
        let status = response.status();
        (status, test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn connect_stores_the_session() {
        let provider: Arc<dyn WalletProvider> =
            Arc::new(MockWalletProvider::with_accounts(&[HOLDER]));
        let state = state(MockTokenApi::new(), Some(provider));

        let (status, body) =
            call(&state, test::TestRequest::post().uri("/api/v1/wallet/connect")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["result"]["address"], HOLDER);

        let session = state.session.read().await.clone();
        assert_eq!(session.unwrap().address, HOLDER);
    }

    #[actix_web::test]
    async fn rejected_connect_leaves_no_session() {
        let provider: Arc<dyn WalletProvider> = Arc::new(MockWalletProvider::rejecting());
        let state = state(MockTokenApi::new(), Some(provider));

        let (status, body) =
            call(&state, test::TestRequest::post().uri("/api/v1/wallet/connect")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["status"], "FAILURE");
        assert_eq!(body["error"]["code"], 403);

        assert!(state.session.read().await.is_none());
    }

    #[actix_web::test]
    async fn connect_without_provider_is_service_unavailable() {
        let state = state(MockTokenApi::new(), None);

        let (status, _) =
            call(&state, test::TestRequest::post().uri("/api/v1/wallet/connect")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn balances_return_formatted_cards() {
        let api = MockTokenApi::new()
            .with_balances(
                HOLDER,
                vec![TokenBalanceEntry {
                    contract_address: DAI.to_string(),
                    token_balance: U256::from(1_250_000_000_000_000_000u64),
                }],
            )
            .with_metadata(
                DAI,
                TokenMetadata {
                    symbol: "DAI".to_string(),
                    decimals: 18,
                    logo: Some("https://static.example/dai.png".to_string()),
                },
            );
        let state = state(api, None);

        let (status, body) = call(
            &state,
            test::TestRequest::get().uri(&format!("/api/v1/balances/{}", HOLDER)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let card = &body["result"]["tokens"][0];
        assert_eq!(card["symbol"], "DAI");
        assert_eq!(card["balance"], "1.25");
        assert_eq!(card["display_balance"], "1.25");
        assert_eq!(card["logo"], "https://static.example/dai.png");
    }

    #[actix_web::test]
    async fn zero_balances_render_an_empty_grid() {
        let api = MockTokenApi::new().with_balances(HOLDER, vec![]);
        let state = state(api, None);

        let (status, body) = call(
            &state,
            test::TestRequest::get().uri(&format!("/api/v1/balances/{}", HOLDER)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["tokens"], serde_json::json!([]));
        assert!(body["error"].is_null());
    }

    #[actix_web::test]
    async fn malformed_address_is_a_bad_request() {
        let state = state(MockTokenApi::new(), None);

        let (status, body) = call(
            &state,
            test::TestRequest::get().uri("/api/v1/balances/0x1234"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 400);
    }

    #[actix_web::test]
    async fn status_reports_idle_flags_and_session() {
        let state = state(MockTokenApi::new(), None);

        let (status, body) =
            call(&state, test::TestRequest::get().uri("/api/v1/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["connecting"], false);
        assert_eq!(body["result"]["querying"], false);
        assert!(body["result"]["connected_address"].is_null());
    }
}
