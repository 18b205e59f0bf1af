use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Wallet provider unavailable")]
    WalletUnavailable,

    #[error("Wallet authorization rejected by user")]
    UserRejected,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("Another request is already in progress")]
    RequestInFlight,
}

// Serialized error body carried inside the response envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

// Implement ResponseError for IndexerError
impl ResponseError for IndexerError {
    fn error_response(&self) -> HttpResponse {
        let api_error = ApiError {
            code: match self {
                IndexerError::WalletUnavailable => 503,
                IndexerError::UserRejected => 403,
                IndexerError::InvalidAddress(_) => 400,
                IndexerError::NetworkError(_) => 500,
                IndexerError::ApiError { .. } => 502,
                IndexerError::RequestInFlight => 429,
            },
            message: self.to_string(),
        };

        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        };

        match self {
            IndexerError::WalletUnavailable => HttpResponse::ServiceUnavailable().json(response),
            IndexerError::UserRejected => HttpResponse::Forbidden().json(response),
            IndexerError::InvalidAddress(_) => HttpResponse::BadRequest().json(response),
            IndexerError::NetworkError(_) => HttpResponse::InternalServerError().json(response),
            IndexerError::ApiError { .. } => HttpResponse::BadGateway().json(response),
            IndexerError::RequestInFlight => HttpResponse::TooManyRequests().json(response),
        }
    }
}
