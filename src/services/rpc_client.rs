use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::IndexerError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<R> {
    result: Option<R>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Minimal JSON-RPC 2.0 client over HTTP.
#[derive(Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: String) -> Result<Self, IndexerError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IndexerError::NetworkError(e.without_url().to_string()))?;

        Ok(Self { http, url })
    }

    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R, IndexerError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexerError::ApiError {
                code: status.as_u16() as i64,
                message: format!("{} returned HTTP {}", method, status),
            });
        }

        let body: JsonRpcResponse<R> = response.json().await.map_err(|e| {
            IndexerError::NetworkError(format!("malformed response: {}", e.without_url()))
        })?;

        if let Some(error) = body.error {
            return Err(IndexerError::ApiError {
                code: error.code,
                message: error.message,
            });
        }

        body.result
            .ok_or_else(|| IndexerError::NetworkError(format!("{} returned no result", method)))
    }
}

// Request URLs carry the API key, so they are stripped from reqwest errors
// before the message can reach logs or clients.
fn map_transport_error(error: reqwest::Error) -> IndexerError {
    if error.is_timeout() {
        IndexerError::NetworkError("request timed out".to_string())
    } else {
        IndexerError::NetworkError(error.without_url().to_string())
    }
}
