use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::IndexerError;
use crate::models::wallet::WalletSession;
use crate::services::rpc_client::RpcClient;
use crate::services::FlightGuard;

/// EIP-1193 error code for a user-rejected authorization request.
const USER_REJECTED_CODE: i64 = 4001;

/// External wallet capability: request authorization, list accounts.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request_accounts(&self) -> Result<Vec<String>, IndexerError>;
}

/// Wallet provider reached over JSON-RPC (`eth_requestAccounts`).
pub struct RpcWalletProvider {
    rpc: RpcClient,
}

impl RpcWalletProvider {
    pub fn new(url: String) -> Result<Self, IndexerError> {
        Ok(Self {
            rpc: RpcClient::new(url)?,
        })
    }
}

#[async_trait]
impl WalletProvider for RpcWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, IndexerError> {
        let result: Result<Vec<String>, IndexerError> = self
            .rpc
            .call("eth_requestAccounts", Vec::<String>::new())
            .await;

        result.map_err(|e| match e {
            IndexerError::ApiError {
                code: USER_REJECTED_CODE,
                ..
            } => IndexerError::UserRejected,
            // An unreachable endpoint is indistinguishable from no wallet.
            IndexerError::NetworkError(_) => IndexerError::WalletUnavailable,
            other => other,
        })
    }
}

pub struct WalletService {
    provider: Option<Arc<dyn WalletProvider>>,
    connecting: AtomicBool,
}

impl WalletService {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            connecting: AtomicBool::new(false),
        }
    }

    /// Busy flag for the presentation layer to disable duplicate triggers.
    pub fn is_connecting(&self) -> bool {
        self.connecting.load(Ordering::Acquire)
    }

    /// Request account authorization and open a session for the first
    /// authorized address. On failure the caller's prior session state is
    /// left untouched.
    pub async fn connect(&self) -> Result<WalletSession, IndexerError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(IndexerError::WalletUnavailable)?;
        let _guard = FlightGuard::try_acquire(&self.connecting)
            .ok_or(IndexerError::RequestInFlight)?;

        let accounts = provider.request_accounts().await?;
        let address = accounts
            .into_iter()
            .next()
            .ok_or(IndexerError::WalletUnavailable)?;

        info!("Wallet connected: {}", address);
        Ok(WalletSession::new(address))
    }
}
