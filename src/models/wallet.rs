use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a successful wallet connection. The address is the first
/// account the provider authorized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSession {
    pub id: Uuid,
    pub address: String,
    pub connected_at: DateTime<Utc>,
}

impl WalletSession {
    pub fn new(address: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            address,
            connected_at: Utc::now(),
        }
    }
}
