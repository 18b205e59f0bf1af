use std::collections::HashMap;
use std::path::PathBuf;

use log::warn;
use tokio::sync::RwLock;

use crate::models::token::TokenMetadata;

/// Process-wide token metadata cache, snapshotted to a single JSON file.
/// Entries are never evicted and never overwritten: metadata is immutable
/// per contract, so the first settled value wins for the process lifetime.
pub struct MetadataCache {
    entries: RwLock<HashMap<String, TokenMetadata>>,
    snapshot_path: Option<PathBuf>,
}

impl MetadataCache {
    pub fn new(snapshot_path: PathBuf) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            snapshot_path: Some(snapshot_path),
        }
    }

    /// Cache without a disk snapshot, for tests and ephemeral runs.
    pub fn in_memory() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            snapshot_path: None,
        }
    }

    pub async fn get(&self, contract_address: &str) -> Option<TokenMetadata> {
        self.entries.read().await.get(contract_address).cloned()
    }

    /// Insert metadata for a contract. A later put for the same key is a
    /// no-op, so get after a successful put returns the same value for the
    /// lifetime of the process.
    pub async fn put(&self, contract_address: String, metadata: TokenMetadata) {
        self.entries
            .write()
            .await
            .entry(contract_address)
            .or_insert(metadata);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Load the snapshot once at startup. A missing or unreadable file
    /// yields an empty cache.
    pub async fn load_from_storage(&self) {
        let Some(path) = &self.snapshot_path else {
            return;
        };
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(_) => return,
        };

        match serde_json::from_str::<HashMap<String, TokenMetadata>>(&data) {
            Ok(stored) => {
                let mut entries = self.entries.write().await;
                for (contract, metadata) in stored {
                    entries.entry(contract).or_insert(metadata);
                }
            }
            Err(e) => warn!("Ignoring corrupt metadata snapshot: {}", e),
        }
    }

    /// Write the snapshot. Failures are reported to the caller, which treats
    /// them as non-fatal: the cache is an optimization, not a store of
    /// record.
    pub async fn persist(&self) -> std::io::Result<()> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let entries = self.entries.read().await;
        let data = serde_json::to_string(&*entries)?;
        drop(entries);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)
    }
}
