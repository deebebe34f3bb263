pub mod file;

use std::sync::Arc;

use crate::{
    config::{StorageConfig, resolve_path},
    models::Goal,
};
use async_trait::async_trait;
use eyre::{Context, Result};
use file::FileStore;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Store {
    /// Load the persisted goal list. Implementations are fail-open: any
    /// read or parse failure yields an empty list instead of an error.
    async fn load(&self) -> Result<Vec<Goal>>;

    /// Replace the persisted goal list with the given one. A failure here
    /// is fatal to the caller; unreported write failures would silently
    /// lose user data.
    async fn save(&self, goals: &[Goal]) -> Result<()>;
}

pub type ArcStore = Arc<dyn Store + Send + Sync>;

pub async fn new_store(config: &StorageConfig) -> Result<ArcStore> {
    let store = match config {
        StorageConfig::File(_) => {
            let path = resolve_path(config.path())
                .wrap_err(format!("resolving store path {}", config.path()))?;
            Arc::new(FileStore::new(path).await?)
        }
    };
    Ok(store)
}
