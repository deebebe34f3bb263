#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use eyre::{Context, Result};
use tokio::fs;

use crate::models::Goal;

use super::Store;

/// File-backed goal store. The whole list is serialized as a pretty-printed
/// JSON array; record order in the file is display order.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .wrap_err(format!("creating store directory {}", parent.display()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Store for FileStore {
    async fn load(&self) -> Result<Vec<Goal>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!(
                    "goal store {} is not readable, starting empty: {}",
                    self.path.display(),
                    err
                );
                return Ok(vec![]);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(goals) => Ok(goals),
            Err(err) => {
                log::warn!(
                    "goal store {} is malformed, starting empty: {}",
                    self.path.display(),
                    err
                );
                Ok(vec![])
            }
        }
    }

    async fn save(&self, goals: &[Goal]) -> Result<()> {
        let raw = serde_json::to_string_pretty(goals).wrap_err("serializing goals")?;

        // Write the whole file to a sibling temp path, then rename over the
        // target so readers never observe a partial write.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .await
            .wrap_err(format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .wrap_err(format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}
