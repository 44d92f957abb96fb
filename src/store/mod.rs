//! # Persistent Store
//!
//! The product collection on disk: one JSON array, read in full at startup and written in
//! full at shutdown.

use crate::model::Product;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a product array.
    #[error("Malformed data file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize products: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// JSON file holding every product.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every persisted product.
    ///
    /// A missing file is created (parent directories included) holding `[]`, and an empty
    /// collection is returned.
    pub async fn load(&self) -> Result<Vec<Product>, StoreError> {
        if !tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.io(e))?
        {
            warn!(path = %self.path.display(), "Data file missing, creating an empty one");
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io(e))?;
            }
            tokio::fs::write(&self.path, "[]")
                .await
                .map_err(|e| self.io(e))?;
            return Ok(Vec::new());
        }

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io(e))?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), size = products.len(), "Read data file");
        Ok(products)
    }

    /// Overwrites the file with `products`, pretty-printed.
    pub async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(products).map_err(StoreError::Serialize)?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| self.io(e))?;

        info!(path = %self.path.display(), size = products.len(), "Wrote data file");
        Ok(())
    }

    fn io(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
