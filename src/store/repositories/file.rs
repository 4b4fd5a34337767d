//! File-backed repository reading the flights JSON document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::models::{Flight, FlightsDocument};
use crate::store::error::{StoreError, StoreResult};
use crate::store::repository::FlightsRepository;

/// Repository that reads the flights document from a JSON file.
///
/// The file is re-read on every fetch, so edits to the document are picked up
/// without a restart. A missing file is reported as [`StoreError::NotFound`];
/// all other read or parse failures are generic.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    /// Create a repository reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this repository reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl FlightsRepository for FileRepository {
    async fn fetch_flights(&self) -> StoreResult<Vec<Flight>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| {
                if source.kind() == ErrorKind::NotFound {
                    StoreError::NotFound {
                        path: self.path_string(),
                    }
                } else {
                    StoreError::Io {
                        path: self.path_string(),
                        source,
                    }
                }
            })?;

        let document: FlightsDocument =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path_string(),
                source,
            })?;

        Ok(document.flights)
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(self.path.exists())
    }
}
