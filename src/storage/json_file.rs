//! Whole-file JSON collection store.
//!
//! A collection is an ordered JSON array persisted in a single file. Every load reads the
//! complete file and every save replaces it. There is no locking and no atomic rename: a
//! crash during `save` can leave a truncated file, which surfaces as [`StoreError::Parse`]
//! on the next `load`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// Indentation used for the on-disk files.
const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} does not contain a valid JSON array: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save access to one collection file holding records of type `T`.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. A missing file is an empty collection.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "collection file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                error!(path = %self.path.display(), "failed to read collection: {}", source);
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| {
            error!(path = %self.path.display(), "failed to parse collection: {}", source);
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Replaces the file contents with `records`, pretty-printed.
    pub async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let content = to_pretty_json(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| {
                error!(path = %self.path.display(), "failed to write collection: {}", source);
                StoreError::Io {
                    path: self.path.clone(),
                    source,
                }
            })?;

        debug!(path = %self.path.display(), records = records.len(), "collection saved");
        Ok(())
    }
}

fn to_pretty_json<T: Serialize>(records: &[T]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}
