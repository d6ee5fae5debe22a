//! Storage for uploaded blog images.
//!
//! Handlers talk to a [`FileStorage`] trait object so the backend can be
//! swapped; [`LocalFileStorage`] writes into a directory that the HTTP
//! layer also serves statically.
//!
//! # Example
//!
//! ```ignore
//! use blogdesk_core::file_storage::{FileStorage, LocalFileStorage, upload_key};
//!
//! let storage = LocalFileStorage::new("./uploads".into(), "/uploads".to_string(), 5 * 1024 * 1024);
//! let key = upload_key("banner.png", 1_700_000_000_000);
//! storage.save(&key, &bytes).await?;
//! assert_eq!(storage.public_path(&key)?, "/uploads/1700000000000-banner.png");
//! ```

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use tokio::fs;

pub type StorageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StorageError>> + Send + 'a>>;

/// Abstract storage backend for uploaded files.
pub trait FileStorage: Send + Sync + fmt::Debug {
    /// Store `content` under `key`, returning the key.
    fn save<'a>(&'a self, key: &'a str, content: &'a [u8]) -> StorageFuture<'a, String>;

    /// Path clients use to fetch the file (e.g. `/uploads/<key>`).
    fn public_path(&self, key: &str) -> Result<String, StorageError>;

    /// Largest accepted upload in bytes.
    fn max_file_size(&self) -> usize;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File exceeds maximum size of {max_bytes} bytes")]
    InvalidFileSize { max_bytes: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Builds the storage key for an upload: `<unix millis>-<sanitized name>`.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`, and any directory part of
/// the client-supplied name is dropped.
pub fn upload_key(original_name: &str, now_millis: i64) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let mut sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches('.').is_empty() {
        sanitized = "file".to_string();
    }

    format!("{}-{}", now_millis, sanitized)
}

/// Directory-backed storage.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    base_dir: PathBuf,
    public_prefix: String,
    max_file_size: usize,
}

impl LocalFileStorage {
    pub fn new(base_dir: PathBuf, public_prefix: String, max_file_size: usize) -> Self {
        Self {
            base_dir,
            public_prefix,
            max_file_size,
        }
    }

    fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') || key.starts_with('\\')
        {
            return Err(StorageError::InvalidKey(
                "Key must not be empty, contain '..', or start with a separator".to_string(),
            ));
        }

        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '/')
        {
            return Err(StorageError::InvalidKey(
                "Key contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }
}

impl FileStorage for LocalFileStorage {
    fn save<'a>(&'a self, key: &'a str, content: &'a [u8]) -> StorageFuture<'a, String> {
        Box::pin(async move {
            Self::validate_key(key)?;

            if content.len() > self.max_file_size {
                return Err(StorageError::InvalidFileSize {
                    max_bytes: self.max_file_size,
                });
            }

            let file_path = self.base_dir.join(key);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&file_path, content).await?;

            Ok(key.to_string())
        })
    }

    fn public_path(&self, key: &str) -> Result<String, StorageError> {
        Self::validate_key(key)?;
        Ok(format!("{}/{}", self.public_prefix.trim_end_matches('/'), key))
    }

    fn max_file_size(&self) -> usize {
        self.max_file_size
    }
}
