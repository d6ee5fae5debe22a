//! # Blogdesk Core
//!
//! Core types, errors, and utilities for the Blogdesk API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`envelope`]: The `{IsSuccess, Message, Data}` response wrapper
//! - [`file_storage`]: Storage backends for uploaded images
//! - [`pagination`]: Page window arithmetic for list endpoints
//! - [`password`]: bcrypt hashing and verification
//! - [`serde_ext`]: Lenient request-body deserializers
//!
//! # Example
//!
//! ```ignore
//! use blogdesk_core::{AppError, ApiResponse, PageWindow};
//!
//! let window = PageWindow::from_page(Some(2), None, 9);
//! let err = AppError::not_found(anyhow::anyhow!("Blog not found"));
//! ```

pub mod envelope;
pub mod errors;
pub mod file_storage;
pub mod pagination;
pub mod password;
pub mod serde_ext;

pub use envelope::ApiResponse;
pub use errors::AppError;
pub use file_storage::{FileStorage, LocalFileStorage, StorageError};
pub use pagination::{PageWindow, Paginated};
pub use password::{hash_password, verify_password};
