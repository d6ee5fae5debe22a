//! Configuration for the Blogdesk API.
//!
//! Each config type is loaded from environment variables by its
//! `from_env()` constructor; `main` loads `.env` first via `dotenvy`.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | required |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `JWT_SECRET` | development placeholder |
//! | `JWT_ACCESS_EXPIRY` | `3600` seconds |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000,http://localhost:5173` |
//! | `UPLOAD_DIR` | `uploads` |
//! | `UPLOAD_PUBLIC_PATH` | `/uploads` |
//! | `UPLOAD_MAX_BYTES` | 5 MiB |
//! | `HOST` / `PORT` | `0.0.0.0` / `1000` |
//! | `OBSERVABILITY_ENABLED` | `true` |
//!
//! # Example
//!
//! ```ignore
//! use crate::config::{JwtConfig, init_db_pool};
//!
//! let jwt_config = JwtConfig::from_env();
//! let db = init_db_pool().await;
//! ```

pub use blogdesk_config::{CorsConfig, JwtConfig, ServerConfig, UploadConfig};
pub use blogdesk_db::{init_db_pool, run_migrations};
