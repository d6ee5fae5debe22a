//! # Blogdesk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: bearer token signing configuration
//! - [`cors`]: CORS allowed origins
//! - [`upload`]: image upload storage
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use blogdesk_config::{CorsConfig, JwtConfig, ServerConfig, UploadConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let upload_config = UploadConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;
pub mod upload;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use upload::UploadConfig;
