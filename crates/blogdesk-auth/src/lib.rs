//! # Blogdesk Auth
//!
//! Bearer token handling for the admin API.
//!
//! - [`claims`]: the JWT claim set carried by access tokens
//! - [`jwt`]: token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use blogdesk_auth::{create_access_token, verify_token};
//! use blogdesk_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "admin@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
