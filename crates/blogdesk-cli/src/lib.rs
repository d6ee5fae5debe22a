//! # Blogdesk CLI
//!
//! Administrative and seeding utilities for Blogdesk.
//!
//! This library crate provides the functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use blogdesk_cli::seeder::{seed_blogs, BlogSeedConfig};
//!
//! seed_blogs(&pool, BlogSeedConfig::new(50)).await?;
//! ```

pub mod admin;
pub mod seeder;
