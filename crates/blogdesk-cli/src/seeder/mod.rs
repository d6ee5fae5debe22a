//! Database seeding for blog posts.
//!
//! # Module Structure
//!
//! - [`blogs`] - Blog generation and insertion
//! - [`models`] - Seeding configuration
//!
//! # Performance
//!
//! - Parallel data generation using Rayon
//! - Batch inserts with multi-value INSERT statements

pub mod blogs;
pub mod models;

pub use blogs::{clear_blogs, generate_blogs};
pub use models::BlogSeedConfig;

use sqlx::PgPool;
use std::time::Instant;

/// Seeds `config.count` posts.
pub async fn seed_blogs(db: &PgPool, config: BlogSeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting blog seeding...");
    println!("   - Posts: {}", config.count);
    println!("   - Source: {}", config.blog_from);

    blogs::seed_blogs(db, &config).await?;

    println!("✅ Seeding completed in {:?}", start_time.elapsed());
    Ok(())
}
