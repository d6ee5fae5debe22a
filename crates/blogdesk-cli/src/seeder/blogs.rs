//! Blog seeding functionality.
//!
//! Posts are generated as raw JSON bodies and pushed through the same
//! validator the save endpoint uses, so seeded rows always satisfy the
//! rules a real save would enforce.

use blogdesk_models::{NormalizedBlog, validate_blog};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use fake::faker::internet::en::DomainSuffix;
use rayon::prelude::*;
use serde_json::{Map, Value, json};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;
use uuid::Uuid;

use super::models::{BlogSeedConfig, SEED_CATEGORIES};

const BATCH_SIZE: usize = 500;

/// Builds one fake save body.
pub fn fake_blog_body(index: usize, blog_from: &str) -> Map<String, Value> {
    let words: Vec<String> = Words(3..6).fake();
    let title = capitalize(&words.join(" "));
    let slug = format!("{}-{}", words.join("-"), Uuid::new_v4().simple());
    let suffix: String = DomainSuffix().fake();
    let url = format!("https://blog.example.{}/{}", suffix, slug);
    let category = SEED_CATEGORIES[index % SEED_CATEGORIES.len()];

    let day: u32 = (1..29).fake();
    let month: u32 = (1..13).fake();
    let year: u32 = (2019..2026).fake();

    let other_image: Vec<Value> = (0..(0..3).fake::<usize>())
        .map(|i| {
            json!({
                "path": format!("/uploads/seed-{}-{}.png", index, i),
                "description": Sentence(3..8).fake::<String>(),
                "alttext": Words(2..4).fake::<Vec<String>>().join(" "),
            })
        })
        .collect();

    let body = json!({
        "banner_image": format!("/uploads/seed-banner-{}.png", index),
        "banner_alttext": Sentence(3..6).fake::<String>(),
        "category": category,
        "title": title,
        "blog_date": format!("{:02}-{:02}-{}", day, month, year),
        "brief": Paragraph(2..4).fake::<String>(),
        "meta_title": title,
        "url_slug": slug,
        "canonical": url,
        "og_title": title,
        "og_description": Sentence(8..16).fake::<String>(),
        "og_url": url,
        "og_type": "article",
        "og_sitename": "Blogdesk",
        "meta_description": Sentence(8..16).fake::<String>(),
        "blog_from": blog_from,
        "other_image": other_image,
    });

    match body {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Generates validated posts in parallel using Rayon.
pub fn generate_blogs(
    count: usize,
    blog_from: &str,
) -> Result<Vec<NormalizedBlog>, Box<dyn std::error::Error>> {
    let blogs = (0..count)
        .into_par_iter()
        .map(|index| validate_blog(&fake_blog_body(index, blog_from)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Generated an invalid blog: {}", e))?;

    Ok(blogs)
}

/// Seeds blogs into the database
pub async fn seed_blogs(
    db: &PgPool,
    config: &BlogSeedConfig,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📝 Seeding {} blogs...", config.count);

    let blogs = generate_blogs(config.count, &config.blog_from)?;
    let ids = insert_blogs_batch(db, &blogs).await?;

    println!(
        "   ✓ Inserted {} blogs in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Inserts blogs in batches using multi-value INSERT statements
pub async fn insert_blogs_batch(
    db: &PgPool,
    blogs: &[NormalizedBlog],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(blogs.len());

    for chunk in blogs.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO blogs (banner_image, banner_alttext, category, title, blog_date, \
             brief, meta_title, url_slug, canonical, og_title, og_description, og_url, \
             og_type, og_sitename, meta_description, blog_from, other_image) ",
        );

        builder.push_values(chunk, |mut row, blog| {
            row.push_bind(&blog.banner_image)
                .push_bind(&blog.banner_alttext)
                .push_bind(&blog.category)
                .push_bind(&blog.title)
                .push_bind(blog.blog_date)
                .push_bind(&blog.brief)
                .push_bind(&blog.meta_title)
                .push_bind(&blog.url_slug)
                .push_bind(&blog.canonical)
                .push_bind(&blog.og_title)
                .push_bind(&blog.og_description)
                .push_bind(&blog.og_url)
                .push_bind(&blog.og_type)
                .push_bind(&blog.og_sitename)
                .push_bind(&blog.meta_description)
                .push_bind(&blog.blog_from)
                .push_bind(Json(blog.other_image.clone()));
        });
        builder.push(" RETURNING id");

        let ids: Vec<Uuid> = builder
            .build_query_scalar::<Uuid>()
            .fetch_all(&mut *tx)
            .await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

/// Clears all blogs from the database
pub async fn clear_blogs(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing blogs...");

    let result = sqlx::query("DELETE FROM blogs")
        .execute(db)
        .await?
        .rows_affected();

    println!("   ✓ Deleted {} blogs in {:?}", result, start_time.elapsed());

    Ok(result)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdesk_models::blogs::validation::is_valid_slug;

    #[test]
    fn test_generated_blogs_are_valid() {
        let blogs = generate_blogs(20, "blogsmk").unwrap();
        assert_eq!(blogs.len(), 20);
        for blog in &blogs {
            assert!(is_valid_slug(&blog.url_slug), "{}", blog.url_slug);
            assert_eq!(blog.blog_from, "blogsmk");
            assert!(blog.other_image.len() < 3);
        }
    }

    #[test]
    fn test_generated_slugs_are_unique() {
        let blogs = generate_blogs(50, "blogsmk").unwrap();
        let mut slugs: Vec<_> = blogs.iter().map(|b| b.url_slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), 50);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize(""), "");
    }
}
