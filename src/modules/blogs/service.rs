use blogdesk_core::file_storage::upload_key;
use blogdesk_core::{AppError, FileStorage, Paginated, StorageError};
use blogdesk_models::{Blog, BlogFilter, BlogQuery, NormalizedBlog, SortOrder};
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::{debug, error, instrument};
use uuid::Uuid;

const BLOG_COLUMNS: &str = "id, banner_image, banner_alttext, category, title, blog_date, \
    brief, meta_title, url_slug, canonical, og_title, og_description, og_url, og_type, \
    og_sitename, meta_description, blog_from, other_image, created_at, updated_at";

/// WHERE clause and its bind values for a filter. Placeholders are numbered
/// from `$1` in the order the values appear.
fn filter_sql(filter: &BlogFilter) -> (String, Vec<String>) {
    let mut where_clause = String::from(" WHERE 1=1");
    let mut params = Vec::new();

    if let Some(category) = &filter.category {
        params.push(category.clone());
        where_clause.push_str(&format!(" AND category = ${}", params.len()));
    }

    if let Some(title) = &filter.title_contains {
        params.push(title.clone());
        where_clause.push_str(&format!(
            " AND strpos(lower(title), lower(${})) > 0",
            params.len()
        ));
    }

    if let Some(source) = &filter.source {
        params.push(source.clone());
        where_clause.push_str(&format!(" AND blog_from = ${}", params.len()));
    }

    (where_clause, params)
}

fn order_sql(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::CreatedAtDesc => " ORDER BY created_at DESC, id DESC",
    }
}

fn window_sql(query: &BlogQuery) -> String {
    match query.window.row_limit() {
        Some(limit) => format!(" LIMIT {} OFFSET {}", limit, query.window.offset()),
        None => format!(" OFFSET {}", query.window.offset()),
    }
}

fn select_sql(query: &BlogQuery) -> (String, Vec<String>) {
    let (where_clause, params) = filter_sql(&query.filter);
    let sql = format!(
        "SELECT {} FROM blogs{}{}{}",
        BLOG_COLUMNS,
        where_clause,
        order_sql(query.sort),
        window_sql(query)
    );
    (sql, params)
}

pub struct BlogService;

impl BlogService {
    /// One page of matching posts plus the size of the whole filtered set.
    #[instrument(skip(db), fields(db.table = "blogs"))]
    pub async fn list(db: &PgPool, query: &BlogQuery) -> Result<Paginated<Blog>, AppError> {
        let (where_clause, params) = filter_sql(&query.filter);

        let count_query = format!("SELECT COUNT(*) FROM blogs{}", where_clause);
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        for param in &params {
            count_sql = count_sql.bind(param);
        }
        let total_docs = count_sql.fetch_one(db).await.map_err(|e| {
            error!(error = %e, "Database error counting blogs");
            AppError::from(e)
        })?;

        let docs = Self::list_all(db, query).await?;

        debug!(total = %total_docs, returned = %docs.len(), "Blogs fetched");

        Ok(Paginated { docs, total_docs })
    }

    /// Matching posts without a total count.
    #[instrument(skip(db), fields(db.table = "blogs"))]
    pub async fn list_all(db: &PgPool, query: &BlogQuery) -> Result<Vec<Blog>, AppError> {
        let (data_query, params) = select_sql(query);

        let mut data_sql = sqlx::query_as::<_, Blog>(&data_query);
        for param in params {
            data_sql = data_sql.bind(param);
        }

        data_sql.fetch_all(db).await.map_err(|e| {
            error!(error = %e, "Database error fetching blogs");
            AppError::from(e)
        })
    }

    #[instrument(skip(db), fields(blog.id = %id, db.table = "blogs"))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(&format!("SELECT {} FROM blogs WHERE id = $1", BLOG_COLUMNS))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Blog not found")))
    }

    #[instrument(skip(db), fields(db.table = "blogs"))]
    pub async fn find_by_slug(db: &PgPool, slug: &str) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(&format!(
            "SELECT {} FROM blogs WHERE url_slug = $1 ORDER BY created_at DESC LIMIT 1",
            BLOG_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Blog not found")))
    }

    #[instrument(skip(db, blog), fields(blog.url_slug = %blog.url_slug, db.table = "blogs"))]
    pub async fn create(db: &PgPool, blog: &NormalizedBlog) -> Result<Blog, AppError> {
        let created = sqlx::query_as::<_, Blog>(&format!(
            "INSERT INTO blogs (banner_image, banner_alttext, category, title, blog_date, brief, \
             meta_title, url_slug, canonical, og_title, og_description, og_url, og_type, \
             og_sitename, meta_description, blog_from, other_image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {}",
            BLOG_COLUMNS
        ))
        .bind(&blog.banner_image)
        .bind(&blog.banner_alttext)
        .bind(&blog.category)
        .bind(&blog.title)
        .bind(blog.blog_date)
        .bind(&blog.brief)
        .bind(&blog.meta_title)
        .bind(&blog.url_slug)
        .bind(&blog.canonical)
        .bind(&blog.og_title)
        .bind(&blog.og_description)
        .bind(&blog.og_url)
        .bind(&blog.og_type)
        .bind(&blog.og_sitename)
        .bind(&blog.meta_description)
        .bind(&blog.blog_from)
        .bind(Json(&blog.other_image))
        .fetch_one(db)
        .await?;

        debug!(blog.id = %created.id, "Blog created");
        Ok(created)
    }

    /// Replaces every payload column of an existing post.
    #[instrument(skip(db, blog), fields(blog.id = %id, db.table = "blogs"))]
    pub async fn update(db: &PgPool, id: Uuid, blog: &NormalizedBlog) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(&format!(
            "UPDATE blogs SET banner_image = $2, banner_alttext = $3, category = $4, title = $5, \
             blog_date = $6, brief = $7, meta_title = $8, url_slug = $9, canonical = $10, \
             og_title = $11, og_description = $12, og_url = $13, og_type = $14, \
             og_sitename = $15, meta_description = $16, blog_from = $17, other_image = $18, \
             updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            BLOG_COLUMNS
        ))
        .bind(id)
        .bind(&blog.banner_image)
        .bind(&blog.banner_alttext)
        .bind(&blog.category)
        .bind(&blog.title)
        .bind(blog.blog_date)
        .bind(&blog.brief)
        .bind(&blog.meta_title)
        .bind(&blog.url_slug)
        .bind(&blog.canonical)
        .bind(&blog.og_title)
        .bind(&blog.og_description)
        .bind(&blog.og_url)
        .bind(&blog.og_type)
        .bind(&blog.og_sitename)
        .bind(&blog.meta_description)
        .bind(&blog.blog_from)
        .bind(Json(&blog.other_image))
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Blog not found for update")))
    }

    #[instrument(skip(db), fields(blog.id = %id, db.table = "blogs"))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Blog not found")));
        }

        Ok(())
    }

    /// Every slug, oldest post first.
    #[instrument(skip(db), fields(db.table = "blogs"))]
    pub async fn list_slugs(db: &PgPool) -> Result<Vec<String>, AppError> {
        let slugs = sqlx::query_scalar::<_, String>(
            "SELECT url_slug FROM blogs ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(db)
        .await?;

        Ok(slugs)
    }

    /// Writes an uploaded image and returns the path clients fetch it from.
    #[instrument(skip(storage, content), fields(file.name = %original_name, file.size = content.len()))]
    pub async fn store_image(
        storage: &dyn FileStorage,
        original_name: &str,
        content: &[u8],
    ) -> Result<String, AppError> {
        let key = upload_key(original_name, Utc::now().timestamp_millis());
        let key = storage.save(&key, content).await.map_err(storage_error)?;
        storage.public_path(&key).map_err(storage_error)
    }
}

fn storage_error(err: StorageError) -> AppError {
    match err {
        StorageError::InvalidFileSize { .. } | StorageError::InvalidKey(_) => {
            AppError::bad_request(err)
        }
        StorageError::Io(_) => AppError::internal(err),
    }
}
