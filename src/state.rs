use std::sync::Arc;

use blogdesk_core::{FileStorage, LocalFileStorage};
use sqlx::PgPool;

use crate::config::{CorsConfig, JwtConfig, UploadConfig, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub upload_config: UploadConfig,
    pub storage: Arc<dyn FileStorage>,
}

impl AppState {
    /// Builds the state around an existing pool, backing uploads with the
    /// local directory named in `upload_config`.
    pub fn new(
        db: PgPool,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        upload_config: UploadConfig,
    ) -> Self {
        let storage = LocalFileStorage::new(
            upload_config.dir.clone(),
            upload_config.public_path.clone(),
            upload_config.max_bytes,
        );

        Self {
            db,
            jwt_config,
            cors_config,
            upload_config,
            storage: Arc::new(storage),
        }
    }
}

pub async fn init_app_state() -> AppState {
    AppState::new(
        init_db_pool().await,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        UploadConfig::from_env(),
    )
}
