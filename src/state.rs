use sqlx::PgPool;

use tableside_config::{AppConfig, CorsConfig, JwtConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, config: &AppConfig) -> Self {
        Self {
            db,
            jwt_config: config.jwt.clone(),
            cors_config: config.cors.clone(),
        }
    }
}
