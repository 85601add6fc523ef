use anyhow::{Context, Result};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dotenvy::dotenv;

use crate::utils::commons::DbPool;

const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pool: DbPool,
}

impl AppConfig {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set in .env file or environment variables")?;

        let pool_size = match std::env::var("DATABASE_POOL_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("DATABASE_POOL_SIZE must be a positive integer")?,
            Err(_) => DEFAULT_POOL_SIZE,
        };

        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        tracing::info!(pool_size, "database pool ready");

        Ok(Self::new(pool))
    }
}
