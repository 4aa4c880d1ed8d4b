use persistence::db::{DatabaseConfig, create_postgres_pool, ensure_schema};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool and schema from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or the
/// table cannot be created
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}
