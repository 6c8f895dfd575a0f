pub mod connection;
pub mod seed;

pub use connection::create_pool;

use sqlx::SqlitePool;

use crate::utils::errors::AppError;

/// Ensure the schema exists, then load the seed dataset on first run.
pub async fn initialize(pool: &SqlitePool) -> Result<(), AppError> {
    connection::ensure_schema(pool).await?;
    seed::seed_if_empty(pool).await?;
    Ok(())
}
