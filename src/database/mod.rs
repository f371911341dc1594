pub mod schema;

use crate::error::AppError;
use sqlx::{Pool, Sqlite};
use tracing::info;

/// Applies the declarative schema. Every statement is `IF NOT EXISTS`, so
/// re-running against an existing database is a no-op.
pub async fn init_schema(pool: &Pool<Sqlite>) -> Result<(), AppError> {
    info!("Applying database schema");
    sqlx::raw_sql(schema::CURRENT_SCHEMA).execute(pool).await?;
    Ok(())
}
