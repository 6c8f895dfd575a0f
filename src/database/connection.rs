//! SQLite connection handling
//!
//! One store file holds the three collections. Foreign keys are plain
//! columns; referential checks live in the record-access layer, and parent
//! deletes cascade explicitly in the repositories.

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::utils::errors::AppError;

/// Create a connection pool, creating the store file on first run.
pub async fn create_pool(database_url: Option<&str>) -> Result<SqlitePool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:carshop.db".to_string()),
    };

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the three tables if they are not there yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            license_plate TEXT NOT NULL,
            brand TEXT NOT NULL,
            model TEXT NOT NULL,
            year_of_manufacture INTEGER NOT NULL,
            date_of_technical_inspection TEXT NOT NULL,
            mileage INTEGER,
            vin TEXT,
            owner_name TEXT,
            owner_address TEXT,
            owner_phone TEXT,
            image BLOB
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            car_id INTEGER NOT NULL,
            work_hours REAL NOT NULL,
            work_hour_price REAL NOT NULL,
            service_date TEXT NOT NULL,
            service_description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS parts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            service_id INTEGER NOT NULL,
            part_number TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            quantity INTEGER NOT NULL,
            net_price REAL NOT NULL,
            vat_rate REAL NOT NULL DEFAULT 0.27
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
