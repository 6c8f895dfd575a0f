//! Part persistence

use sqlx::SqlitePool;

use crate::dto::part_dto::PartPayload;
use crate::models::Part;
use crate::utils::errors::AppError;

pub struct PartRepository {
    pool: SqlitePool,
}

impl PartRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Part>, AppError> {
        let parts = sqlx::query_as::<_, Part>("SELECT * FROM parts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(parts)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Part>, AppError> {
        let part = sqlx::query_as::<_, Part>("SELECT * FROM parts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(part)
    }

    /// Filter by owning service. An unknown service id yields an empty list.
    pub async fn find_by_service(&self, service_id: i64) -> Result<Vec<Part>, AppError> {
        let parts =
            sqlx::query_as::<_, Part>("SELECT * FROM parts WHERE service_id = ? ORDER BY id")
                .bind(service_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(parts)
    }

    pub async fn insert(&self, payload: &PartPayload) -> Result<Part, AppError> {
        let part = sqlx::query_as::<_, Part>(
            r#"
            INSERT INTO parts (service_id, part_number, name, description, quantity, net_price, vat_rate)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(payload.service_id)
        .bind(&payload.part_number)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.quantity)
        .bind(payload.net_price)
        .bind(payload.vat_rate_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(part)
    }

    /// Whole-record replace. Zero affected rows means the record vanished
    /// between the caller's existence check and the write.
    pub async fn update(&self, id: i64, payload: &PartPayload) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE parts
            SET service_id = ?, part_number = ?, name = ?, description = ?,
                quantity = ?, net_price = ?, vat_rate = ?
            WHERE id = ?
            "#,
        )
        .bind(payload.service_id)
        .bind(&payload.part_number)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.quantity)
        .bind(payload.net_price)
        .bind(payload.vat_rate_or_default())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM parts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
