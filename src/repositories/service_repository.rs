//! Service job persistence
//!
//! Deleting a service job takes its parts with it in one transaction.

use sqlx::SqlitePool;

use crate::dto::service_dto::ServicePayload;
use crate::models::Service;
use crate::utils::errors::AppError;

pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(services)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(service)
    }

    /// Filter by owning car. An unknown car id yields an empty list.
    pub async fn find_by_car(&self, car_id: i64) -> Result<Vec<Service>, AppError> {
        let services =
            sqlx::query_as::<_, Service>("SELECT * FROM services WHERE car_id = ? ORDER BY id")
                .bind(car_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(services)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM services WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn insert(&self, payload: &ServicePayload) -> Result<Service, AppError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (car_id, work_hours, work_hour_price, service_date, service_description)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(payload.car_id)
        .bind(payload.work_hours)
        .bind(payload.work_hour_price)
        .bind(payload.service_date)
        .bind(&payload.service_description)
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    /// Whole-record replace. Zero affected rows means the record vanished
    /// between the caller's existence check and the write.
    pub async fn update(&self, id: i64, payload: &ServicePayload) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE services
            SET car_id = ?, work_hours = ?, work_hour_price = ?,
                service_date = ?, service_description = ?
            WHERE id = ?
            "#,
        )
        .bind(payload.car_id)
        .bind(payload.work_hours)
        .bind(payload.work_hour_price)
        .bind(payload.service_date)
        .bind(&payload.service_description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete the service job together with its parts.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM parts WHERE service_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
