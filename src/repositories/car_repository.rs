//! Car persistence
//!
//! Row-level access to the `cars` table. Deleting a car removes its service
//! jobs and their parts in the same transaction, so no orphans survive.

use sqlx::SqlitePool;

use crate::dto::car_dto::CarPayload;
use crate::models::Car;
use crate::utils::errors::AppError;

pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cars WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn insert(&self, payload: &CarPayload) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (license_plate, brand, model, year_of_manufacture,
                              date_of_technical_inspection, mileage, vin,
                              owner_name, owner_address, owner_phone, image)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.license_plate)
        .bind(&payload.brand)
        .bind(&payload.model)
        .bind(payload.year_of_manufacture)
        .bind(payload.date_of_technical_inspection)
        .bind(payload.mileage)
        .bind(&payload.vin)
        .bind(&payload.owner_name)
        .bind(&payload.owner_address)
        .bind(&payload.owner_phone)
        .bind(&payload.image)
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    /// Whole-record replace. Returns the number of affected rows; zero means
    /// the record vanished between the caller's existence check and the write.
    pub async fn update(&self, id: i64, payload: &CarPayload) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE cars
            SET license_plate = ?, brand = ?, model = ?, year_of_manufacture = ?,
                date_of_technical_inspection = ?, mileage = ?, vin = ?,
                owner_name = ?, owner_address = ?, owner_phone = ?, image = ?
            WHERE id = ?
            "#,
        )
        .bind(&payload.license_plate)
        .bind(&payload.brand)
        .bind(&payload.model)
        .bind(payload.year_of_manufacture)
        .bind(payload.date_of_technical_inspection)
        .bind(payload.mileage)
        .bind(&payload.vin)
        .bind(&payload.owner_name)
        .bind(&payload.owner_address)
        .bind(&payload.owner_phone)
        .bind(&payload.image)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete the car together with its services and their parts.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM parts WHERE service_id IN (SELECT id FROM services WHERE car_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM services WHERE car_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
