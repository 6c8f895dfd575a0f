//! Car record-access operations

use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::car_dto::{CarPayload, CarResponse, UpdateCarRequest};
use crate::repositories::CarRepository;
use crate::utils::errors::{id_mismatch_error, not_found_error, AppError};

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.find_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CarResponse, AppError> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        Ok(car.into())
    }

    pub async fn create(&self, payload: CarPayload) -> Result<CarResponse, AppError> {
        payload.validate()?;

        let car = self.repository.insert(&payload).await?;
        Ok(car.into())
    }

    pub async fn update(&self, id: i64, request: UpdateCarRequest) -> Result<(), AppError> {
        if request.id != id {
            return Err(id_mismatch_error(id, request.id));
        }
        request.validate()?;

        if !self.repository.exists(id).await? {
            return Err(not_found_error("Car", id));
        }

        // The record can vanish between the check and the write; the caller
        // then observes NotFound rather than Conflict.
        let rows = self.repository.update(id, &request.payload).await?;
        if rows == 0 {
            return Err(not_found_error("Car", id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let rows = self.repository.delete(id).await?;
        if rows == 0 {
            return Err(not_found_error("Car", id));
        }

        Ok(())
    }
}
