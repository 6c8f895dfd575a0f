//! Service job record-access operations
//!
//! Writes are rejected before they reach the store when the owning car does
//! not exist. The worksheet operation assembles everything the client needs
//! to print one job.

use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::part_dto::PartResponse;
use crate::dto::service_dto::{
    ServicePayload, ServiceResponse, UpdateServiceRequest, WorksheetResponse,
};
use crate::repositories::{CarRepository, PartRepository, ServiceRepository};
use crate::utils::errors::{id_mismatch_error, missing_parent_error, not_found_error, AppError};

pub struct ServiceController {
    repository: ServiceRepository,
    cars: CarRepository,
    parts: PartRepository,
}

impl ServiceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ServiceRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            parts: PartRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.repository.find_all().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ServiceResponse, AppError> {
        let service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service", id))?;

        Ok(service.into())
    }

    /// Unknown car ids yield an empty list, never an error.
    pub async fn list_by_car(&self, car_id: i64) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.repository.find_by_car(car_id).await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn create(&self, payload: ServicePayload) -> Result<ServiceResponse, AppError> {
        payload.validate()?;

        if !self.cars.exists(payload.car_id).await? {
            return Err(missing_parent_error("Car", payload.car_id));
        }

        let service = self.repository.insert(&payload).await?;
        Ok(service.into())
    }

    pub async fn update(&self, id: i64, request: UpdateServiceRequest) -> Result<(), AppError> {
        if request.id != id {
            return Err(id_mismatch_error(id, request.id));
        }
        request.validate()?;

        if !self.cars.exists(request.payload.car_id).await? {
            return Err(missing_parent_error("Car", request.payload.car_id));
        }

        if !self.repository.exists(id).await? {
            return Err(not_found_error("Service", id));
        }

        // The record can vanish between the check and the write; the caller
        // then observes NotFound rather than Conflict.
        let rows = self.repository.update(id, &request.payload).await?;
        if rows == 0 {
            return Err(not_found_error("Service", id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let rows = self.repository.delete(id).await?;
        if rows == 0 {
            return Err(not_found_error("Service", id));
        }

        Ok(())
    }

    pub async fn worksheet(&self, id: i64) -> Result<WorksheetResponse, AppError> {
        let service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service", id))?;

        let car = self
            .cars
            .find_by_id(service.car_id)
            .await?
            .ok_or_else(|| not_found_error("Car", service.car_id))?;

        let parts: Vec<PartResponse> = self
            .parts
            .find_by_service(id)
            .await?
            .into_iter()
            .map(PartResponse::from)
            .collect();

        let labor_cost = service.estimated_cost();
        let parts_total: f64 = parts
            .iter()
            .map(|part| part.gross_price * part.quantity as f64)
            .sum();

        Ok(WorksheetResponse {
            service: service.into(),
            car: car.into(),
            parts,
            labor_cost,
            parts_total,
            total_cost: labor_cost + parts_total,
        })
    }
}
