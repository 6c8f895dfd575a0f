//! Part record-access operations

use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::part_dto::{PartPayload, PartResponse, UpdatePartRequest};
use crate::repositories::{PartRepository, ServiceRepository};
use crate::utils::errors::{id_mismatch_error, missing_parent_error, not_found_error, AppError};

pub struct PartController {
    repository: PartRepository,
    services: ServiceRepository,
}

impl PartController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: PartRepository::new(pool.clone()),
            services: ServiceRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<PartResponse>, AppError> {
        let parts = self.repository.find_all().await?;
        Ok(parts.into_iter().map(PartResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PartResponse, AppError> {
        let part = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Part", id))?;

        Ok(part.into())
    }

    /// Unknown service ids yield an empty list, never an error.
    pub async fn list_by_service(&self, service_id: i64) -> Result<Vec<PartResponse>, AppError> {
        let parts = self.repository.find_by_service(service_id).await?;
        Ok(parts.into_iter().map(PartResponse::from).collect())
    }

    pub async fn create(&self, payload: PartPayload) -> Result<PartResponse, AppError> {
        payload.validate()?;

        if !self.services.exists(payload.service_id).await? {
            return Err(missing_parent_error("Service", payload.service_id));
        }

        let part = self.repository.insert(&payload).await?;
        Ok(part.into())
    }

    pub async fn update(&self, id: i64, request: UpdatePartRequest) -> Result<(), AppError> {
        if request.id != id {
            return Err(id_mismatch_error(id, request.id));
        }
        request.validate()?;

        if !self.services.exists(request.payload.service_id).await? {
            return Err(missing_parent_error("Service", request.payload.service_id));
        }

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Part", id));
        }

        // The record can vanish between the check and the write; the caller
        // then observes NotFound rather than Conflict.
        let rows = self.repository.update(id, &request.payload).await?;
        if rows == 0 {
            return Err(not_found_error("Part", id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let rows = self.repository.delete(id).await?;
        if rows == 0 {
            return Err(not_found_error("Part", id));
        }

        Ok(())
    }
}
