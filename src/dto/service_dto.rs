//! Service job wire types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::car_dto::CarResponse;
use crate::dto::part_dto::PartResponse;
use crate::models::Service;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub car_id: i64,

    #[validate(range(min = 0.0))]
    pub work_hours: f64,

    #[validate(range(min = 0.0))]
    pub work_hour_price: f64,

    pub service_date: NaiveDate,

    #[validate(length(min = 1, message = "service description is required"))]
    pub service_description: String,
}

/// Whole-record replace: the body repeats the id of the addressed record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub id: i64,

    #[serde(flatten)]
    #[validate]
    pub payload: ServicePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: i64,
    pub car_id: i64,
    pub work_hours: f64,
    pub work_hour_price: f64,
    pub service_date: NaiveDate,
    pub service_description: String,
    pub estimated_cost: f64,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        let estimated_cost = service.estimated_cost();
        Self {
            id: service.id,
            car_id: service.car_id,
            work_hours: service.work_hours,
            work_hour_price: service.work_hour_price,
            service_date: service.service_date,
            service_description: service.service_description,
            estimated_cost,
        }
    }
}

/// Printable worksheet for one service job: the job, its car, the installed
/// parts and the cost breakdown. The client renders this into the PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetResponse {
    pub service: ServiceResponse,
    pub car: CarResponse,
    pub parts: Vec<PartResponse>,
    pub labor_cost: f64,
    pub parts_total: f64,
    pub total_cost: f64,
}
