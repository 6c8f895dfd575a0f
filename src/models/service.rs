//! Service job entity
//!
//! One service job performed on a car. `car_id` must reference an existing
//! car; the record-access layer rejects writes with a dangling reference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: i64,
    pub car_id: i64,
    pub work_hours: f64,
    pub work_hour_price: f64,
    pub service_date: NaiveDate,
    pub service_description: String,
}

impl Service {
    /// Labor cost estimate. Not persisted, recomputed on every read.
    pub fn estimated_cost(&self) -> f64 {
        self.work_hours * self.work_hour_price
    }
}
