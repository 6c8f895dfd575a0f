//! Car entity
//!
//! Maps one to one onto the `cars` table. The owned services are not carried
//! on the struct; the reverse direction is the `bycar` lookup, which keeps the
//! entity graph acyclic and the wire representation flat.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i64,
    pub date_of_technical_inspection: NaiveDate,
    pub mileage: Option<i64>,
    pub vin: Option<String>,
    pub owner_name: Option<String>,
    pub owner_address: Option<String>,
    pub owner_phone: Option<String>,
    pub image: Option<Vec<u8>>,
}
