//! Car wire types
//!
//! `CarPayload` is the single validated field set shared by create and
//! replace, so both paths reject exactly the same records. The replace
//! request additionally carries the id, which must match the addressed
//! record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Car;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarPayload {
    #[validate(length(min = 1, message = "license plate is required"))]
    pub license_plate: String,

    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,

    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year_of_manufacture: i64,

    pub date_of_technical_inspection: NaiveDate,

    #[validate(range(min = 0))]
    pub mileage: Option<i64>,

    pub vin: Option<String>,
    pub owner_name: Option<String>,
    pub owner_address: Option<String>,
    pub owner_phone: Option<String>,
    pub image: Option<Vec<u8>>,
}

/// Whole-record replace: the body repeats the id of the addressed record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    pub id: i64,

    #[serde(flatten)]
    #[validate]
    pub payload: CarPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: i64,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year_of_manufacture: i64,
    pub date_of_technical_inspection: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            license_plate: car.license_plate,
            brand: car.brand,
            model: car.model,
            year_of_manufacture: car.year_of_manufacture,
            date_of_technical_inspection: car.date_of_technical_inspection,
            mileage: car.mileage,
            vin: car.vin,
            owner_name: car.owner_name,
            owner_address: car.owner_address,
            owner_phone: car.owner_phone,
            image: car.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CarPayload {
        CarPayload {
            license_plate: "ABC-123".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year_of_manufacture: 2018,
            date_of_technical_inspection: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            mileage: None,
            vin: None,
            owner_name: None,
            owner_address: None,
            owner_phone: None,
            image: None,
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn rejects_empty_mandatory_fields() {
        let mut payload = valid_payload();
        payload.license_plate = String::new();
        payload.brand = String::new();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("license_plate"));
        assert!(errors.field_errors().contains_key("brand"));
    }

    #[test]
    fn rejects_implausible_year() {
        let mut payload = valid_payload();
        payload.year_of_manufacture = 1234;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn omits_null_optionals_from_wire_output() {
        let response: CarResponse = crate::models::Car {
            id: 1,
            license_plate: "ABC-123".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year_of_manufacture: 2018,
            date_of_technical_inspection: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            mileage: None,
            vin: None,
            owner_name: None,
            owner_address: None,
            owner_phone: None,
            image: None,
        }
        .into();

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("vin").is_none());
        assert!(json.get("mileage").is_none());
        assert_eq!(json["licensePlate"], "ABC-123");
    }
}
