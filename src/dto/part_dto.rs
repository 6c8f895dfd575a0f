//! Part wire types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::part::DEFAULT_VAT_RATE;
use crate::models::Part;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartPayload {
    pub service_id: i64,

    #[validate(length(min = 1, message = "part number is required"))]
    pub part_number: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub quantity: i64,

    #[validate(range(min = 0.0))]
    pub net_price: f64,

    /// Defaults to the standard 27% rate when absent.
    #[validate(range(min = 0.0, max = 1.0))]
    pub vat_rate: Option<f64>,
}

impl PartPayload {
    pub fn vat_rate_or_default(&self) -> f64 {
        self.vat_rate.unwrap_or(DEFAULT_VAT_RATE)
    }
}

/// Whole-record replace: the body repeats the id of the addressed record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartRequest {
    pub id: i64,

    #[serde(flatten)]
    #[validate]
    pub payload: PartPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartResponse {
    pub id: i64,
    pub service_id: i64,
    pub part_number: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: i64,
    pub net_price: f64,
    pub vat_rate: f64,
    pub gross_price: f64,
}

impl From<Part> for PartResponse {
    fn from(part: Part) -> Self {
        let gross_price = part.gross_price();
        Self {
            id: part.id,
            service_id: part.service_id,
            part_number: part.part_number,
            name: part.name,
            description: part.description,
            quantity: part.quantity,
            net_price: part.net_price,
            vat_rate: part.vat_rate,
            gross_price,
        }
    }
}
