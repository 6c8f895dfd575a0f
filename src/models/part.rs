//! Part entity
//!
//! A component installed during a service job. Only the net price is stored;
//! the gross price is derived from the VAT rate on every read.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Hungarian standard VAT rate, applied when a part carries no explicit rate.
pub const DEFAULT_VAT_RATE: f64 = 0.27;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Part {
    pub id: i64,
    pub service_id: i64,
    pub part_number: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub net_price: f64,
    pub vat_rate: f64,
}

impl Part {
    /// Tax-inclusive unit price: net × (1 + VAT).
    pub fn gross_price(&self) -> f64 {
        self.net_price * (1.0 + self.vat_rate)
    }
}
