use serde::{Deserialize, Serialize};

/// Validated body of `POST /convert/`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub usd_quantity: f64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub usd_quantity: f64,
    pub rub_quantity: f64,
    pub usd_rate: f64,
}
