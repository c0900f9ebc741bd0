//! Structs for http responses that are not records

use rocket::serde::{
    Deserialize,
    Serialize,
};

/// For handling 400, 401, 404, 409 and 500 error responses
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check, no tenant context required
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Result of handing a payment to the cashier
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ProcessPaymentResponse {
    pub status: String,
    pub transaction_id: String,
    pub amount: f64,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RefundResponse {
    pub status: String,
    pub payment_id: i64,
}
