pub mod args;
pub mod auth;
pub mod contact;
pub mod deal;
pub mod error;
pub mod fixture;
pub mod memory;
pub mod models;
pub mod order;
pub mod payment;
pub mod product;
pub mod repository;
pub mod reqres;
pub mod server;
pub mod tenant;
pub mod utils;

pub const APP_NAME: &str = "kit8";
/// Reported by the health check
pub const API_VERSION: &str = "1.0.0";
/// Environment variable holding the HMAC secret for bearer tokens
pub const KIT8_JWT_SECRET_KEY: &str = "KIT8_JWT_SECRET_KEY";
/// Tenant header honored in the development release environment only
pub const CUSTOMER_ID_HEADER: &str = "X-Customer-Id";

// Claim keys
pub const CUSTOMER_ID_CLAIM: &str = "customer_id";
pub const EXPIRATION_CLAIM: &str = "expiration";
// End claim keys

/// Default combined app port
pub const DEFAULT_APP_PORT: u16 = 3000;
/// Products at or below this quantity (but not zero) count as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 10;
// DO NOT EDIT BELOW THIS LINE
