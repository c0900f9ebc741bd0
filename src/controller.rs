use rocket::{
    get,
    routes,
    serde::json::Json,
    Build,
    Rocket,
};

use kit8_core::*;

/// Liveness check, no tenant needed
#[get("/health")]
pub async fn health() -> Json<reqres::HealthResponse> {
    Json(reqres::HealthResponse {
        status: String::from("ok"),
        version: String::from(API_VERSION),
    })
}

/// Every domain under its own prefix plus the health check
pub fn mount(base: Rocket<Build>) -> Rocket<Build> {
    base.mount("/", routes![health])
        .mount(kit8_crm::BASE, kit8_crm::routes())
        .mount(kit8_inventory::BASE, kit8_inventory::routes())
        .mount(kit8_orders::BASE, kit8_orders::routes())
        .mount(kit8_cashier::BASE, kit8_cashier::routes())
}
