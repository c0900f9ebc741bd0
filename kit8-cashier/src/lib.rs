pub mod controller;

use rocket::{
    routes,
    Route,
};

/// Mount point in the combined server
pub const BASE: &str = "/api/cashier";

pub fn routes() -> Vec<Route> {
    routes![
        controller::get_payments,
        controller::create_payment,
        controller::update_payment,
        controller::process_payment,
        controller::refund_payment,
        controller::get_stats,
    ]
}
