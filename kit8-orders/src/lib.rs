pub mod controller;

use rocket::{
    routes,
    Route,
};

/// Mount point in the combined server
pub const BASE: &str = "/api/orders";

pub fn routes() -> Vec<Route> {
    routes![
        controller::get_orders,
        controller::create_order,
        controller::get_order,
        controller::update_order,
        controller::delete_order,
        controller::get_stats,
    ]
}
