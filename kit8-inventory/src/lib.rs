pub mod controller;

use rocket::{
    routes,
    Route,
};

/// Mount point in the combined server
pub const BASE: &str = "/api/inventory";

pub fn routes() -> Vec<Route> {
    routes![
        controller::get_products,
        controller::create_product,
        controller::get_product,
        controller::update_product,
        controller::delete_product,
        controller::get_stats,
    ]
}
