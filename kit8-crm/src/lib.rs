pub mod controller;

use rocket::{
    routes,
    Route,
};

/// Mount point in the combined server
pub const BASE: &str = "/api/crm";

pub fn routes() -> Vec<Route> {
    routes![
        controller::get_contacts,
        controller::create_contact,
        controller::update_contact,
        controller::delete_contact,
        controller::get_deals,
        controller::create_deal,
        controller::update_deal,
        controller::delete_deal,
        controller::get_deal_stats,
    ]
}
