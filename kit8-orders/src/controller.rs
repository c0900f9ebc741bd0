use rocket::{
    delete,
    get,
    http::Status,
    post,
    put,
    serde::json::{
        self,
        Json,
    },
    State,
};

use kit8_core::{
    auth::CustomerId,
    error::Kit8Error,
    models::*,
    order,
    repository::{
        Record,
        Stores,
    },
    utils,
};

// JSON APIs

#[get("/orders")]
pub async fn get_orders(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<Vec<Order>>, Kit8Error> {
    Ok(Json(order::find_all(stores, customer)?))
}

/// Place an order
///
/// Totals are computed server side, any client supplied totals,
///
/// status or payment status are overwritten.
#[post("/orders", data = "<req_order>")]
pub async fn create_order(
    customer: CustomerId,
    stores: &State<Stores>,
    req_order: Result<Json<Order>, json::Error<'_>>,
) -> Result<Json<Order>, Kit8Error> {
    let m_order = utils::parse_body(req_order)?;
    Ok(Json(order::create(stores, customer, m_order)?))
}

#[get("/orders/<id>")]
pub async fn get_order(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<Order>, Kit8Error> {
    let oid = utils::parse_id(id, Order::ENTITY)?;
    Ok(Json(order::find(stores, customer, oid)?))
}

#[put("/orders/<id>", data = "<req_order>")]
pub async fn update_order(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
    req_order: Result<Json<Order>, json::Error<'_>>,
) -> Result<Json<Order>, Kit8Error> {
    let oid = utils::parse_id(id, Order::ENTITY)?;
    let m_order = utils::parse_body(req_order)?;
    Ok(Json(order::modify(stores, customer, oid, m_order)?))
}

#[delete("/orders/<id>")]
pub async fn delete_order(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Status, Kit8Error> {
    let oid = utils::parse_id(id, Order::ENTITY)?;
    order::delete(stores, customer, oid)?;
    Ok(Status::Ok)
}

#[get("/stats")]
pub async fn get_stats(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<OrderStats>, Kit8Error> {
    Ok(Json(order::stats(stores, customer)?))
}
// END JSON APIs
