use rocket::{
    get,
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
    payment,
    repository::{
        Record,
        Stores,
    },
    reqres,
    utils,
};

// JSON APIs

#[get("/payments")]
pub async fn get_payments(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<Vec<Payment>>, Kit8Error> {
    Ok(Json(payment::find_all(stores, customer)?))
}

/// Record a payment against an order, it starts out `pending`
#[post("/payments", data = "<req_payment>")]
pub async fn create_payment(
    customer: CustomerId,
    stores: &State<Stores>,
    req_payment: Result<Json<Payment>, json::Error<'_>>,
) -> Result<Json<Payment>, Kit8Error> {
    let m_payment = utils::parse_body(req_payment)?;
    Ok(Json(payment::create(stores, customer, m_payment)?))
}

/// Overwrite a payment. Status changes here are not checked,
///
/// use `/refund/<id>` for a guarded refund.
#[put("/payments/<id>", data = "<req_payment>")]
pub async fn update_payment(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
    req_payment: Result<Json<Payment>, json::Error<'_>>,
) -> Result<Json<Payment>, Kit8Error> {
    let pid = utils::parse_id(id, Payment::ENTITY)?;
    let m_payment = utils::parse_body(req_payment)?;
    Ok(Json(payment::modify(stores, customer, pid, m_payment)?))
}

#[post("/process", data = "<req_payment>")]
pub async fn process_payment(
    customer: CustomerId,
    stores: &State<Stores>,
    req_payment: Result<Json<Payment>, json::Error<'_>>,
) -> Result<Json<reqres::ProcessPaymentResponse>, Kit8Error> {
    let m_payment = utils::parse_body(req_payment)?;
    Ok(Json(payment::process(stores, customer, m_payment)?))
}

/// Refund a completed payment
///
/// Anything but a `completed` payment is rejected with 409.
#[post("/refund/<id>")]
pub async fn refund_payment(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<reqres::RefundResponse>, Kit8Error> {
    let pid = utils::parse_id(id, Payment::ENTITY)?;
    Ok(Json(payment::refund(stores, customer, pid)?))
}

#[get("/stats")]
pub async fn get_stats(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<CashierStats>, Kit8Error> {
    Ok(Json(payment::stats(stores, customer)?))
}
// END JSON APIs
