//! Cashier payment operations module

use crate::{
    auth::CustomerId,
    error::Kit8Error,
    models::*,
    reqres::{
        ProcessPaymentResponse,
        RefundResponse,
    },
    repository::Stores,
    tenant,
};
use log::{
    error,
    info,
};

pub fn find_all(stores: &Stores, customer: CustomerId) -> Result<Vec<Payment>, Kit8Error> {
    tenant::list(stores.payments.as_ref(), customer)
}

/// Record a payment, it always starts as `pending`
pub fn create(stores: &Stores, customer: CustomerId, payment: Payment) -> Result<Payment, Kit8Error> {
    info!("creating payment for order {}", payment.order_id);
    let new_payment = Payment {
        status: PaymentStatus::Pending,
        ..payment
    };
    tenant::create(stores.payments.as_ref(), customer, new_payment)
}

pub fn modify(
    stores: &Stores,
    customer: CustomerId,
    id: i64,
    payment: Payment,
) -> Result<Payment, Kit8Error> {
    tenant::update(stores.payments.as_ref(), customer, id, payment)
}

/// Hand a payment to the till. No provider is called, the payment is recorded
///
/// as pending and the client's transaction id and amount are echoed.
pub fn process(
    stores: &Stores,
    customer: CustomerId,
    payment: Payment,
) -> Result<ProcessPaymentResponse, Kit8Error> {
    let recorded = create(stores, customer, payment)?;
    Ok(ProcessPaymentResponse {
        status: String::from(recorded.status.value()),
        transaction_id: recorded.transaction_id,
        amount: recorded.amount,
    })
}

/// Refund a completed payment
pub fn refund(stores: &Stores, customer: CustomerId, id: i64) -> Result<RefundResponse, Kit8Error> {
    info!("refunding payment {}", id);
    let payment = tenant::get::<Payment, _>(stores.payments.as_ref(), customer, id)?;
    if !payment.status.can_transition_to(PaymentStatus::Refunded) {
        error!("payment {} is {}, refusing refund", id, payment.status);
        return Err(Kit8Error::InvalidTransition(format!(
            "Payment cannot be refunded from status {}",
            payment.status
        )));
    }
    let refunded = Payment {
        status: PaymentStatus::Refunded,
        ..payment
    };
    let u_payment = tenant::update(stores.payments.as_ref(), customer, id, refunded)?;
    Ok(RefundResponse {
        status: String::from(u_payment.status.value()),
        payment_id: u_payment.id,
    })
}

pub fn stats(stores: &Stores, customer: CustomerId) -> Result<CashierStats, Kit8Error> {
    tenant::stats(stores.payments.as_ref(), customer)
}
