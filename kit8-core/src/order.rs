//! Sales order logic module

use crate::{
    auth::CustomerId,
    error::Kit8Error,
    models::*,
    repository::Stores,
    tenant,
};
use log::{
    debug,
    info,
};

/// Create an order. Status and payment status always start over and totals
///
/// are derived from the items, never taken from the client.
pub fn create(stores: &Stores, customer: CustomerId, order: Order) -> Result<Order, Kit8Error> {
    info!("creating order for customer {}", customer.value());
    let mut new_order = Order {
        status: OrderStatus::New,
        payment_status: OrderPaymentStatus::Unpaid,
        ..order
    };
    new_order.recompute_totals();
    debug!(
        "order total {} over {} items, {}/{}",
        new_order.total_amount,
        new_order.items.len(),
        new_order.status.value(),
        new_order.payment_status.value()
    );
    tenant::create(stores.orders.as_ref(), customer, new_order)
}

/// Order lookup
pub fn find(stores: &Stores, customer: CustomerId, id: i64) -> Result<Order, Kit8Error> {
    tenant::get(stores.orders.as_ref(), customer, id)
}

/// All orders of the customer
pub fn find_all(stores: &Stores, customer: CustomerId) -> Result<Vec<Order>, Kit8Error> {
    tenant::list(stores.orders.as_ref(), customer)
}

/// Modify order, line totals are recomputed
pub fn modify(
    stores: &Stores,
    customer: CustomerId,
    id: i64,
    mut order: Order,
) -> Result<Order, Kit8Error> {
    info!("modify order: {}", id);
    order.recompute_totals();
    tenant::update(stores.orders.as_ref(), customer, id, order)
}

pub fn delete(stores: &Stores, customer: CustomerId, id: i64) -> Result<(), Kit8Error> {
    tenant::delete::<Order, _>(stores.orders.as_ref(), customer, id)
}

pub fn stats(stores: &Stores, customer: CustomerId) -> Result<OrderStats, Kit8Error> {
    tenant::stats(stores.orders.as_ref(), customer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_order() -> Order {
        Order {
            contact_id: 2,
            items: vec![OrderItem {
                product_id: 2,
                product_name: String::from("Mouse"),
                quantity: 2,
                price: 1500.0,
                total: 1.0,
                ..Default::default()
            }],
            total_amount: 1.0,
            status: OrderStatus::Delivered,
            payment_status: OrderPaymentStatus::Paid,
            customer_id: 100,
            ..Default::default()
        }
    }

    #[test]
    fn create_resets_state_test() -> Result<(), Kit8Error> {
        let stores = Stores::fixture();
        let created = create(&stores, CustomerId::new(6), mouse_order())?;
        assert_eq!(created.customer_id, 6);
        assert_eq!(created.status, OrderStatus::New);
        assert_eq!(created.payment_status, OrderPaymentStatus::Unpaid);
        assert_eq!(created.items[0].total, 3000.0);
        assert_eq!(created.total_amount, 3000.0);
        Ok(())
    }

    #[test]
    fn modify_recomputes_totals_test() -> Result<(), Kit8Error> {
        let stores = Stores::fixture();
        let updated = modify(&stores, CustomerId::new(6), 9, mouse_order())?;
        assert_eq!(updated.id, 9);
        assert_eq!(updated.total_amount, 3000.0);
        assert_eq!(updated.status, OrderStatus::Delivered);
        Ok(())
    }

    #[test]
    fn empty_order_total_test() -> Result<(), Kit8Error> {
        let stores = Stores::fixture();
        let created = create(&stores, CustomerId::new(6), Order::default())?;
        assert_eq!(created.total_amount, 0.0);
        Ok(())
    }
}
