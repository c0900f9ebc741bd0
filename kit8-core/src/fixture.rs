//! Sample records served when no store is configured
//!
//! Nothing is kept between requests: lists and lookups are built fresh and
//! stamped with the requesting tenant, writes are echoed back.

use crate::{
    error::Kit8Error,
    models::*,
    repository::{
        Aggregate,
        Record,
        Repository,
    },
};
use log::debug;

/// Fixed sample data for a record type
pub trait Samples: Record {
    fn samples(customer_id: i64) -> Vec<Self>;
    /// Single lookup, returned with the requested id
    fn sample(customer_id: i64, id: i64) -> Self {
        let mut s = Self::samples(customer_id).swap_remove(0);
        s.set_id(id);
        s
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRepository;

impl<R: Samples> Repository<R> for FixtureRepository {
    fn find_by_tenant(&self, customer_id: i64) -> Result<Vec<R>, Kit8Error> {
        debug!("fixture {} list for customer {}", R::ENTITY, customer_id);
        Ok(R::samples(customer_id))
    }

    fn find(&self, customer_id: i64, id: i64) -> Result<R, Kit8Error> {
        Ok(R::sample(customer_id, id))
    }

    fn create(&self, customer_id: i64, mut record: R) -> Result<R, Kit8Error> {
        record.set_customer_id(customer_id);
        Ok(record)
    }

    fn update(&self, customer_id: i64, id: i64, mut record: R) -> Result<R, Kit8Error> {
        record.set_id(id);
        record.set_customer_id(customer_id);
        Ok(record)
    }

    fn delete(&self, customer_id: i64, id: i64) -> Result<(), Kit8Error> {
        debug!("fixture delete {} {} for customer {}", R::ENTITY, id, customer_id);
        Ok(())
    }
}

impl Samples for Contact {
    fn samples(customer_id: i64) -> Vec<Self> {
        vec![
            Contact {
                id: 1,
                name: String::from("Ivan Petrov"),
                email: String::from("ivan@example.com"),
                phone: String::from("+71234567890"),
                company: String::from("Romashka LLC"),
                customer_id,
            },
            Contact {
                id: 2,
                name: String::from("Maria Sidorova"),
                email: String::from("maria@example.com"),
                phone: String::from("+71234567891"),
                company: String::from("IE Sidorov"),
                customer_id,
            },
        ]
    }
}

impl Samples for Deal {
    fn samples(customer_id: i64) -> Vec<Self> {
        let deal = |id: i64, value: f64, contact_id: i64, stage: DealStage, date: &str| Deal {
            id,
            title: format!("Deal {}", id),
            value,
            contact_id,
            stage,
            customer_id,
            created_at: String::from(date),
            updated_at: String::from(date),
        };
        vec![
            deal(1, 10000.0, 1, DealStage::New, "2023-01-01T00:00:00Z"),
            deal(2, 25000.0, 2, DealStage::InProgress, "2023-01-02T00:00:00Z"),
            deal(3, 15000.0, 1, DealStage::Won, "2023-01-03T00:00:00Z"),
        ]
    }
}

impl Samples for Product {
    fn samples(customer_id: i64) -> Vec<Self> {
        let product = |id: i64,
                       name: &str,
                       description: &str,
                       price: f64,
                       quantity: i64,
                       sku: &str,
                       category: &str,
                       date: &str| Product {
            id,
            name: String::from(name),
            description: String::from(description),
            price,
            quantity,
            sku: String::from(sku),
            category: String::from(category),
            image_url: String::new(),
            customer_id,
            created_at: String::from(date),
            updated_at: String::from(date),
        };
        vec![
            product(1, "Laptop", "Ultrabook", 50000.0, 10, "NB-01", "Electronics", "2023-01-01T00:00:00Z"),
            product(2, "Mouse", "Wireless mouse", 1500.0, 50, "MS-001", "Accessories", "2023-01-02T00:00:00Z"),
            product(3, "Keyboard", "Mechanical keyboard", 4500.0, 0, "KB-001", "Accessories", "2023-01-03T00:00:00Z"),
        ]
    }

    fn sample(customer_id: i64, id: i64) -> Self {
        Product {
            id,
            name: String::from("Sample product"),
            description: String::from("Product description"),
            price: 1000.0,
            quantity: 5,
            sku: String::from("EX-001"),
            category: String::from("Category"),
            image_url: String::new(),
            customer_id,
            created_at: String::from("2023-01-01T00:00:00Z"),
            updated_at: String::from("2023-01-01T00:00:00Z"),
        }
    }
}

impl Samples for Order {
    fn samples(customer_id: i64) -> Vec<Self> {
        vec![
            Order {
                id: 1,
                customer_id,
                contact_id: 1,
                items: vec![OrderItem {
                    id: 1,
                    product_id: 1,
                    product_name: String::from("Laptop"),
                    quantity: 1,
                    price: 50000.0,
                    total: 50000.0,
                }],
                total_amount: 50000.0,
                status: OrderStatus::Confirmed,
                payment_status: OrderPaymentStatus::Paid,
                shipping_address: String::from("1 Primernaya St, Moscow"),
                notes: String::new(),
                created_at: String::from("2023-01-01T00:00:00Z"),
                updated_at: String::from("2023-01-01T00:00:00Z"),
            },
            Order {
                id: 2,
                customer_id,
                contact_id: 2,
                items: vec![OrderItem {
                    id: 2,
                    product_id: 2,
                    product_name: String::from("Mouse"),
                    quantity: 2,
                    price: 1500.0,
                    total: 3000.0,
                }],
                total_amount: 3000.0,
                status: OrderStatus::New,
                payment_status: OrderPaymentStatus::Unpaid,
                shipping_address: String::from("5 Obraztsovaya St, Saint Petersburg"),
                notes: String::from("Deliver after 18:00"),
                created_at: String::from("2023-01-02T00:00:00Z"),
                updated_at: String::from("2023-01-02T00:00:00Z"),
            },
        ]
    }
}

impl Samples for Payment {
    fn samples(customer_id: i64) -> Vec<Self> {
        vec![
            Payment {
                id: 1,
                order_id: 1,
                customer_id,
                amount: 50000.0,
                payment_method: String::from("card"),
                status: PaymentStatus::Completed,
                transaction_id: String::from("txn_123456789"),
                payment_date: String::from("2023-01-01T10:00:00Z"),
                created_at: String::from("2023-01-01T10:00:00Z"),
                updated_at: String::from("2023-01-01T10:00:00Z"),
            },
            Payment {
                id: 2,
                order_id: 2,
                customer_id,
                amount: 3000.0,
                payment_method: String::from("cash"),
                status: PaymentStatus::Completed,
                transaction_id: String::from("cash_987654321"),
                payment_date: String::from("2023-01-02T11:30:00Z"),
                created_at: String::from("2023-01-02T11:30:00Z"),
                updated_at: String::from("2023-01-02T11:30:00Z"),
            },
        ]
    }
}

impl Aggregate<DealStats> for FixtureRepository {
    fn aggregate(&self, _customer_id: i64) -> Result<DealStats, Kit8Error> {
        Ok(DealStats {
            total_count: 10,
            won_count: 4,
            lost_count: 2,
            total_value: 125000.0,
            average_value: 12500.0,
        })
    }
}

impl Aggregate<InventoryStats> for FixtureRepository {
    fn aggregate(&self, _customer_id: i64) -> Result<InventoryStats, Kit8Error> {
        Ok(InventoryStats {
            total_products: 100,
            total_value: 1500000.0,
            low_stock_count: 15,
            out_of_stock_count: 5,
        })
    }
}

impl Aggregate<OrderStats> for FixtureRepository {
    fn aggregate(&self, _customer_id: i64) -> Result<OrderStats, Kit8Error> {
        Ok(OrderStats {
            total_orders: 50,
            total_revenue: 125000.0,
            pending_orders: 5,
            processing_orders: 8,
            completed_orders: 35,
        })
    }
}

impl Aggregate<CashierStats> for FixtureRepository {
    fn aggregate(&self, _customer_id: i64) -> Result<CashierStats, Kit8Error> {
        Ok(CashierStats {
            total_revenue: 125000.0,
            todays_revenue: 15000.0,
            total_transactions: 50,
            todays_transactions: 5,
            refund_amount: 2500.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_stamped_test() -> Result<(), Kit8Error> {
        let repo = FixtureRepository;
        let contacts = Repository::<Contact>::find_by_tenant(&repo, 42)?;
        assert_eq!(contacts.len(), 2);
        assert!(contacts.iter().all(|c| c.customer_id == 42));
        let orders = Repository::<Order>::find_by_tenant(&repo, 9)?;
        assert!(orders.iter().all(|o| o.customer_id == 9));
        Ok(())
    }

    #[test]
    fn find_uses_requested_id_test() -> Result<(), Kit8Error> {
        let repo = FixtureRepository;
        let product = Repository::<Product>::find(&repo, 3, 77)?;
        assert_eq!(product.id, 77);
        assert_eq!(product.customer_id, 3);
        assert_eq!(product.sku, "EX-001");
        let order = Repository::<Order>::find(&repo, 3, 12)?;
        assert_eq!(order.id, 12);
        assert_eq!(order.status, OrderStatus::Confirmed);
        Ok(())
    }

    #[test]
    fn writes_are_echoed_test() -> Result<(), Kit8Error> {
        let repo = FixtureRepository;
        let contact = Contact {
            name: String::from("Echo"),
            customer_id: 999,
            ..Default::default()
        };
        let created = repo.create(5, contact.clone())?;
        assert_eq!(created.customer_id, 5);
        assert_eq!(created.name, "Echo");
        let updated = repo.update(5, 31, contact)?;
        assert_eq!(updated.id, 31);
        assert_eq!(updated.customer_id, 5);
        Repository::<Contact>::delete(&repo, 5, 31)?;
        Ok(())
    }

    #[test]
    fn fixed_stats_test() -> Result<(), Kit8Error> {
        let repo = FixtureRepository;
        let deals = Aggregate::<DealStats>::aggregate(&repo, 1)?;
        assert_eq!(deals.total_count, 10);
        assert_eq!(deals.average_value, 12500.0);
        let cashier = Aggregate::<CashierStats>::aggregate(&repo, 1)?;
        assert_eq!(cashier.refund_amount, 2500.0);
        Ok(())
    }
}
