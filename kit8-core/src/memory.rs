//! In-process store keyed by `(customer_id, id)`
//!
//! A record is only ever reachable through the tenant that created it.

use crate::{
    error::Kit8Error,
    models::*,
    repository::{
        Aggregate,
        Record,
        Repository,
    },
};
use log::{
    debug,
    error,
};
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{
            AtomicI64,
            Ordering,
        },
        RwLock,
        RwLockReadGuard,
        RwLockWriteGuard,
    },
};

pub struct MemoryRepository<R: Record> {
    records: RwLock<BTreeMap<(i64, i64), R>>,
    next_id: AtomicI64,
}

impl<R: Record> Default for MemoryRepository<R> {
    fn default() -> Self {
        MemoryRepository {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<R: Record> MemoryRepository<R> {
    pub fn new() -> Self {
        Default::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<(i64, i64), R>>, Kit8Error> {
        self.records.read().map_err(|_| {
            error!("{} store lock poisoned", R::ENTITY);
            Kit8Error::Internal
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<(i64, i64), R>>, Kit8Error> {
        self.records.write().map_err(|_| {
            error!("{} store lock poisoned", R::ENTITY);
            Kit8Error::Internal
        })
    }

    fn not_found() -> Kit8Error {
        Kit8Error::NotFound(String::from(R::ENTITY))
    }

    /// Clone out every record owned by the tenant
    fn owned(&self, customer_id: i64) -> Result<Vec<R>, Kit8Error> {
        let records = self.read()?;
        Ok(records
            .range((customer_id, i64::MIN)..=(customer_id, i64::MAX))
            .map(|(_, r)| r.clone())
            .collect())
    }
}

fn now() -> String {
    chrono::offset::Utc::now().to_rfc3339()
}

impl<R: Record> Repository<R> for MemoryRepository<R> {
    fn find_by_tenant(&self, customer_id: i64) -> Result<Vec<R>, Kit8Error> {
        self.owned(customer_id)
    }

    fn find(&self, customer_id: i64, id: i64) -> Result<R, Kit8Error> {
        let records = self.read()?;
        records
            .get(&(customer_id, id))
            .cloned()
            .ok_or_else(Self::not_found)
    }

    fn create(&self, customer_id: i64, mut record: R) -> Result<R, Kit8Error> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let ts = now();
        record.set_id(id);
        record.set_customer_id(customer_id);
        record.set_timestamps(&ts, &ts);
        debug!("insert {} {} for customer {}", R::ENTITY, id, customer_id);
        let mut records = self.write()?;
        records.insert((customer_id, id), record.clone());
        Ok(record)
    }

    fn update(&self, customer_id: i64, id: i64, mut record: R) -> Result<R, Kit8Error> {
        let mut records = self.write()?;
        let existing = records
            .get(&(customer_id, id))
            .ok_or_else(Self::not_found)?;
        let created_at = String::from(existing.created_at().unwrap_or_default());
        record.set_id(id);
        record.set_customer_id(customer_id);
        record.set_timestamps(&created_at, &now());
        records.insert((customer_id, id), record.clone());
        Ok(record)
    }

    fn delete(&self, customer_id: i64, id: i64) -> Result<(), Kit8Error> {
        let mut records = self.write()?;
        records
            .remove(&(customer_id, id))
            .map(|_| ())
            .ok_or_else(Self::not_found)
    }
}

impl Aggregate<DealStats> for MemoryRepository<Deal> {
    fn aggregate(&self, customer_id: i64) -> Result<DealStats, Kit8Error> {
        let deals = self.owned(customer_id)?;
        let total_count = deals.len() as i64;
        let total_value: f64 = deals.iter().map(|d| d.value).sum();
        let average_value = if total_count > 0 {
            total_value / total_count as f64
        } else {
            0.0
        };
        Ok(DealStats {
            total_count,
            won_count: deals.iter().filter(|d| d.stage == DealStage::Won).count() as i64,
            lost_count: deals.iter().filter(|d| d.stage == DealStage::Lost).count() as i64,
            total_value,
            average_value,
        })
    }
}

impl Aggregate<InventoryStats> for MemoryRepository<Product> {
    fn aggregate(&self, customer_id: i64) -> Result<InventoryStats, Kit8Error> {
        let products = self.owned(customer_id)?;
        Ok(InventoryStats {
            total_products: products.len() as i64,
            total_value: products.iter().map(|p| p.price * p.quantity as f64).sum(),
            low_stock_count: products
                .iter()
                .filter(|p| p.quantity > 0 && p.quantity <= crate::LOW_STOCK_THRESHOLD)
                .count() as i64,
            out_of_stock_count: products.iter().filter(|p| p.quantity == 0).count() as i64,
        })
    }
}

impl Aggregate<OrderStats> for MemoryRepository<Order> {
    fn aggregate(&self, customer_id: i64) -> Result<OrderStats, Kit8Error> {
        let orders = self.owned(customer_id)?;
        let count = |f: &dyn Fn(&OrderStatus) -> bool| {
            orders.iter().filter(|o| f(&o.status)).count() as i64
        };
        Ok(OrderStats {
            total_orders: orders.len() as i64,
            total_revenue: orders
                .iter()
                .filter(|o| o.status != OrderStatus::Cancelled)
                .map(|o| o.total_amount)
                .sum(),
            pending_orders: count(&|s| *s == OrderStatus::New),
            processing_orders: count(&|s| {
                matches!(
                    s,
                    OrderStatus::Confirmed | OrderStatus::InProgress | OrderStatus::Shipped
                )
            }),
            completed_orders: count(&|s| *s == OrderStatus::Delivered),
        })
    }
}

/// UTC calendar day of the payment, `payment_date` first then `created_at`
fn payment_day(p: &Payment) -> Option<chrono::NaiveDate> {
    [&p.payment_date, &p.created_at]
        .iter()
        .filter_map(|d| chrono::DateTime::parse_from_rfc3339(d).ok())
        .map(|d| d.with_timezone(&chrono::Utc).date_naive())
        .next()
}

impl Aggregate<CashierStats> for MemoryRepository<Payment> {
    fn aggregate(&self, customer_id: i64) -> Result<CashierStats, Kit8Error> {
        let payments = self.owned(customer_id)?;
        let today = chrono::offset::Utc::now().date_naive();
        let completed = || payments.iter().filter(|p| p.status == PaymentStatus::Completed);
        let todays: Vec<&Payment> = payments
            .iter()
            .filter(|p| payment_day(p) == Some(today))
            .collect();
        Ok(CashierStats {
            total_revenue: completed().map(|p| p.amount).sum(),
            todays_revenue: todays
                .iter()
                .filter(|p| p.status == PaymentStatus::Completed)
                .map(|p| p.amount)
                .sum(),
            total_transactions: payments.len() as i64,
            todays_transactions: todays.len() as i64,
            refund_amount: payments
                .iter()
                .filter(|p| p.status == PaymentStatus::Refunded)
                .map(|p| p.amount)
                .sum(),
        })
    }
}
