//! Tenant scoped persistence seam
//!
//! Every call takes the requesting tenant explicitly. Implementations must
//! treat `customer_id` as a mandatory filter on reads and writes.

use crate::{
    args,
    error::Kit8Error,
    fixture::FixtureRepository,
    memory::MemoryRepository,
    models::*,
};
use log::info;
use std::sync::Arc;

/// A record owned by exactly one tenant
pub trait Record: Clone + Send + Sync + 'static {
    /// Lowercase entity name used in client facing messages
    const ENTITY: &'static str;
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn customer_id(&self) -> i64;
    fn set_customer_id(&mut self, customer_id: i64);
    fn created_at(&self) -> Option<&str> {
        None
    }
    fn set_timestamps(&mut self, _created_at: &str, _updated_at: &str) {}
}

pub trait Repository<R: Record>: Send + Sync {
    /// All records owned by the tenant
    fn find_by_tenant(&self, customer_id: i64) -> Result<Vec<R>, Kit8Error>;
    fn find(&self, customer_id: i64, id: i64) -> Result<R, Kit8Error>;
    fn create(&self, customer_id: i64, record: R) -> Result<R, Kit8Error>;
    fn update(&self, customer_id: i64, id: i64, record: R) -> Result<R, Kit8Error>;
    fn delete(&self, customer_id: i64, id: i64) -> Result<(), Kit8Error>;
}

/// Statistics computed over the tenant's records at call time
pub trait Aggregate<S>: Send + Sync {
    fn aggregate(&self, customer_id: i64) -> Result<S, Kit8Error>;
}

/// A repository that also reports statistics
pub trait StatsRepository<R: Record, S>: Repository<R> + Aggregate<S> {}

impl<T, R, S> StatsRepository<R, S> for T
where
    R: Record,
    T: Repository<R> + Aggregate<S>,
{
}

/// Which implementation backs the controllers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreKind {
    /// Fixed sample records, nothing is kept between requests
    Fixture,
    Memory,
}

impl StoreKind {
    pub fn value(&self) -> String {
        match *self {
            StoreKind::Fixture => String::from("fixture"),
            StoreKind::Memory => String::from("memory"),
        }
    }
}

/// Parse `--store`, unknown values are a configuration error
pub fn get_store_kind(args: &args::Args) -> Result<StoreKind, Kit8Error> {
    match args.store.as_str() {
        "fixture" => Ok(StoreKind::Fixture),
        "memory" => Ok(StoreKind::Memory),
        other => Err(Kit8Error::Configuration(format!("unknown store: {}", other))),
    }
}

/// Repositories for every domain, held in rocket managed state
pub struct Stores {
    pub contacts: Arc<dyn Repository<Contact>>,
    pub deals: Arc<dyn StatsRepository<Deal, DealStats>>,
    pub products: Arc<dyn StatsRepository<Product, InventoryStats>>,
    pub orders: Arc<dyn StatsRepository<Order, OrderStats>>,
    pub payments: Arc<dyn StatsRepository<Payment, CashierStats>>,
}

impl Stores {
    pub fn new(kind: StoreKind) -> Stores {
        info!("using {} store", kind.value());
        match kind {
            StoreKind::Fixture => Stores::fixture(),
            StoreKind::Memory => Stores::memory(),
        }
    }

    pub fn fixture() -> Stores {
        let f = Arc::new(FixtureRepository);
        Stores {
            contacts: f.clone(),
            deals: f.clone(),
            products: f.clone(),
            orders: f.clone(),
            payments: f,
        }
    }

    pub fn memory() -> Stores {
        Stores {
            contacts: Arc::new(MemoryRepository::<Contact>::new()),
            deals: Arc::new(MemoryRepository::<Deal>::new()),
            products: Arc::new(MemoryRepository::<Product>::new()),
            orders: Arc::new(MemoryRepository::<Order>::new()),
            payments: Arc::new(MemoryRepository::<Payment>::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_kind_test() {
        let mut args = args::Args::default();
        assert_eq!(get_store_kind(&args), Ok(StoreKind::Fixture));
        args.store = String::from("memory");
        assert_eq!(get_store_kind(&args), Ok(StoreKind::Memory));
        args.store = String::from("postgres");
        assert!(matches!(
            get_store_kind(&args),
            Err(Kit8Error::Configuration(_))
        ));
    }

    #[test]
    fn memory_stores_are_independent_test() -> Result<(), Kit8Error> {
        let stores = Stores::memory();
        stores.contacts.create(7, Contact::default())?;
        assert_eq!(stores.contacts.find_by_tenant(7)?.len(), 1);
        assert!(stores.deals.find_by_tenant(7)?.is_empty());
        Ok(())
    }
}
