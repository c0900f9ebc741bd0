//! Tenant scoped CRUD shared by every domain
//!
//! Whatever `customer_id` or `id` the client put in a body is overwritten with
//! the request tenant and the path id before the repository sees it.

use crate::{
    auth::CustomerId,
    error::Kit8Error,
    repository::{
        Aggregate,
        Record,
        Repository,
    },
};
use log::{
    debug,
    info,
};

pub fn list<R, P>(repo: &P, customer: CustomerId) -> Result<Vec<R>, Kit8Error>
where
    R: Record,
    P: Repository<R> + ?Sized,
{
    debug!("listing {} for customer {}", R::ENTITY, customer.value());
    repo.find_by_tenant(customer.value())
}

pub fn get<R, P>(repo: &P, customer: CustomerId, id: i64) -> Result<R, Kit8Error>
where
    R: Record,
    P: Repository<R> + ?Sized,
{
    repo.find(customer.value(), id)
}

pub fn create<R, P>(repo: &P, customer: CustomerId, mut record: R) -> Result<R, Kit8Error>
where
    R: Record,
    P: Repository<R> + ?Sized,
{
    if record.customer_id() != 0 && record.customer_id() != customer.value() {
        info!(
            "ignoring client supplied customer {} on {} create",
            record.customer_id(),
            R::ENTITY
        );
    }
    record.set_customer_id(customer.value());
    repo.create(customer.value(), record)
}

pub fn update<R, P>(repo: &P, customer: CustomerId, id: i64, mut record: R) -> Result<R, Kit8Error>
where
    R: Record,
    P: Repository<R> + ?Sized,
{
    debug!("updating {} {} for customer {}", R::ENTITY, id, customer.value());
    record.set_id(id);
    record.set_customer_id(customer.value());
    repo.update(customer.value(), id, record)
}

pub fn delete<R, P>(repo: &P, customer: CustomerId, id: i64) -> Result<(), Kit8Error>
where
    R: Record,
    P: Repository<R> + ?Sized,
{
    info!("deleting {} {} for customer {}", R::ENTITY, id, customer.value());
    repo.delete(customer.value(), id)
}

pub fn stats<S, P>(repo: &P, customer: CustomerId) -> Result<S, Kit8Error>
where
    P: Aggregate<S> + ?Sized,
{
    repo.aggregate(customer.value())
}
