//! Product repo/service layer
use crate::{
    auth::CustomerId,
    error::Kit8Error,
    models::*,
    repository::Stores,
    tenant,
};
use log::info;

/// Create a new product
pub fn create(stores: &Stores, customer: CustomerId, product: Product) -> Result<Product, Kit8Error> {
    info!("creating product {} for customer {}", &product.sku, customer.value());
    tenant::create(stores.products.as_ref(), customer, product)
}

/// Single Product lookup
pub fn find(stores: &Stores, customer: CustomerId, id: i64) -> Result<Product, Kit8Error> {
    tenant::get(stores.products.as_ref(), customer, id)
}

/// Product lookup for all
pub fn find_all(stores: &Stores, customer: CustomerId) -> Result<Vec<Product>, Kit8Error> {
    tenant::list(stores.products.as_ref(), customer)
}

/// Modify product
pub fn modify(
    stores: &Stores,
    customer: CustomerId,
    id: i64,
    product: Product,
) -> Result<Product, Kit8Error> {
    info!("modify product: {}", id);
    tenant::update(stores.products.as_ref(), customer, id, product)
}

pub fn delete(stores: &Stores, customer: CustomerId, id: i64) -> Result<(), Kit8Error> {
    tenant::delete::<Product, _>(stores.products.as_ref(), customer, id)
}

pub fn stats(stores: &Stores, customer: CustomerId) -> Result<InventoryStats, Kit8Error> {
    tenant::stats(stores.products.as_ref(), customer)
}
