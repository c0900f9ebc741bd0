//! Deal service layer
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

pub fn find_all(stores: &Stores, customer: CustomerId) -> Result<Vec<Deal>, Kit8Error> {
    tenant::list(stores.deals.as_ref(), customer)
}

/// Create a new deal, every deal starts at `new`
pub fn create(stores: &Stores, customer: CustomerId, deal: Deal) -> Result<Deal, Kit8Error> {
    info!("creating deal for customer {}", customer.value());
    if deal.stage != DealStage::New {
        debug!("ignoring requested stage {}", deal.stage.value());
    }
    let new_deal = Deal {
        stage: DealStage::New,
        ..deal
    };
    tenant::create(stores.deals.as_ref(), customer, new_deal)
}

pub fn modify(stores: &Stores, customer: CustomerId, id: i64, deal: Deal) -> Result<Deal, Kit8Error> {
    tenant::update(stores.deals.as_ref(), customer, id, deal)
}

pub fn delete(stores: &Stores, customer: CustomerId, id: i64) -> Result<(), Kit8Error> {
    tenant::delete::<Deal, _>(stores.deals.as_ref(), customer, id)
}

pub fn stats(stores: &Stores, customer: CustomerId) -> Result<DealStats, Kit8Error> {
    tenant::stats(stores.deals.as_ref(), customer)
}
