//! Contact service layer
use crate::{
    auth::CustomerId,
    error::Kit8Error,
    models::Contact,
    repository::Stores,
    tenant,
};
use log::info;

/// All contacts of the customer
pub fn find_all(stores: &Stores, customer: CustomerId) -> Result<Vec<Contact>, Kit8Error> {
    tenant::list(stores.contacts.as_ref(), customer)
}

/// Create a new contact
pub fn create(stores: &Stores, customer: CustomerId, contact: Contact) -> Result<Contact, Kit8Error> {
    info!("creating contact for customer {}", customer.value());
    tenant::create(stores.contacts.as_ref(), customer, contact)
}

/// Modify contact
pub fn modify(
    stores: &Stores,
    customer: CustomerId,
    id: i64,
    contact: Contact,
) -> Result<Contact, Kit8Error> {
    tenant::update(stores.contacts.as_ref(), customer, id, contact)
}

pub fn delete(stores: &Stores, customer: CustomerId, id: i64) -> Result<(), Kit8Error> {
    tenant::delete::<Contact, _>(stores.contacts.as_ref(), customer, id)
}
