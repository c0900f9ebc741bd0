//! Records and statistics for the crm, inventory, orders and cashier domains
//!
//! Every field is optional on input. Missing or null fields take their zero value and
//! lifecycle enums take their initial state.

use crate::{
    repository::Record,
    utils::null_as_default,
};
use rocket::serde::{
    Deserialize,
    Serialize,
};
use std::fmt;

// CRM
//----------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: i64,
}

/// Deal pipeline position. `won` and `lost` are terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "kebab-case")]
pub enum DealStage {
    #[default]
    New,
    InProgress,
    Won,
    Lost,
}

impl DealStage {
    pub fn value(&self) -> &'static str {
        match *self {
            DealStage::New => "new",
            DealStage::InProgress => "in-progress",
            DealStage::Won => "won",
            DealStage::Lost => "lost",
        }
    }

    pub fn can_transition_to(&self, next: DealStage) -> bool {
        matches!(
            (*self, next),
            (DealStage::New, DealStage::InProgress)
                | (DealStage::InProgress, DealStage::Won)
                | (DealStage::InProgress, DealStage::Lost)
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct Deal {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub stage: DealStage,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DealStats {
    pub total_count: i64,
    pub won_count: i64,
    pub lost_count: i64,
    pub total_value: f64,
    pub average_value: f64,
}

// Inventory
//----------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    /// Stock keeping unit
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct InventoryStats {
    pub total_products: i64,
    pub total_value: f64,
    pub low_stock_count: i64,
    pub out_of_stock_count: i64,
}

// Orders
//----------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    New,
    Confirmed,
    InProgress,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn value(&self) -> &'static str {
        match *self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(*self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if next == OrderStatus::Cancelled {
            return !self.is_terminal();
        }
        matches!(
            (*self, next),
            (OrderStatus::New, OrderStatus::Confirmed)
                | (OrderStatus::Confirmed, OrderStatus::InProgress)
                | (OrderStatus::InProgress, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "kebab-case")]
pub enum OrderPaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Paid,
    Refunded,
}

impl OrderPaymentStatus {
    pub fn value(&self) -> &'static str {
        match *self {
            OrderPaymentStatus::Unpaid => "unpaid",
            OrderPaymentStatus::Pending => "pending",
            OrderPaymentStatus::Paid => "paid",
            OrderPaymentStatus::Refunded => "refunded",
        }
    }

    pub fn can_transition_to(&self, next: OrderPaymentStatus) -> bool {
        matches!(
            (*self, next),
            (OrderPaymentStatus::Unpaid, OrderPaymentStatus::Pending)
                | (OrderPaymentStatus::Pending, OrderPaymentStatus::Paid)
                | (OrderPaymentStatus::Paid, OrderPaymentStatus::Refunded)
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct OrderItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,
    /// Copied from the product when the order was taken
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// quantity * price
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct Order {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: i64,
    /// Contact id from the crm
    #[serde(deserialize_with = "null_as_default")]
    pub contact_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: OrderStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_status: OrderPaymentStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub shipping_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Order {
    /// Recompute every line total and the order total from quantities and prices
    pub fn recompute_totals(&mut self) {
        let mut total = 0.0;
        for item in self.items.iter_mut() {
            item.total = item.quantity as f64 * item.price;
            total += item.total;
        }
        self.total_amount = total;
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct OrderStats {
    pub total_orders: i64,
    pub total_revenue: f64,
    pub pending_orders: i64,
    pub processing_orders: i64,
    pub completed_orders: i64,
}

// Cashier
//----------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum PaymentMethodType {
    #[default]
    Cash,
    Card,
    Transfer,
}

/// A way of paying offered at the till
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct PaymentMethod {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub method_type: PaymentMethodType,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "kebab-case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn value(&self) -> &'static str {
        match *self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (*self, next),
            (PaymentStatus::Pending, PaymentStatus::Completed)
                | (PaymentStatus::Pending, PaymentStatus::Failed)
                | (PaymentStatus::Completed, PaymentStatus::Refunded)
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", default)]
pub struct Payment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: PaymentStatus,
    /// Transaction id at the payment provider
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CashierStats {
    pub total_revenue: f64,
    pub todays_revenue: f64,
    pub total_transactions: i64,
    pub todays_transactions: i64,
    pub refund_amount: f64,
}

// Record bindings
//----------------------------------------------------------------

macro_rules! record {
    ($t:ty, $entity:expr) => {
        impl Record for $t {
            const ENTITY: &'static str = $entity;
            fn id(&self) -> i64 {
                self.id
            }
            fn set_id(&mut self, id: i64) {
                self.id = id;
            }
            fn customer_id(&self) -> i64 {
                self.customer_id
            }
            fn set_customer_id(&mut self, customer_id: i64) {
                self.customer_id = customer_id;
            }
        }
    };
    ($t:ty, $entity:expr, timestamped) => {
        impl Record for $t {
            const ENTITY: &'static str = $entity;
            fn id(&self) -> i64 {
                self.id
            }
            fn set_id(&mut self, id: i64) {
                self.id = id;
            }
            fn customer_id(&self) -> i64 {
                self.customer_id
            }
            fn set_customer_id(&mut self, customer_id: i64) {
                self.customer_id = customer_id;
            }
            fn created_at(&self) -> Option<&str> {
                Some(&self.created_at)
            }
            fn set_timestamps(&mut self, created_at: &str, updated_at: &str) {
                self.created_at = String::from(created_at);
                self.updated_at = String::from(updated_at);
            }
        }
    };
}

record!(Contact, "contact");
record!(Deal, "deal", timestamped);
record!(Product, "product", timestamped);
record!(Order, "order", timestamped);
record!(Payment, "payment", timestamped);
