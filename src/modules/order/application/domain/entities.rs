use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::cart::application::domain::entities::line_total;
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::shipping::application::domain::entities::ShippingAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Packing,
    Shipping,
    Arriving,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Processing,
    Successful,
    Cancelled,
    Failed,
}

/// Recipient details copied onto the order when it is placed. Later edits
/// to the shipping address do not reach placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShippingSnapshot {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zipcode: Option<i32>,
}

impl From<&ShippingAddress> for ShippingSnapshot {
    fn from(address: &ShippingAddress) -> Self {
        Self {
            full_name: address.full_name.clone(),
            email: address.email.clone(),
            phone: address.phone.clone(),
            address: address.address.clone(),
            city: address.city.clone(),
            country: address.country.clone(),
            zipcode: address.zipcode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderLineProduct {
    pub name: String,
    pub slug: String,
    pub desc: String,
    #[schema(value_type = Option<String>, example = "24.99")]
    pub price_old: Option<Decimal>,
    #[schema(value_type = String, example = "19.99")]
    pub price_current: Decimal,
    pub category: Option<Category>,
    pub image1: String,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderLine {
    #[serde(skip)]
    pub id: Uuid,
    pub product: OrderLineProduct,
    pub quantity: i32,
    #[schema(value_type = String, example = "39.98")]
    pub total: Decimal,
}

impl OrderLine {
    pub fn new(id: Uuid, product: OrderLineProduct, quantity: i32) -> Self {
        let total = line_total(product.price_current, quantity);
        Self {
            id,
            product,
            quantity,
            total,
        }
    }
}

pub fn subtotal(lines: &[OrderLine]) -> Decimal {
    lines.iter().map(|l| l.total).sum()
}

/// Order header as shown to buyers and sellers.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderView {
    #[schema(example = "K7MQ2ZP9XRTA")]
    pub tx_ref: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub delivery_status: DeliveryStatus,
    pub payment_status: PaymentStatus,
    pub date_delivered: Option<DateTime<Utc>>,
    pub shipping_details: ShippingSnapshot,
    #[schema(value_type = String, example = "59.97")]
    pub subtotal: Decimal,
    /// Equals the subtotal; no tax or shipping cost is charged.
    #[schema(value_type = String, example = "59.97")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: OrderView,
    pub items: Vec<OrderLine>,
}

/// Buyer name and email shown on the order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Buyer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Persisted order header fields.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHeader {
    pub id: Uuid,
    pub tx_ref: String,
    pub delivery_status: DeliveryStatus,
    pub payment_status: PaymentStatus,
    pub date_delivered: Option<DateTime<Utc>>,
    pub shipping: ShippingSnapshot,
    pub created_at: DateTime<Utc>,
}

impl OrderDetail {
    /// Totals are always derived from the lines' current prices.
    pub fn assemble(header: OrderHeader, buyer: Buyer, items: Vec<OrderLine>) -> Self {
        let subtotal = subtotal(&items);
        Self {
            order: OrderView {
                tx_ref: header.tx_ref,
                first_name: buyer.first_name,
                last_name: buyer.last_name,
                email: buyer.email,
                delivery_status: header.delivery_status,
                payment_status: header.payment_status,
                date_delivered: header.date_delivered,
                shipping_details: header.shipping,
                subtotal,
                total: subtotal,
                created_at: header.created_at,
            },
            items,
        }
    }
}
