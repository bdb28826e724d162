use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderHeader {
    pub id: i32,
    pub application_user_id: Uuid,
    /// Only populated when the header was loaded with its related user.
    pub application_user: Option<ApplicationUser>,
    pub order_date: DateTime<Utc>,
    pub shipping_date: Option<DateTime<Utc>>,
    pub order_total: i64,
    pub order_status: String,
    pub payment_status: String,
    pub tracking_number: Option<String>,
    pub carrier: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub name: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetail {
    pub id: i32,
    pub order_header_id: i32,
    pub product_id: i32,
    /// Only populated when the detail was loaded with its related product.
    pub product: Option<Product>,
    pub count: i32,
    pub price: i64,
}

/// Order lifecycle tags as persisted in `order_headers.order_status`.
///
/// Nothing here restricts which tag may follow which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum OrderStatus {
    Pending,
    Approved,
    InProcess,
    Shipped,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::InProcess => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum PaymentStatus {
    Pending,
    Approved,
    ApprovedForDelayedPayment,
    Rejected,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Approved => "Approved",
            PaymentStatus::ApprovedForDelayedPayment => "ApprovedForDelayedPayment",
            PaymentStatus::Rejected => "Rejected",
            PaymentStatus::Cancelled => "Cancelled",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
