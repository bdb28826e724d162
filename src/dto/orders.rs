use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{OrderDetail, OrderHeader};

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderVm {
    pub order_header: Option<OrderHeader>,
    pub order_details: Vec<OrderDetail>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<OrderHeader>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ShipOrderRequest {
    #[validate(length(min = 1, max = 100))]
    pub carrier: String,
    #[validate(length(min = 1, max = 100))]
    pub tracking_number: String,
}

/// Contact and shipping fields an admin may correct on an order.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderDetailsRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,
    #[validate(length(min = 1, max = 200))]
    pub street_address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
}
