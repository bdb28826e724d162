use chrono::{TimeZone, Utc};
use shopping_cart_admin::models::{
    ApplicationUser, Category, OrderDetail, OrderHeader, OrderStatus, PaymentStatus, Product,
};
use uuid::Uuid;

pub fn categories() -> Vec<Category> {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    ["Action", "SciFi", "History"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: i as i32 + 1,
            name: name.to_string(),
            created_at,
        })
        .collect()
}

pub fn user() -> ApplicationUser {
    ApplicationUser {
        id: Uuid::from_u128(0x42),
        name: "Ada Buyer".into(),
        email: "ada@example.com".into(),
        phone_number: Some("555-0100".into()),
        street_address: Some("1 Main St".into()),
        city: Some("Springfield".into()),
        state: Some("IL".into()),
        postal_code: Some("62701".into()),
    }
}

pub fn product() -> Product {
    Product {
        id: 7,
        name: "Ferris Mug".into(),
        description: None,
        price: 1200,
        image_url: None,
        category_id: 1,
    }
}

pub fn order_header(id: i32) -> OrderHeader {
    OrderHeader {
        id,
        application_user_id: user().id,
        application_user: None,
        order_date: Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
        shipping_date: None,
        order_total: 2400,
        order_status: OrderStatus::Approved.as_str().into(),
        payment_status: PaymentStatus::Approved.as_str().into(),
        tracking_number: None,
        carrier: None,
        payment_date: None,
        name: "Ada Buyer".into(),
        phone_number: "555-0100".into(),
        street_address: "1 Main St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        postal_code: "62701".into(),
    }
}

pub fn order_detail(id: i32, order_header_id: i32) -> OrderDetail {
    OrderDetail {
        id,
        order_header_id,
        product_id: product().id,
        product: None,
        count: 2,
        price: 1200,
    }
}
