pub mod category_service;
pub mod order_service;
