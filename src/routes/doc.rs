use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::{CategoryList, UpsertCategoryRequest},
        orders::{OrderList, OrderVm, ShipOrderRequest, UpdateOrderDetailsRequest},
    },
    models::{
        ApplicationUser, Category, OrderDetail, OrderHeader, OrderStatus, PaymentStatus, Product,
    },
    response::{ApiResponse, Meta},
    routes::{categories, health, orders},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::get_category,
        categories::create_update_category,
        categories::delete_category,
        categories::delete_category_without_id,
        orders::list_orders,
        orders::order_details,
        orders::update_order_details,
        orders::set_to_in_process,
        orders::set_to_shipped,
        orders::set_to_cancelled
    ),
    components(
        schemas(
            Category,
            Product,
            ApplicationUser,
            OrderHeader,
            OrderDetail,
            OrderStatus,
            PaymentStatus,
            CategoryList,
            UpsertCategoryRequest,
            OrderList,
            OrderVm,
            ShipOrderRequest,
            UpdateOrderDetailsRequest,
            health::HealthData,
            Meta,
            ApiResponse<Category>,
            ApiResponse<CategoryList>,
            ApiResponse<OrderList>,
            ApiResponse<OrderVm>,
            ApiResponse<OrderHeader>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category administration"),
        (name = "Orders", description = "Order processing"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_delete_is_documented() {
        let doc = ApiDoc::openapi();
        let collection = doc
            .paths
            .paths
            .get("/api/admin/categories")
            .expect("categories collection path");

        let delete = collection.delete.as_ref().expect("delete operation");
        assert!(delete.responses.responses.contains_key("404"));
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());
    }
}
