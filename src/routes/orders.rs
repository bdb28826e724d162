use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    dto::orders::{OrderList, OrderVm, ShipOrderRequest, UpdateOrderDetailsRequest},
    error::AppResult,
    models::OrderHeader,
    repository::SeaUnitOfWork,
    response::{ApiResponse, Meta},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/{id}", get(order_details).put(update_order_details))
        .route("/{id}/in-process", post(set_to_in_process))
        .route("/{id}/ship", post(set_to_shipped))
        .route("/{id}/cancel", post(set_to_cancelled))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    /// One of `all`, `pending`, `approved`, `inprocess`, `shipped`, `cancelled`.
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Orders, optionally filtered by status", body = ApiResponse<OrderList>),
        (status = 400, description = "Unknown status filter"),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let filter = order_service::parse_status_filter(query.status.as_deref())?;
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    let data = order_service::list_orders(&uow, filter).await?;
    let meta = Meta::count(data.items.len());
    Ok(Json(ApiResponse::success("Orders", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order header ID")
    ),
    responses(
        (status = 200, description = "Order header with its line items", body = ApiResponse<OrderVm>),
    ),
    tag = "Orders"
)]
pub async fn order_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderVm>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    let data = order_service::order_details(&uow, id).await?;
    let meta = Meta::count(data.order_details.len());
    Ok(Json(ApiResponse::success("Order details", data, Some(meta))))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order header ID")
    ),
    request_body = UpdateOrderDetailsRequest,
    responses(
        (status = 200, description = "Order details updated", body = ApiResponse<OrderHeader>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn update_order_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDetailsRequest>,
) -> AppResult<Json<ApiResponse<OrderHeader>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    let header = order_service::update_order_details(&uow, id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Order details updated",
        header,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/admin/orders/{id}/in-process",
    params(
        ("id" = i32, Path, description = "Order header ID")
    ),
    responses(
        (status = 200, description = "Order marked in process"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn set_to_in_process(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    order_service::set_to_in_process(&uow, id).await?;
    Ok(Json(ApiResponse::without_data("Order status updated")))
}

#[utoipa::path(
    post,
    path = "/api/admin/orders/{id}/ship",
    params(
        ("id" = i32, Path, description = "Order header ID")
    ),
    request_body = ShipOrderRequest,
    responses(
        (status = 200, description = "Order shipped", body = ApiResponse<OrderHeader>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn set_to_shipped(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ShipOrderRequest>,
) -> AppResult<Json<ApiResponse<OrderHeader>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    let header = order_service::set_to_shipped(&uow, id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Order shipped",
        header,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/admin/orders/{id}/cancel",
    params(
        ("id" = i32, Path, description = "Order header ID")
    ),
    responses(
        (status = 200, description = "Order cancelled"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Orders"
)]
pub async fn set_to_cancelled(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    order_service::set_to_cancelled(&uow, id).await?;
    Ok(Json(ApiResponse::without_data("Order cancelled")))
}
