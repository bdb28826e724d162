use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::categories::{CategoryList, UpsertCategoryRequest},
    error::AppResult,
    models::Category,
    repository::SeaUnitOfWork,
    response::{ApiResponse, Meta},
    services::category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_categories)
                .post(create_update_category)
                .delete(delete_category_without_id),
        )
        .route("/{id}", get(get_category).delete(delete_category))
}

#[utoipa::path(
    get,
    path = "/api/admin/categories",
    responses(
        (status = 200, description = "All categories", body = ApiResponse<CategoryList>),
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    let data = category_service::list_categories(&uow).await?;
    let meta = Meta::count(data.categories.len());
    Ok(Json(ApiResponse::success("Categories", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 404, description = "No category with this id"),
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    let resp = match category_service::get_category(&uow, id).await? {
        Some(category) => (
            StatusCode::OK,
            Json(ApiResponse::success("Category", category, Some(Meta::empty()))),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::without_data("Category not found")),
        ),
    };
    Ok(resp)
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = UpsertCategoryRequest,
    responses(
        (status = 200, description = "Category created (id 0) or updated", body = ApiResponse<Category>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "No category with this id"),
    ),
    tag = "Categories"
)]
pub async fn create_update_category(
    State(state): State<AppState>,
    Json(payload): Json<UpsertCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    let category = category_service::create_update_category(&uow, payload).await?;
    Ok(Json(ApiResponse::success(
        "Category saved",
        category,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Missing id or no category with this id"),
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    category_service::delete_category(&uow, Some(id)).await?;
    Ok(Json(ApiResponse::without_data("Category deleted")))
}

/// `DELETE` on the collection itself: there is no id to delete, which the
/// service reports as not found.
#[utoipa::path(
    delete,
    path = "/api/admin/categories",
    responses(
        (status = 404, description = "No id given"),
    ),
    tag = "Categories"
)]
pub async fn delete_category_without_id(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let uow = SeaUnitOfWork::begin(&state.orm).await?;
    category_service::delete_category(&uow, None).await?;
    Ok(Json(ApiResponse::without_data("Category deleted")))
}
