use chrono::Utc;
use validator::Validate;

use crate::{
    dto::categories::{CategoryList, UpsertCategoryRequest},
    error::{AppError, AppResult},
    models::Category,
    repository::{CategoryFilter, Include, Repository, UnitOfWork},
};

pub async fn list_categories<U: UnitOfWork>(uow: &U) -> AppResult<CategoryList> {
    let categories = uow.category().get_all(None, Include::Nothing).await?;
    Ok(CategoryList { categories })
}

/// A missing category is not an error here; callers decide what absence means.
pub async fn get_category<U: UnitOfWork>(uow: &U, id: i32) -> AppResult<Option<Category>> {
    uow.category()
        .get_first(CategoryFilter::Id(id), Include::Nothing)
        .await
}

pub async fn create_update_category<U: UnitOfWork>(
    uow: &U,
    payload: UpsertCategoryRequest,
) -> AppResult<Category> {
    payload.validate()?;

    let category = if payload.id == 0 {
        let category = uow
            .category()
            .add(Category {
                id: 0,
                name: payload.name,
                created_at: Utc::now(),
            })
            .await?;
        tracing::info!(category_id = category.id, "category created");
        category
    } else {
        let mut existing = uow
            .category()
            .get_first(CategoryFilter::Id(payload.id), Include::Nothing)
            .await?
            .ok_or(AppError::NotFound)?;
        existing.name = payload.name;
        let category = uow.category().update(existing).await?;
        tracing::info!(category_id = category.id, "category updated");
        category
    };

    uow.save().await?;
    Ok(category)
}

pub async fn delete_category<U: UnitOfWork>(uow: &U, id: Option<i32>) -> AppResult<()> {
    let id = id.ok_or(AppError::NotFound)?;
    let category = uow
        .category()
        .get_first(CategoryFilter::Id(id), Include::Nothing)
        .await?
        .ok_or(AppError::NotFound)?;

    uow.category().delete(category).await?;
    uow.save().await?;
    tracing::info!(category_id = id, "category deleted");
    Ok(())
}
