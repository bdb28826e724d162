use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::Category;

/// Body of the create-or-update call. An `id` of 0 (or none) inserts.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertCategoryRequest {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Name is required"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}
