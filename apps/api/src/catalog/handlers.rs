use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct CategorySearchQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<&'static Category>,
}

/// GET /api/v1/categories?search=
pub async fn handle_list_categories(
    Query(params): Query<CategorySearchQuery>,
) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: catalog::search(&params.search),
    })
}

/// GET /api/v1/categories/:id
pub async fn handle_get_category(Path(id): Path<String>) -> Result<Json<Category>, AppError> {
    catalog::find_category(&id)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Category '{id}' not found")))
}
