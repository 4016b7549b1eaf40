use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::categories::dtos::{CategoryListResponseDto, CategoryQuestionsResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List all categories
///
/// Returns every category as a map of id to type, ordered by id.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoryListResponseDto),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(CategoryListResponseDto {
        success: true,
        categories,
    }))
}

/// List questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(category_id): AppPath<i32>,
    AppQuery(page): AppQuery<PageQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let questions = service.list_questions(category_id, &page).await?;
    Ok(Json(CategoryQuestionsResponseDto {
        success: true,
        questions,
    }))
}
