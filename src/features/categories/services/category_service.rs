use std::sync::Arc;

use crate::core::config::PaginationConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{to_category_map, CategoryMap};
use crate::features::questions::dtos::QuestionResponseDto;
use crate::modules::store::TriviaStore;
use crate::shared::types::PageQuery;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
    pagination: PaginationConfig,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }

    /// All categories as an id to type map
    pub async fn list(&self) -> Result<CategoryMap> {
        let categories = self.store.list_categories().await?;
        Ok(to_category_map(categories))
    }

    /// One page of the questions filed under `category_id`.
    ///
    /// An unknown category is not found; an empty page is not.
    pub async fn list_questions(
        &self,
        category_id: i32,
        page: &PageQuery,
    ) -> Result<Vec<QuestionResponseDto>> {
        self.store
            .find_category(category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

        let questions = self.store.list_questions_by_category(category_id).await?;

        Ok(page
            .with_config(self.pagination)
            .paginate(questions)
            .into_iter()
            .map(QuestionResponseDto::from)
            .collect())
    }
}
