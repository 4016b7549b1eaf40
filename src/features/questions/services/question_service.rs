use std::sync::Arc;

use crate::core::config::PaginationConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{to_category_map, CategoryMap};
use crate::features::questions::dtos::{CreateQuestionDto, QuestionResponseDto};
use crate::features::questions::models::Question;
use crate::modules::store::TriviaStore;
use crate::shared::types::PageQuery;

/// One page of questions plus the size of the whole table
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
}

/// Service for question operations
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
    pagination: PaginationConfig,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }

    /// Page through `questions`, counting all of them as the total
    fn page_of(&self, questions: Vec<Question>, page: &PageQuery) -> QuestionPage {
        let total_questions = questions.len() as i64;
        let questions = page
            .with_config(self.pagination)
            .paginate(questions)
            .into_iter()
            .map(QuestionResponseDto::from)
            .collect();

        QuestionPage {
            questions,
            total_questions,
        }
    }

    /// List one page of all questions ordered by id, with every category.
    ///
    /// An empty page (no questions, or a page past the end) is not found.
    pub async fn list(&self, page: &PageQuery) -> Result<(QuestionPage, CategoryMap)> {
        let questions = self.store.list_questions().await?;
        let result = self.page_of(questions, page);

        if result.questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {}",
                page.page()
            )));
        }

        let categories = self.store.list_categories().await?;
        Ok((result, to_category_map(categories)))
    }

    /// Delete a question and return a page of what remains.
    ///
    /// A missing id is unprocessable, same as any store failure here.
    pub async fn delete(&self, id: i32, page: &PageQuery) -> Result<QuestionPage> {
        let remaining = self
            .store
            .delete_question(id)
            .await
            .map_err(|e| AppError::Unprocessable(format!("Failed to delete question {}: {}", id, e)))?
            .ok_or_else(|| AppError::Unprocessable(format!("Question {} does not exist", id)))?;

        tracing::info!("Question deleted: id={}", id);

        Ok(self.page_of(remaining, page))
    }

    /// Create a question and return its id with a page of all questions
    pub async fn create(
        &self,
        dto: CreateQuestionDto,
        page: &PageQuery,
    ) -> Result<(i32, QuestionPage)> {
        let (question, all) = self
            .store
            .insert_question(dto.into())
            .await
            .map_err(|e| AppError::Unprocessable(format!("Failed to create question: {}", e)))?;

        tracing::info!(
            "Question created: id={}, category={:?}",
            question.id,
            question.category
        );

        Ok((question.id, self.page_of(all, page)))
    }

    /// Search question text, case-insensitively.
    ///
    /// `total_questions` is the size of the whole table, not the match count.
    pub async fn search(&self, term: &str, page: &PageQuery) -> Result<QuestionPage> {
        let matches = self.store.search_questions(term).await?;
        let total_questions = self.store.count_questions().await?;

        let questions = page
            .with_config(self.pagination)
            .paginate(matches)
            .into_iter()
            .map(QuestionResponseDto::from)
            .collect();

        Ok(QuestionPage {
            questions,
            total_questions,
        })
    }
}
