use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::quizzes::dtos::QuizRequestDto;
use crate::modules::store::TriviaStore;

/// Service for quiz play
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Pick a random question the player has not seen yet.
    ///
    /// Returns `None` once every candidate has been asked.
    pub async fn next_question(
        &self,
        request: &QuizRequestDto,
    ) -> Result<Option<QuestionResponseDto>> {
        let category = request.quiz_category.filter();
        let previous = request.previous_ids();

        let candidates = self
            .store
            .list_quiz_candidates(category, &previous)
            .await
            .map_err(|e| AppError::Unprocessable(format!("Failed to select quiz question: {}", e)))?;

        tracing::debug!(
            "Quiz draw: category={:?}, previous={}, candidates={}",
            category,
            previous.len(),
            candidates.len()
        );

        Ok(candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .map(QuestionResponseDto::from))
    }
}
