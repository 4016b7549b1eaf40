use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::core::error::Result;
use crate::core::extractor::{decode_object, AppJson};
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Next quiz question
///
/// Draws uniformly at random among questions not listed in
/// `previous_questions`, restricted to `quiz_category.id` unless it is `0`.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when none are left", body = QuizResponseDto),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 422, description = "Missing or malformed quiz fields", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(body): AppJson<Value>,
) -> Result<Json<QuizResponseDto>> {
    let request: QuizRequestDto = decode_object(body)?;

    let question = service.next_question(&request).await?;
    Ok(Json(QuizResponseDto {
        success: true,
        question,
    }))
}
