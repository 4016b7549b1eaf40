use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde_json::Value;

use crate::core::error::Result;
use crate::core::extractor::{decode_object, AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionResponseDto,
    QuestionListResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List questions
///
/// Questions ordered by id, one page at a time, with all categories.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(page): AppQuery<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let (result, categories) = service.list(&page).await?;
    Ok(Json(QuestionListResponseDto {
        success: true,
        questions: result.questions,
        categories,
        total_questions: result.total_questions,
    }))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 422, description = "Question missing or could not be deleted", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(page): AppQuery<PageQuery>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    let result = service.delete(id, &page).await?;
    Ok(Json(DeleteQuestionResponseDto {
        success: true,
        deleted: id,
        questions: result.questions,
        total_questions: result.total_questions,
    }))
}

/// Create a question
///
/// No field is required; missing fields are stored as null.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponseDto),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 422, description = "Question could not be created", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppQuery(page): AppQuery<PageQuery>,
    AppJson(body): AppJson<Value>,
) -> Result<Json<CreateQuestionResponseDto>> {
    let dto: CreateQuestionDto = decode_object(body)?;

    let (created, result) = service.create(dto, &page).await?;
    Ok(Json(CreateQuestionResponseDto {
        success: true,
        created,
        questions: result.questions,
        total_questions: result.total_questions,
    }))
}

/// Search questions
///
/// Case-insensitive substring match on the question text.
#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponseDto),
        (status = 400, description = "Missing or invalid searchTerm", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(page): AppQuery<PageQuery>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchQuestionsResponseDto>> {
    let result = service.search(&dto.search_term, &page).await?;
    Ok(Json(SearchQuestionsResponseDto {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
    }))
}
