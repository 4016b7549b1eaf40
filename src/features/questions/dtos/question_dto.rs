use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::types::deserialize_optional_lenient_i32;

/// Public projection of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request body for `POST /questions`. No field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<String>,

    /// Category id; numeric strings are accepted
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i32")]
    pub category: Option<i32>,

    /// Difficulty; numeric strings are accepted
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i32")]
    pub difficulty: Option<i32>,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// Request body for `POST /questions/search`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response for `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub total_questions: i64,
}

/// Response for `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
}

/// Response for `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
}

/// Response for `POST /questions/search`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
}
