use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;
use crate::shared::constants::ALL_CATEGORIES_ID;
use crate::shared::types::deserialize_lenient_i32;

/// Category selected for the quiz; id `0` (number or `"0"`) means all categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub id: i32,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizCategoryDto {
    /// Category filter for the candidate query, `None` for all categories
    pub fn filter(&self) -> Option<i32> {
        (self.id != ALL_CATEGORIES_ID).then_some(self.id)
    }
}

/// A previously asked question id, as number or numeric string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(#[serde(deserialize_with = "deserialize_lenient_i32")] pub i32);

/// Request body for `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    pub quiz_category: QuizCategoryDto,

    #[schema(value_type = Vec<i32>)]
    pub previous_questions: Vec<QuestionId>,
}

impl QuizRequestDto {
    pub fn previous_ids(&self) -> Vec<i32> {
        self.previous_questions.iter().map(|q| q.0).collect()
    }
}

/// Response for `POST /quizzes`; `question` is null once the pool is used up
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    pub question: Option<QuestionResponseDto>,
}
