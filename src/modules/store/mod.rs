//! Trivia store
//!
//! The `TriviaStore` trait is the seam between feature services and the
//! relational store holding `categories` and `questions`. Production uses
//! [`PgTriviaStore`]; tests swap in an in-memory implementation.
//!
//! Every call acquires its own pooled connection (or transaction) and
//! releases it before returning, whatever the outcome.

mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub use postgres::PgTriviaStore;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>>;

    /// All questions ordered by id
    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn count_questions(&self) -> Result<i64>;

    /// Case-insensitive substring match on the question text, ordered by id
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Questions whose `category` equals `category_id`, ordered by id
    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Questions not in `exclude`, optionally restricted to one category
    async fn list_quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>>;

    /// Delete a question and return the remaining questions ordered by id.
    ///
    /// Returns `Ok(None)` when no question has this id.
    async fn delete_question(&self, id: i32) -> Result<Option<Vec<Question>>>;

    /// Insert a question and return it with the full ordered question list
    async fn insert_question(&self, new: NewQuestion) -> Result<(Question, Vec<Question>)>;
}
