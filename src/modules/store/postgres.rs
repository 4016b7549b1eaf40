use async_trait::async_trait;
use sqlx::PgPool;

use super::TriviaStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Log a database failure with context and wrap it
fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        tracing::error!("{}: {:?}", context, e);
        AppError::Database(e)
    }
}

/// PostgreSQL-backed trivia store
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories ORDER BY id"#)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list categories"))
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to get category by id"))
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list questions"))
    }

    async fn count_questions(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM questions"#)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count questions"))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        // The term is not escaped: % and _ behave as ILIKE wildcards
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE question ILIKE '%' || $1 || '%' ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to search questions"))
    }

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list questions by category"))
    }

    async fn list_quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {}
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
              AND id <> ALL($2)
            ORDER BY id
            "#,
            QUESTION_COLUMNS
        ))
        .bind(category_id)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list quiz candidates"))
    }

    async fn delete_question(&self, id: i32) -> Result<Option<Vec<Question>>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let deleted =
            sqlx::query_scalar::<_, i32>(r#"DELETE FROM questions WHERE id = $1 RETURNING id"#)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to delete question"))?;

        // Nothing deleted: dropping the transaction rolls it back
        if deleted.is_none() {
            return Ok(None);
        }

        let remaining = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&mut *tx)
        .await
        .map_err(db_error("Failed to list questions after delete"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit question delete"))?;

        Ok(Some(remaining))
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<(Question, Vec<Question>)> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        ))
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to insert question"))?;

        let all = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&mut *tx)
        .await
        .map_err(db_error("Failed to list questions after insert"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit question insert"))?;

        Ok((question, all))
    }
}
