use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use fake::{faker::lorem::en::Sentence, Fake};
use tokio::sync::RwLock;

use crate::core::config::PaginationConfig;
use crate::core::error::{AppError, Result};
use crate::core::router::{api_router, AppServices};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::TriviaStore;

/// Same categories the seed migration inserts
pub const SEED_CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (question, answer, category, difficulty)
pub const SEED_QUESTIONS: &[(&str, &str, i32, i32)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
];

struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i32,
}

/// In-memory store with the same ordering and matching rules as Postgres
pub struct InMemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl InMemoryTriviaStore {
    fn from_tables(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_id,
            }),
        }
    }

    fn seed_categories() -> Vec<Category> {
        SEED_CATEGORIES
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: kind.to_string(),
            })
            .collect()
    }

    /// Empty store: no categories, no questions
    pub fn empty() -> Self {
        Self::from_tables(Vec::new(), Vec::new())
    }

    /// Store holding [`SEED_CATEGORIES`] and [`SEED_QUESTIONS`] with ids from 1
    pub fn seeded() -> Self {
        let questions = SEED_QUESTIONS
            .iter()
            .zip(1..)
            .map(|((question, answer, category, difficulty), id)| Question {
                id,
                question: Some(question.to_string()),
                answer: Some(answer.to_string()),
                category: Some(*category),
                difficulty: Some(*difficulty),
            })
            .collect();

        Self::from_tables(Self::seed_categories(), questions)
    }

    /// Store with the seeded categories and `count` generated questions
    pub fn with_generated_questions(count: i32) -> Self {
        let questions = (1..=count)
            .map(|id| Question {
                id,
                question: Some(Sentence(3..8).fake::<String>()),
                answer: Some(Sentence(1..3).fake::<String>()),
                category: Some((id % 6) + 1),
                difficulty: Some((id % 5) + 1),
            })
            .collect();

        Self::from_tables(Self::seed_categories(), questions)
    }
}

#[async_trait]
impl TriviaStore for InMemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.tables.read().await.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        let mut questions = self.tables.read().await.questions.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn count_questions(&self) -> Result<i64> {
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        let mut matches: Vec<Question> = self
            .tables
            .read()
            .await
            .questions
            .iter()
            .filter(|q| {
                q.question
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        matches.sort_by_key(|q| q.id);
        Ok(matches)
    }

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let mut questions: Vec<Question> = self
            .tables
            .read()
            .await
            .questions
            .iter()
            .filter(|q| q.category == Some(category_id))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn list_quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>> {
        let mut questions: Vec<Question> = self
            .tables
            .read()
            .await
            .questions
            .iter()
            .filter(|q| category_id.map_or(true, |c| q.category == Some(c)))
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn delete_question(&self, id: i32) -> Result<Option<Vec<Question>>> {
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        if tables.questions.len() == before {
            return Ok(None);
        }

        let mut remaining = tables.questions.clone();
        remaining.sort_by_key(|q| q.id);
        Ok(Some(remaining))
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<(Question, Vec<Question>)> {
        let mut tables = self.tables.write().await;
        let question = Question {
            id: tables.next_id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.next_id += 1;
        tables.questions.push(question.clone());

        let mut all = tables.questions.clone();
        all.sort_by_key(|q| q.id);
        Ok((question, all))
    }
}

/// Store whose every call fails like a lost database connection
pub struct FailingTriviaStore;

fn unavailable<T>() -> Result<T> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl TriviaStore for FailingTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        unavailable()
    }

    async fn find_category(&self, _id: i32) -> Result<Option<Category>> {
        unavailable()
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn count_questions(&self) -> Result<i64> {
        unavailable()
    }

    async fn search_questions(&self, _term: &str) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn list_questions_by_category(&self, _category_id: i32) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn list_quiz_candidates(
        &self,
        _category_id: Option<i32>,
        _exclude: &[i32],
    ) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn delete_question(&self, _id: i32) -> Result<Option<Vec<Question>>> {
        unavailable()
    }

    async fn insert_question(&self, _new: NewQuestion) -> Result<(Question, Vec<Question>)> {
        unavailable()
    }
}

/// Router over `store` with the default page size, wrapped in a test server
pub fn test_server(store: impl TriviaStore + 'static) -> TestServer {
    let services = AppServices::new(Arc::new(store), PaginationConfig::default());
    TestServer::new(api_router(services)).expect("test server starts")
}

/// Test server over [`InMemoryTriviaStore::seeded`]
pub fn seeded_server() -> TestServer {
    test_server(InMemoryTriviaStore::seeded())
}
