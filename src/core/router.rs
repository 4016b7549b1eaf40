use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::config::PaginationConfig;
use crate::core::error::AppError;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::store::TriviaStore;

/// Feature services sharing one store
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn TriviaStore>, pagination: PaginationConfig) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&store), pagination)),
            questions: Arc::new(QuestionService::new(Arc::clone(&store), pagination)),
            quizzes: Arc::new(QuizService::new(store)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound("No route matched".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// All API routes with JSON 404/405 fallbacks; no middleware layers
pub fn api_router(services: AppServices) -> Router {
    Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(questions_routes::routes(services.questions))
        .merge(quizzes_routes::routes(services.quizzes))
        .route("/health", get(health_check))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
