use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{
        seeded_server, test_server, FailingTriviaStore, InMemoryTriviaStore,
    };

    #[tokio::test]
    async fn test_list_categories() {
        let server = seeded_server();

        let response = server.get("/categories").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(
            body["categories"],
            json!({
                "1": "Science",
                "2": "Art",
                "3": "Geography",
                "4": "History",
                "5": "Entertainment",
                "6": "Sports"
            })
        );
    }

    #[tokio::test]
    async fn test_list_categories_empty_store() {
        let server = test_server(InMemoryTriviaStore::empty());

        let body: Value = server.get("/categories").await.json();
        assert_eq!(body, json!({"success": true, "categories": {}}));
    }

    #[tokio::test]
    async fn test_category_without_questions_route_is_not_found() {
        let server = seeded_server();

        let response = server.get("/categories/100").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[tokio::test]
    async fn test_list_category_questions() {
        let server = seeded_server();

        let response = server.get("/categories/3/questions").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let ids: Vec<i64> = body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![7, 8, 9]);
        assert!(body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["category"] == 3));

        // Narrower shape than the main listing
        assert!(body.get("total_questions").is_none());
        assert!(body.get("categories").is_none());
    }

    #[tokio::test]
    async fn test_list_category_questions_unknown_category() {
        let server = seeded_server();

        let response = server.get("/categories/100/questions").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "resource not found");
    }

    #[tokio::test]
    async fn test_list_category_questions_non_integer_id() {
        let server = seeded_server();

        let response = server.get("/categories/science/questions").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], 404);
    }

    #[tokio::test]
    async fn test_list_category_questions_past_last_page_is_empty() {
        let server = seeded_server();

        let response = server
            .get("/categories/3/questions")
            .add_query_param("page", 5)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": true, "questions": []})
        );
    }

    #[tokio::test]
    async fn test_repeated_page_param_is_not_rejected() {
        let server = seeded_server();

        let response = server.get("/categories/3/questions?page=1&page=9").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_created_question_appears_last_in_category() {
        let server = seeded_server();

        let created: Value = server
            .post("/questions")
            .json(&json!({
                "question": "Which river flows through Baghdad?",
                "answer": "Tigris",
                "category": 3,
                "difficulty": 2
            }))
            .await
            .json();
        let new_id = created["created"].as_i64().unwrap();

        let body: Value = server.get("/categories/3/questions").await.json();
        let ids: Vec<i64> = body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![7, 8, 9, new_id]);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let server = test_server(FailingTriviaStore);

        let response = server.get("/categories").await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "error": 500, "message": "internal server error"})
        );
    }
}
