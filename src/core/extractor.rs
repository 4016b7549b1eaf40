use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Path extractor whose rejections look like an unmatched route.
///
/// `/questions/abc` should 404 the same way an unknown path does.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(PathRejection::FailedToDeserializePathParams(err)) => Err(AppError::NotFound(
                format!("Path did not match: {}", err.body_text()),
            )),
            Err(rejection) => Err(AppError::Internal(rejection.body_text())),
        }
    }
}

/// Query-string extractor whose rejections use the JSON error body
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Decode a JSON body that must be an object.
///
/// A body that is not an object is a bad request. An object whose fields do
/// not fit `T` is unprocessable.
pub fn decode_object<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(body).map_err(|e| AppError::Unprocessable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[allow(dead_code)]
        id: i32,
    }

    #[test]
    fn test_decode_object_non_object_is_bad_request() {
        let err = decode_object::<Body>(json!([1, 2])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_decode_object_bad_fields_are_unprocessable() {
        let err = decode_object::<Body>(json!({})).unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));

        let err = decode_object::<Body>(json!({"id": "x"})).unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_decode_object_ok() {
        assert!(decode_object::<Body>(json!({"id": 1})).is_ok());
    }

    #[derive(Debug, Deserialize)]
    struct Limit {
        limit: u32,
    }

    async fn echo_limit(AppQuery(query): AppQuery<Limit>) -> String {
        query.limit.to_string()
    }

    #[tokio::test]
    async fn test_app_query_rejection_is_json_bad_request() {
        let server = TestServer::new(Router::new().route("/", get(echo_limit))).unwrap();

        let response = server.get("/?limit=ten").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "error": 400, "message": "bad request"})
        );

        let response = server.get("/?limit=5").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "5");
    }
}
