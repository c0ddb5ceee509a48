// --- File: crates/connectify_common/src/http.rs ---
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{validation_error, ConnectifyError, HttpStatusCode};
use crate::models::ApiResponse;

/// Extension trait for ConnectifyError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for ConnectifyError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for ConnectifyError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Result type for handlers that answer with the `{ "status": "success", "data": ... }` envelope.
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ConnectifyError>;

/// Converts a domain result into an enveloped JSON response with the given success status.
pub fn respond_with<T, E>(status: StatusCode, result: Result<T, E>) -> ApiResult<T>
where
    T: serde::Serialize,
    E: Into<ConnectifyError>,
{
    result
        .map(|data| (status, Json(ApiResponse::success(data))))
        .map_err(Into::into)
}

/// Converts a `Result<T, E>` into a `Result<Json<T>, Response>` using a custom error mapper.
pub fn map_json_error<T, E, F>(result: Result<T, E>, f: F) -> Result<Json<T>, Response>
where
    T: serde::Serialize,
    F: FnOnce(E) -> ConnectifyError,
{
    result.map(Json).map_err(|err| f(err).into_response())
}

/// JSON body extractor whose rejections render as a [`ConnectifyError`].
///
/// A body that is valid JSON but does not fit `T` is a validation error; anything
/// else (syntax, content type, unreadable body) is a parse error. Both answer 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ConnectifyError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections render as a [`ConnectifyError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ConnectifyError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor whose rejections render as a [`ConnectifyError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ConnectifyError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for ConnectifyError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => validation_error(err.body_text()),
            other => ConnectifyError::ParseError(other.body_text()),
        }
    }
}

impl From<PathRejection> for ConnectifyError {
    fn from(rejection: PathRejection) -> Self {
        validation_error(rejection.body_text())
    }
}

impl From<QueryRejection> for ConnectifyError {
    fn from(rejection: QueryRejection) -> Self {
        validation_error(rejection.body_text())
    }
}
