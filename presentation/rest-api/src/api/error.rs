use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// JSON error body: a single human-readable `error` field.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
