use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::NameEmpty => (StatusCode::BAD_REQUEST, "product.name_empty"),
            ProductError::PriceNotPositive => {
                (StatusCode::BAD_REQUEST, "product.price_not_positive")
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "product.not_found"),
            ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, _) = ProductError::NameEmpty.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = ProductError::PriceNotPositive.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ProductError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.error, "product.not_found");
    }

    #[test]
    fn should_map_repository_errors_to_500() {
        let (status, _) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
