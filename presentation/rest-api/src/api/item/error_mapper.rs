use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.name_empty",
            ),
            ItemError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.price_negative",
            ),
            ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "item.not_found"),
            ItemError::Repository(RepositoryError::Duplicated) => (
                StatusCode::CONFLICT,
                "DuplicateKey",
                "repository.duplicated",
            ),
            ItemError::Repository(RepositoryError::Unavailable) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "StorageUnavailable",
                "repository.unavailable",
            ),
            ItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, body) = ItemError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.name, "NotFound");
    }

    #[test]
    fn should_map_validation_errors_to_400() {
        let (status, _) = ItemError::NameEmpty.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = ItemError::PriceNegative.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_duplicated_key_to_409() {
        let (status, body) =
            ItemError::Repository(RepositoryError::Duplicated).into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.name, "DuplicateKey");
    }

    #[test]
    fn should_map_unavailable_storage_to_503() {
        let (status, body) =
            ItemError::Repository(RepositoryError::Unavailable).into_error_response();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.0.name, "StorageUnavailable");
    }

    #[test]
    fn should_map_other_repository_errors_to_500() {
        let (status, _) =
            ItemError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
