use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use boardgames_core::inventory::InventoryError;
use boardgames_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on repository and validation calls inside handlers.
/// The status code is picked from the wrapped error's kind.
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Shorthand for a 404 on the given entity.
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self(
            RepositoryError::NotFound {
                entity_type,
                id: id.to_string(),
            }
            .into(),
        )
    }

    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<InventoryError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = %status_code, "Application error");
        } else {
            tracing::debug!(error = %self.0, status = %status_code, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_use_their_status() {
        let conflict = AppError::from(RepositoryError::ConstraintViolation {
            entity_type: "Developer",
            detail: "UNIQUE constraint failed".to_string(),
        });
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let unavailable = AppError::from(RepositoryError::ConnectionFailed("closed".to_string()));
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_not_found_shorthand() {
        let error = AppError::not_found("BoardGame", 9);

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert!(error.0.to_string().contains('9'));
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let error = AppError::from(InventoryError::EmptyBoardGameName);

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = AppError::from(anyhow::anyhow!("boom"));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_keeps_message() {
        let response = AppError::from(InventoryError::EmptyDeveloperName).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
