use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BasketError::UserNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "basket.user_name_empty",
            ),
            BasketError::Repository(_) => (
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
