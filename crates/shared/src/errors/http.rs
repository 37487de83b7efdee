use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    GatewayTimeout(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::NotFound(_) => HttpError::NotFound(err.to_string()),

            ServiceError::ReferenceNotFound(_) => HttpError::UnprocessableEntity(err.to_string()),

            ServiceError::Conflict(msg) => HttpError::Conflict(msg),

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::Unauthorized(msg) => HttpError::Unauthorized(msg),

            ServiceError::InvalidCredentials => HttpError::Unauthorized(err.to_string()),

            ServiceError::Token(token_err) => HttpError::Unauthorized(token_err.to_string()),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::UnprocessableEntity(format!("Foreign key violation: {msg}"))
                }
                RepositoryError::Timeout(op) => {
                    error!("⏱️ Storage timeout surfaced to client: {op}");
                    HttpError::GatewayTimeout("storage timeout".into())
                }
                other => {
                    error!("❌ Storage failure: {other}");
                    HttpError::Internal("storage failure".into())
                }
            },

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Jwt(_) => HttpError::Internal("Failed to sign token".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let msg = match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::Forbidden(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::UnprocessableEntity(msg)
            | HttpError::GatewayTimeout(msg)
            | HttpError::Internal(msg) => msg,
        };

        let body = Json(ErrorResponse::error(msg));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_status_codes() {
        let cases = vec![
            (ServiceError::invalid("name is required"), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("food", 3), StatusCode::NOT_FOUND),
            (
                ServiceError::missing_reference("menu", 7),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (ServiceError::Conflict("email".into()), StatusCode::CONFLICT),
            (ServiceError::Forbidden("admin".into()), StatusCode::FORBIDDEN),
            (ServiceError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                ServiceError::Token(crate::errors::TokenError::Expired),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ServiceError::Repo(RepositoryError::Timeout("find_food".into())),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                ServiceError::Repo(RepositoryError::Custom("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn not_found_message_names_the_entity() {
        let HttpError::NotFound(msg) = HttpError::from(ServiceError::not_found("invoice", 12))
        else {
            panic!("expected not found");
        };
        assert_eq!(msg, "invoice 12 not found");
    }
}
