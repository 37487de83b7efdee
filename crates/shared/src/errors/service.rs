use crate::errors::{repository::RepositoryError, token::TokenError};
use bcrypt::BcryptError;
use jsonwebtoken::errors::Error as JwtError;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Storage failure: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Referenced {0} does not exist")]
    ReferenceNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Login or password is incorrect")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    Token(#[from] TokenError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl Display) -> Self {
        ServiceError::NotFound(format!("{entity} {id}"))
    }

    pub fn missing_reference(entity: &str, id: impl Display) -> Self {
        ServiceError::ReferenceNotFound(format!("{entity} {id}"))
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ServiceError::Validation(vec![message.into()])
    }
}
