use crate::{
    config::Claims,
    domain::{CurrentUser, responses::TokenResponse},
    errors::{ServiceError, TokenError},
};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn issue_token_pair(&self, user: &CurrentUser) -> Result<TokenResponse, ServiceError>;
    fn validate_token(&self, token: &str) -> Result<Claims, TokenError>;

    /// Validates an access token and extracts the caller's identity.
    fn authenticate(&self, token: &str) -> Result<CurrentUser, TokenError> {
        self.validate_token(token)?.into_identity()
    }
}
