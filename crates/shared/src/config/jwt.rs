use crate::{
    abstract_trait::JwtServiceTrait,
    domain::{CurrentUser, responses::TokenResponse},
    errors::{ServiceError, TokenError},
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetimes in seconds.
pub const ACCESS_TOKEN_TTL: i64 = 24 * 60 * 60;
pub const REFRESH_TOKEN_TTL: i64 = 240 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Access tokens carry the caller's identity. Refresh tokens carry only
/// their type and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub is_admin: bool,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn access(user: &CurrentUser, now: i64) -> Self {
        Self {
            email: Some(user.email.clone()),
            name: Some(user.name.clone()),
            user_id: Some(user.user_id),
            is_admin: user.is_admin,
            token_type: TokenType::Access,
            iat: now,
            exp: now + ACCESS_TOKEN_TTL,
        }
    }

    pub fn refresh(now: i64) -> Self {
        Self {
            email: None,
            name: None,
            user_id: None,
            is_admin: false,
            token_type: TokenType::Refresh,
            iat: now,
            exp: now + REFRESH_TOKEN_TTL,
        }
    }

    pub fn into_identity(self) -> Result<CurrentUser, TokenError> {
        if self.token_type != TokenType::Access {
            return Err(TokenError::InvalidType);
        }

        match (self.user_id, self.email, self.name) {
            (Some(user_id), Some(email), Some(name)) => Ok(CurrentUser {
                user_id,
                email,
                name,
                is_admin: self.is_admin,
            }),
            _ => Err(TokenError::Malformed("missing identity claims".into())),
        }
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig").finish_non_exhaustive()
    }
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        JwtConfig {
            encoding: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, ServiceError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(ServiceError::Jwt)
    }
}

impl JwtServiceTrait for JwtConfig {
    fn issue_token_pair(&self, user: &CurrentUser) -> Result<TokenResponse, ServiceError> {
        let now = Utc::now().timestamp();

        Ok(TokenResponse {
            access_token: self.sign(&Claims::access(user, now))?,
            refresh_token: self.sign(&Claims::refresh(now))?,
        })
    }

    fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;

        if token_data.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> CurrentUser {
        CurrentUser {
            user_id: 42,
            email: "alice@example.com".into(),
            name: "Alice".into(),
            is_admin: true,
        }
    }

    #[test]
    fn access_token_round_trips_identity() {
        let jwt = JwtConfig::new("kitchen-secret");
        let pair = jwt.issue_token_pair(&alice()).unwrap();

        let user = jwt.authenticate(&pair.access_token).unwrap();
        assert_eq!(user, alice());

        let claims = jwt.validate_token(&pair.access_token).unwrap();
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL);
    }

    #[test]
    fn refresh_token_carries_no_identity() {
        let jwt = JwtConfig::new("kitchen-secret");
        let pair = jwt.issue_token_pair(&alice()).unwrap();

        let claims = jwt.validate_token(&pair.refresh_token).unwrap();
        assert_eq!(claims.token_type, TokenType::Refresh);
        assert!(claims.user_id.is_none());
        assert!(claims.email.is_none());
        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_TTL);

        assert_eq!(
            jwt.authenticate(&pair.refresh_token),
            Err(TokenError::InvalidType)
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtConfig::new("kitchen-secret");
        let an_hour_ago = Utc::now().timestamp() - 3_600;
        let mut claims = Claims::access(&alice(), an_hour_ago - 10);
        claims.exp = an_hour_ago;

        let token = jwt.sign(&claims).unwrap();
        assert_eq!(jwt.validate_token(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn token_from_another_secret_has_invalid_signature() {
        let issuer = JwtConfig::new("someone-else");
        let verifier = JwtConfig::new("kitchen-secret");
        let pair = issuer.issue_token_pair(&alice()).unwrap();

        assert_eq!(
            verifier.validate_token(&pair.access_token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn garbage_token_is_malformed() {
        let jwt = JwtConfig::new("kitchen-secret");
        assert!(matches!(
            jwt.validate_token("definitely-not-a-jwt"),
            Err(TokenError::Malformed(_))
        ));
    }
}
