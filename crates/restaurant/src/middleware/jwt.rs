use axum::{
    Extension, Json,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse};
use tracing::warn;

pub const TOKEN_HEADER: &str = "token";

/// Token from the `token` header, falling back to `Authorization: Bearer`.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
                .map(|token| token.trim().to_owned())
        })
}

pub async fn auth_middleware(
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let Some(token) = extract_token(req.headers()) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::fail("No authorization header provided")),
        ));
    };

    let current_user = jwt.authenticate(&token).map_err(|err| {
        warn!("🚫 Rejected token on {}: {err}", req.uri().path());
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::fail(err.to_string())),
        )
    })?;

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn token_header_wins_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, HeaderValue::from_static("primary"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer other"));

        assert_eq!(extract_token(&headers).as_deref(), Some("primary"));
    }

    #[test]
    fn bearer_is_used_when_token_header_is_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));

        assert_eq!(extract_token(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn other_schemes_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));

        assert!(extract_token(&headers).is_none());
    }
}
