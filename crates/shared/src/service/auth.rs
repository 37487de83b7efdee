use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        CurrentUser,
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, AuthResponse, TokenResponse},
    },
    errors::ServiceError,
    model::{NewUser, User},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use tracing::{info, warn};

pub struct AuthServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
    pub tracer: ServiceTracer,
}

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
    tracer: ServiceTracer,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            query,
            command,
            hashing,
            jwt,
            tracer,
        } = deps;

        Self {
            query,
            command,
            hashing,
            jwt,
            tracer,
        }
    }

    /// Issues a fresh pair and overwrites the tokens stored on the user row.
    async fn issue_and_persist(&self, user: &User) -> Result<TokenResponse, ServiceError> {
        let identity = CurrentUser {
            user_id: user.user_id,
            email: user.email.clone(),
            name: user.name.clone(),
            is_admin: user.is_admin,
        };

        let tokens = self.jwt.issue_token_pair(&identity)?;

        self.command
            .update_tokens(
                user.user_id,
                &tokens.access_token,
                &tokens.refresh_token,
                Utc::now(),
            )
            .await?;

        Ok(tokens)
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<AuthResponse>, ServiceError> {
        info!("📝 Registering user email={}", req.email);

        self.tracer
            .observe(
                "register_user",
                Method::Post,
                vec![KeyValue::new("user.email", req.email.clone())],
                async {
                    if self.query.find_by_email(&req.email).await?.is_some() {
                        warn!("⚠️ Email already registered: {}", req.email);
                        return Err(ServiceError::Conflict(format!(
                            "email {} is already registered",
                            req.email
                        )));
                    }

                    let hashed = self.hashing.hash_password(&req.password).await?;

                    let user = self
                        .command
                        .create_user(&NewUser {
                            name: req.name.clone(),
                            email: req.email.clone(),
                            password: hashed,
                            is_admin: req.is_admin.unwrap_or(false),
                            created_at: Utc::now(),
                        })
                        .await?;

                    let tokens = self.issue_and_persist(&user).await?;

                    Ok(ApiResponse::success(
                        "User registered successfully",
                        AuthResponse {
                            user: user.into(),
                            tokens,
                        },
                    ))
                },
            )
            .await
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<AuthResponse>, ServiceError> {
        info!("🔐 Attempting login for email={}", req.email);

        self.tracer
            .observe(
                "login_user",
                Method::Post,
                vec![KeyValue::new("user.email", req.email.clone())],
                async {
                    let user = self
                        .query
                        .find_by_email(&req.email)
                        .await?
                        .ok_or(ServiceError::InvalidCredentials)?;

                    self.hashing
                        .compare_password(&user.password, &req.password)
                        .await?;

                    let tokens = self.issue_and_persist(&user).await?;

                    Ok(ApiResponse::success(
                        "Login successful",
                        AuthResponse {
                            user: user.into(),
                            tokens,
                        },
                    ))
                },
            )
            .await
    }
}
