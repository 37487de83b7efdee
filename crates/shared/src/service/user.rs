use crate::{
    abstract_trait::{DynUserQueryRepository, UserServiceTrait},
    domain::{
        requests::FindAllQuery,
        responses::{ApiResponse, ApiResponsePagination, Pagination, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;

const DEFAULT_PAGE_SIZE: i64 = 10;

pub struct UserService {
    query: DynUserQueryRepository,
    tracer: ServiceTracer,
}

impl UserService {
    pub fn new(query: DynUserQueryRepository, tracer: ServiceTracer) -> Self {
        Self { query, tracer }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ServiceError> {
        let window = req.window(DEFAULT_PAGE_SIZE);

        self.tracer
            .observe(
                "find_all_users",
                Method::Get,
                vec![KeyValue::new("page", window.page)],
                async {
                    let users = self.query.find_all(&window).await?;
                    let total = self.query.count().await?;

                    Ok(ApiResponsePagination::success(
                        "Users retrieved successfully",
                        users.into_iter().map(UserResponse::from).collect(),
                        Pagination::new(&window, total),
                    ))
                },
            )
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        self.tracer
            .observe(
                "find_user_by_id",
                Method::Get,
                vec![KeyValue::new("user.id", id as i64)],
                async {
                    let user = self
                        .query
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("user", id))?;

                    Ok(ApiResponse::success("User retrieved successfully", user.into()))
                },
            )
            .await
    }
}
