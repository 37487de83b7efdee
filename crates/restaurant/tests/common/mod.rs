#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use restaurant::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use shared::{
    config::{Hashing, JwtConfig},
    testing::MemoryStore,
};
use std::sync::Arc;
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub jwt: JwtConfig,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let jwt = JwtConfig::new(SECRET);

        let state = AppState::build(
            store.repositories(),
            Arc::new(jwt.clone()),
            Arc::new(Hashing::new(4)),
        );

        Self {
            router: AppRouter::build(state),
            store,
            jwt,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("token", token);
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(token), Some(body)).await
    }

    /// Signs up a user and returns the whole `data` object of the response.
    pub async fn signup(&self, email: &str, is_admin: bool) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/signup",
                None,
                Some(json!({
                    "name": "Test User",
                    "email": email,
                    "password": "secret123",
                    "isAdmin": is_admin,
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");
        body["data"].clone()
    }

    pub async fn admin_token(&self) -> String {
        let data = self.signup("admin@example.com", true).await;
        data["accessToken"].as_str().unwrap().to_string()
    }

    pub async fn staff_token(&self) -> String {
        let data = self.signup("staff@example.com", false).await;
        data["accessToken"].as_str().unwrap().to_string()
    }

    /// Creates a table, a menu and one food per price; returns (table id,
    /// food ids).
    pub async fn seed_catalog(&self, token: &str, prices: &[&str]) -> (i64, Vec<i64>) {
        let (status, table) = self
            .post(
                "/tables",
                token,
                json!({ "numberOfGuests": 4, "tableNumber": 12 }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{table}");

        let (status, menu) = self
            .post("/menus", token, json!({ "name": "Lunch", "category": "main" }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{menu}");
        let menu_id = menu["data"]["id"].as_i64().unwrap();

        let mut food_ids = Vec::new();
        for (i, price) in prices.iter().enumerate() {
            let (status, food) = self
                .post(
                    "/foods",
                    token,
                    json!({
                        "name": format!("Dish {i}"),
                        "price": price,
                        "image": "dish.png",
                        "menuId": menu_id,
                    }),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED, "{food}");
            food_ids.push(food["data"]["id"].as_i64().unwrap());
        }

        (table["data"]["id"].as_i64().unwrap(), food_ids)
    }
}

pub fn decimal(value: &Value) -> rust_decimal::Decimal {
    match value {
        Value::String(s) => s.parse().unwrap(),
        Value::Number(n) => n.to_string().parse().unwrap(),
        other => panic!("not a decimal: {other}"),
    }
}
