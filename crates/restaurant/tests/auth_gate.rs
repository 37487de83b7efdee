mod common;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use common::TestApp;
use serde_json::json;
use shared::{
    config::{ACCESS_TOKEN_TTL, Claims},
    domain::CurrentUser,
};

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/tables", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = TestApp::new();
    let user = CurrentUser {
        user_id: 1,
        email: "ghost@example.com".into(),
        name: "Ghost".into(),
        is_admin: true,
    };
    let issued_at = Utc::now().timestamp() - 2 * ACCESS_TOKEN_TTL;
    let token = app.jwt.sign(&Claims::access(&user, issued_at)).unwrap();

    let (status, _) = app.get("/menus", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_token_cannot_access_resources() {
    let app = TestApp::new();
    let data = app.signup("user@example.com", false).await;
    let refresh = data["refreshToken"].as_str().unwrap();

    let (status, _) = app.get("/menus", refresh).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_header_is_accepted() {
    let app = TestApp::new();
    let token = app.staff_token().await;

    let request = axum::http::Request::builder()
        .uri("/menus")
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn signup_persists_tokens_and_hides_password() {
    let app = TestApp::new();
    let data = app.signup("chef@example.com", false).await;

    let user_id = data["user"]["id"].as_i64().unwrap() as i32;
    assert!(data["user"].get("password").is_none());
    assert_eq!(data["user"]["isAdmin"], false);
    assert_eq!(
        app.store.stored_token(user_id).await.as_deref(),
        data["accessToken"].as_str()
    );
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let app = TestApp::new();
    app.signup("dup@example.com", false).await;

    let (status, _) = app
        .send(
            Method::POST,
            "/signup",
            None,
            Some(json!({ "name": "Again", "email": "dup@example.com", "password": "secret123" })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_checks_password() {
    let app = TestApp::new();
    app.signup("cook@example.com", false).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "cook@example.com", "password": "wrong-pass" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Login or password is incorrect");

    let (status, body) = app
        .send(
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "cook@example.com", "password": "secret123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["data"]["accessToken"].as_str().unwrap();
    let (status, _) = app.get("/users", token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_admin_cannot_create_admin_resources() {
    let app = TestApp::new();
    let token = app.staff_token().await;

    let (status, body) = app
        .post("/tables", &token, json!({ "numberOfGuests": 2, "tableNumber": 1 }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN, "{body}");

    let (status, _) = app
        .post(
            "/invoices",
            &token,
            json!({ "orderId": 1, "paymentMethod": "cash" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Menus carry no admin gate.
    let (status, _) = app
        .post("/menus", &token, json!({ "name": "Brunch", "category": "breakfast" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn metrics_endpoint_is_public() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    app.get("/users", &token).await;

    let request = axum::http::Request::builder()
        .uri("/metrics")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("restaurant_service_requests_total"));
}
