mod common;

use axum::http::StatusCode;
use common::{TestApp, decimal};
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn food_with_unknown_menu_is_unprocessable() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/foods",
            &token,
            json!({ "name": "Soup", "price": "4.00", "image": "soup.png", "menuId": 77 }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn food_price_is_rounded_half_away_from_zero() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (_, foods) = app.seed_catalog(&token, &["2.345"]).await;

    let (status, food) = app.get(&format!("/foods/{}", foods[0]), &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&food["data"]["price"]), dec!(2.35));
}

#[tokio::test]
async fn food_listing_reports_next_page() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let prices = vec!["1.00"; 21];
    app.seed_catalog(&token, &prices).await;

    let (status, first) = app.get("/foods", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"].as_array().unwrap().len(), 20);
    assert_eq!(first["nextPage"], true);

    let (_, second) = app.get("/foods?page=2", &token).await;
    assert_eq!(second["data"].as_array().unwrap().len(), 1);
    assert_eq!(second["nextPage"], false);

    let (_, exact) = app.get("/foods?pageSize=21", &token).await;
    assert_eq!(exact["data"].as_array().unwrap().len(), 21);
    assert_eq!(exact["nextPage"], false);
}

#[tokio::test]
async fn table_listing_reports_totals() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    for number in 1..=3 {
        app.post(
            "/tables",
            &token,
            json!({ "numberOfGuests": 2, "tableNumber": number }),
        )
        .await;
    }

    let (status, body) = app.get("/tables?recordPerPage=2", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["totalItems"], 3);
    assert_eq!(body["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn partial_update_keeps_omitted_and_zero_fields() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let (_, table) = app
        .post("/tables", &token, json!({ "numberOfGuests": 4, "tableNumber": 9 }))
        .await;
    let id = table["data"]["id"].as_i64().unwrap();

    let (status, updated) = app
        .put(
            &format!("/tables/{id}"),
            &token,
            json!({ "numberOfGuests": 6, "tableNumber": 0 }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["data"]["numberOfGuests"], 6);
    assert_eq!(updated["data"]["tableNumber"], 9);
}

#[tokio::test]
async fn updating_missing_entity_is_not_found() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let (status, _) = app
        .put("/menus/5", &token, json!({ "name": "Dinner" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_is_a_bad_request() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let (status, body) = app
        .post("/tables", &token, json!({ "numberOfGuests": 0, "tableNumber": 3 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Number of guests must be at least 1"), "{message}");
}

#[tokio::test]
async fn menu_range_must_start_before_end() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let (status, _) = app
        .post(
            "/menus",
            &token,
            json!({
                "name": "Late",
                "category": "dinner",
                "startDate": "2026-05-02T00:00:00Z",
                "endDate": "2026-05-01T00:00:00Z",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn menu_update_rechecks_merged_range() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let (status, menu) = app
        .post(
            "/menus",
            &token,
            json!({
                "name": "Winter",
                "category": "seasonal",
                "startDate": "2026-01-01T00:00:00Z",
                "endDate": "2026-01-10T00:00:00Z",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{menu}");
    let uri = format!("/menus/{}", menu["data"]["id"]);

    let (status, _) = app
        .put(&uri, &token, json!({ "startDate": "2026-02-01T00:00:00Z" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, stored) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        stored["data"]["startDate"]
            .as_str()
            .unwrap()
            .starts_with("2026-01-01"),
        "{stored}"
    );

    let (status, _) = app
        .put(&uri, &token, json!({ "endDate": "2026-03-01T00:00:00Z" }))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn order_takes_user_from_token() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let (table_id, _) = app.seed_catalog(&admin, &[]).await;

    let staff = app.signup("waiter@example.com", false).await;
    let staff_token = staff["accessToken"].as_str().unwrap();

    let (status, order) = app
        .post("/orders", staff_token, json!({ "tableId": table_id }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["data"]["userId"], staff["user"]["id"]);

    let (status, _) = app
        .post("/orders", staff_token, json!({ "tableId": 404 }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn order_item_pack_rejects_mixed_orders_and_unknown_food() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (table_id, foods) = app.seed_catalog(&token, &["3.00"]).await;

    let (status, _) = app
        .post(
            "/order-items",
            &token,
            json!({
                "tableId": table_id,
                "orderItems": [{ "foodId": 99, "quantity": 1, "unitPrice": "1.00" }]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .post(
            "/order-items",
            &token,
            json!({
                "orderItems": [
                    { "orderId": 1, "foodId": foods[0], "quantity": 1, "unitPrice": "1.00" },
                    { "orderId": 2, "foodId": foods[0], "quantity": 1, "unitPrice": "1.00" },
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/order-items", &token, json!({ "orderItems": [] }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_item_update_rounds_price_and_checks_food() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (table_id, foods) = app.seed_catalog(&token, &["3.00"]).await;

    let (_, created) = app
        .post(
            "/order-items",
            &token,
            json!({
                "tableId": table_id,
                "orderItems": [{ "foodId": foods[0], "quantity": 1, "unitPrice": "3.00" }]
            }),
        )
        .await;
    let item_id = created["data"]["items"][0]["id"].as_i64().unwrap();

    let (status, updated) = app
        .put(
            &format!("/order-items/{item_id}"),
            &token,
            json!({ "unitPrice": "1.005" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(decimal(&updated["data"]["unitPrice"]), dec!(1.01));
    assert_eq!(updated["data"]["quantity"], 1);

    let (status, _) = app
        .put(
            &format!("/order-items/{item_id}"),
            &token,
            json!({ "foodId": 500 }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
