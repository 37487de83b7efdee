mod common;

use axum::http::StatusCode;
use common::{TestApp, decimal};
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn invoice_view_aggregates_items_and_table() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (table_id, foods) = app.seed_catalog(&token, &["5.00", "3.00"]).await;

    let (status, order) = app
        .post("/orders", &token, json!({ "tableId": table_id }))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    let order_id = order["data"]["id"].as_i64().unwrap();

    let (status, items) = app
        .post(
            "/order-items",
            &token,
            json!({
                "orderItems": [
                    { "orderId": order_id, "foodId": foods[0], "quantity": 2, "unitPrice": "5.00" },
                    { "orderId": order_id, "foodId": foods[1], "quantity": 1, "unitPrice": "3.00" },
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{items}");
    assert_eq!(items["data"]["orderId"].as_i64(), Some(order_id));

    let (status, invoice) = app
        .post(
            "/invoices",
            &token,
            json!({ "orderId": order_id, "paymentMethod": "cash" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{invoice}");
    assert_eq!(invoice["data"]["paymentStatus"], "pending");
    let invoice_id = invoice["data"]["id"].as_i64().unwrap();

    let (status, view) = app.get(&format!("/invoices/{invoice_id}"), &token).await;
    assert_eq!(status, StatusCode::OK, "{view}");

    let data = &view["data"];
    assert_eq!(decimal(&data["totalAmount"]), dec!(13.00));
    assert_eq!(data["totalAmount"], "13.00");
    assert_eq!(data["tableNumber"], 12);
    assert_eq!(data["paymentStatus"], "pending");
    assert_eq!(data["paymentMethod"], "cash");
    assert_eq!(data["orderDetails"].as_array().unwrap().len(), 2);
    assert_eq!(data["orderDetails"][0]["food"]["menu"]["name"], "Lunch");
    assert_eq!(data["orderDetails"][0]["order"]["user"]["email"], "admin@example.com");
}

#[tokio::test]
async fn invoice_total_reflects_items_added_later() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (table_id, foods) = app.seed_catalog(&token, &["4.50"]).await;

    let (_, created) = app
        .post(
            "/order-items",
            &token,
            json!({
                "tableId": table_id,
                "orderItems": [{ "foodId": foods[0], "quantity": 1, "unitPrice": "4.50" }]
            }),
        )
        .await;
    let order_id = created["data"]["orderId"].as_i64().unwrap();

    let (_, invoice) = app
        .post(
            "/invoices",
            &token,
            json!({ "orderId": order_id, "paymentMethod": "card", "paymentStatus": "paid" }),
        )
        .await;
    let invoice_id = invoice["data"]["id"].as_i64().unwrap();
    assert_eq!(invoice["data"]["paymentStatus"], "paid");

    let (_, before) = app.get(&format!("/invoices/{invoice_id}"), &token).await;
    assert_eq!(decimal(&before["data"]["totalAmount"]), dec!(4.50));

    let (status, _) = app
        .post(
            "/order-items",
            &token,
            json!({
                "orderItems": [{ "orderId": order_id, "foodId": foods[0], "quantity": 3, "unitPrice": "2.345" }]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // 4.50 + 3 × 2.35
    let (_, after) = app.get(&format!("/invoices/{invoice_id}"), &token).await;
    assert_eq!(decimal(&after["data"]["totalAmount"]), dec!(11.55));
}

#[tokio::test]
async fn invoice_for_order_without_items_uses_order_table() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (table_id, _) = app.seed_catalog(&token, &[]).await;

    let (_, order) = app
        .post("/orders", &token, json!({ "tableId": table_id }))
        .await;
    let order_id = order["data"]["id"].as_i64().unwrap();

    let (_, invoice) = app
        .post(
            "/invoices",
            &token,
            json!({ "orderId": order_id, "paymentMethod": "card" }),
        )
        .await;
    let invoice_id = invoice["data"]["id"].as_i64().unwrap();

    let (status, view) = app.get(&format!("/invoices/{invoice_id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["data"]["totalAmount"], "0.00");
    assert_eq!(view["data"]["tableNumber"], 12);
    assert!(view["data"]["orderDetails"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn items_by_order_distinguishes_empty_from_missing() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (table_id, _) = app.seed_catalog(&token, &[]).await;

    let (_, order) = app
        .post("/orders", &token, json!({ "tableId": table_id }))
        .await;
    let order_id = order["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .get(&format!("/orders/{order_id}/order-items"), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, body) = app.get("/orders/999/order-items", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn invoice_for_unknown_order_is_unprocessable() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/invoices",
            &token,
            json!({ "orderId": 42, "paymentMethod": "cash" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
}

#[tokio::test]
async fn invoice_update_merges_only_given_fields() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let (table_id, _) = app.seed_catalog(&token, &[]).await;

    let (_, order) = app
        .post("/orders", &token, json!({ "tableId": table_id }))
        .await;
    let order_id = order["data"]["id"].as_i64().unwrap();

    let (_, invoice) = app
        .post(
            "/invoices",
            &token,
            json!({ "orderId": order_id, "paymentMethod": "card" }),
        )
        .await;
    let invoice_id = invoice["data"]["id"].as_i64().unwrap();

    let (status, updated) = app
        .put(
            &format!("/invoices/{invoice_id}"),
            &token,
            json!({ "paymentStatus": "paid" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["data"]["paymentStatus"], "paid");
    assert_eq!(updated["data"]["paymentMethod"], "card");
}
