//! HTTP API tests over the in-memory store
//! Run: cargo test -p bakery-server --test api

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use bakery_server::api::build_app;
use bakery_server::db::{LIST_LIMIT, MemoryStore};
use bakery_server::services::notification::DisabledNotifier;
use bakery_server::{Config, ServerState};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let (state, _worker) = ServerState::with_stores(
        Config::for_tests(),
        store.clone(),
        store,
        Arc::new(DisabledNotifier),
    );
    build_app(state)
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, _, body) = call(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, _, body) = call(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn order_payload(customer: &str, items: &[(&str, i64)], total: f64) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|(name, quantity)| {
            json!({
                "id": format!("item-{name}"),
                "name": name,
                "price": 4.25,
                "quantity": quantity,
                "category": "cafe"
            })
        })
        .collect();
    json!({
        "customer_name": customer,
        "customer_email": format!("{}@example.com", customer.to_lowercase()),
        "customer_phone": "555-0100",
        "items": items,
        "total_amount": total,
        "pickup_time": "Tomorrow 9:00",
        "special_requests": "Extra napkins"
    })
}

#[tokio::test]
async fn welcome_and_health() {
    let app = app();

    let (status, body) = get_json(&app, "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Artisan Bakery & Café API");

    let (status, _) = get_json(&app, "/api").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn menu_is_seeded_once() {
    let app = app();

    let (status, first) = get_json(&app, "/api/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first.as_array().unwrap().len(), 16);

    for _ in 0..3 {
        let (_, again) = get_json(&app, "/api/menu").await;
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn menu_categories_partition_the_menu() {
    let app = app();
    let (_, all) = get_json(&app, "/api/menu").await;
    let (_, bakery) = get_json(&app, "/api/menu/bakery").await;
    let (_, cafe) = get_json(&app, "/api/menu/cafe").await;

    let bakery = bakery.as_array().unwrap();
    let cafe = cafe.as_array().unwrap();
    assert!(bakery.iter().all(|i| i["category"] == "bakery"));
    assert!(cafe.iter().all(|i| i["category"] == "cafe"));

    let mut union: Vec<&str> = bakery
        .iter()
        .chain(cafe.iter())
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    let mut all_ids: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    union.sort();
    union.dedup();
    all_ids.sort();
    assert_eq!(union, all_ids);
}

#[tokio::test]
async fn unknown_category_is_empty_not_error() {
    let app = app();
    let (status, body) = get_json(&app, "/api/menu/desserts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_and_fetch_order() {
    let app = app();
    let payload = order_payload("Ada", &[("Cappuccino", 2)], 8.5);

    let (status, created) = post_json(&app, "/api/orders", &payload).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["status"], "pending");
    assert!(created["order_date"].is_string());

    let (status, fetched) = get_json(&app, &format!("/api/orders/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    for field in [
        "customer_name",
        "customer_email",
        "customer_phone",
        "items",
        "total_amount",
        "pickup_time",
        "special_requests",
    ] {
        assert_eq!(fetched[field], payload[field], "field {field}");
    }
}

#[tokio::test]
async fn client_supplied_total_is_kept() {
    let app = app();
    // 2 x 4.25 is 8.50, the client says 1.00
    let payload = order_payload("Ada", &[("Cappuccino", 2)], 1.0);
    let (status, created) = post_json(&app, "/api/orders", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["total_amount"], json!(1.0));
}

#[tokio::test]
async fn missing_order_is_404() {
    let app = app();
    let (status, body) = get_json(&app, "/api/orders/no-such-order").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
    assert_eq!(body["message"], "Order not found");
}

#[tokio::test]
async fn invalid_orders_are_rejected_before_writing() {
    let app = app();

    let empty = order_payload("Ada", &[], 0.0);
    let (status, body) = post_json(&app, "/api/orders", &empty).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let mut blank_name = order_payload("Ada", &[("Latte", 1)], 4.25);
    blank_name["customer_name"] = json!("");
    let (status, body) = post_json(&app, "/api/orders", &blank_name).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["details"]["field"], "customer_name");

    let zero_quantity = order_payload("Ada", &[("Latte", 0)], 0.0);
    let (status, body) = post_json(&app, "/api/orders", &zero_quantity).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    let mut bad_category = order_payload("Ada", &[("Latte", 1)], 4.25);
    bad_category["items"][0]["category"] = json!("brunch");
    let (status, body) = post_json(&app, "/api/orders", &bad_category).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let request = Request::post("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _, _) = call(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, orders) = get_json(&app, "/api/orders").await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn out_of_range_amounts_are_rejected() {
    let app = app();

    let huge_total = order_payload("Ada", &[("Latte", 1)], 5e28);
    let (status, body) = post_json(&app, "/api/orders", &huge_total).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
    assert_eq!(body["details"]["field"], "total_amount");

    let huge_quantity = order_payload("Ada", &[("Latte", 10_000)], 4.25);
    let (status, body) = post_json(&app, "/api/orders", &huge_quantity).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    let (status, body) = get_json(&app, "/api/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_orders"], 0);
}

#[tokio::test]
async fn orders_listed_newest_first() {
    let app = app();
    for name in ["First", "Second", "Third"] {
        let (status, _) = post_json(&app, "/api/orders", &order_payload(name, &[("Latte", 1)], 4.5)).await;
        assert_eq!(status, StatusCode::OK);
    }

    for uri in ["/api/orders", "/api/admin/orders"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        let dates: Vec<chrono::DateTime<chrono::Utc>> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["order_date"].as_str().unwrap().parse().unwrap())
            .collect();
        assert_eq!(dates.len(), 3);
        assert!(dates.windows(2).all(|w| w[0] >= w[1]), "{uri} not sorted");
    }
}

#[tokio::test]
async fn analytics_with_no_orders() {
    let app = app();
    let (status, body) = get_json(&app, "/api/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_orders"], 0);
    assert!(body["total_revenue"].is_number());
    assert_eq!(body["total_revenue"].as_f64(), Some(0.0));
    assert_eq!(body["popular_items"], json!([]));
}

#[tokio::test]
async fn analytics_ranks_popular_items() {
    let app = app();
    let orders = [
        order_payload("A", &[("Croissant", 2), ("Latte", 1)], 10.0),
        order_payload("B", &[("Croissant", 1), ("Cappuccino", 3)], 20.25),
        order_payload("C", &[("Latte", 2)], 5.5),
    ];
    for payload in &orders {
        post_json(&app, "/api/orders", payload).await;
    }

    let (_, body) = get_json(&app, "/api/analytics").await;
    assert_eq!(body["total_orders"], 3);
    assert_eq!(body["total_revenue"].as_f64(), Some(35.75));
    assert_eq!(
        body["popular_items"],
        json!([
            { "name": "Cappuccino", "count": 3 },
            { "name": "Croissant", "count": 3 },
            { "name": "Latte", "count": 3 }
        ])
    );
}

#[tokio::test]
async fn admin_stats_counts_today() {
    let app = app();
    for i in 0..7 {
        post_json(&app, "/api/orders", &order_payload(&format!("C{i}"), &[("Latte", 1)], 2.5)).await;
    }

    let (status, body) = get_json(&app, "/api/admin/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_orders"], 7);
    assert_eq!(body["today_orders"], 7);
    assert_eq!(body["today_revenue"].as_f64(), Some(17.5));
    assert_eq!(body["recent_orders"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn export_has_one_row_per_order() {
    let app = app();
    for name in ["Ada", "Grace"] {
        post_json(&app, "/api/orders", &order_payload(name, &[("Latte", 2)], 9.0)).await;
    }

    let request = Request::get("/api/admin/orders/export").body(Body::empty()).unwrap();
    let (status, headers, body) = call(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"orders_export_"));
    assert!(disposition.ends_with(".csv\""));

    let mut reader = csv::Reader::from_reader(body.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| &r[9] == "pending"));
    assert!(rows.iter().all(|r| &r[5] == "Latte ×2"));
}

#[tokio::test]
async fn export_includes_orders_beyond_listing_cap() {
    let app = app();
    for i in 0..=LIST_LIMIT {
        let (status, _) =
            post_json(&app, "/api/orders", &order_payload(&format!("C{i}"), &[("Latte", 1)], 4.5)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, listed) = get_json(&app, "/api/orders").await;
    assert_eq!(listed.as_array().unwrap().len(), LIST_LIMIT);

    let request = Request::get("/api/admin/orders/export").body(Body::empty()).unwrap();
    let (status, _, body) = call(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let mut reader = csv::Reader::from_reader(body.as_slice());
    assert_eq!(reader.records().count(), LIST_LIMIT + 1);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = app();
    let request = Request::get("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = call(&app, request).await;
    assert_eq!(headers["x-request-id"], "req-123");
}
