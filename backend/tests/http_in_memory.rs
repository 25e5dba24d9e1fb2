//! End-to-end HTTP scenarios over the in-memory store.
//!
//! Every request runs through the production route table, extractor
//! configuration, and trace middleware. The store lives behind the shared
//! `HttpState`, so data written by one request is visible to the next.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use togohub::Trace;
use togohub::domain::OrderingService;
use togohub::inbound::http::configure_routes;
use togohub::inbound::http::state::HttpState;
use togohub::outbound::memory::InMemoryStore;

struct Client {
    state: HttpState,
}

impl Client {
    async fn send(&self, request: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(self.state.clone()))
                .wrap(Trace)
                .configure(configure_routes),
        )
        .await;
        let response = test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body = test::read_body(response).await;
        let value = serde_json::from_slice(&body).expect("response body is JSON");
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(test::TestRequest::get().uri(uri)).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(test::TestRequest::post().uri(uri).set_json(body))
            .await
    }

    async fn create_user(&self, name: &str, email: &str) -> i64 {
        let (status, body) = self
            .post("/user/", json!({ "name": name, "email": email }))
            .await;
        assert_eq!(status, StatusCode::OK, "create user failed: {body}");
        body["user_id"].as_i64().expect("user id")
    }

    async fn create_item(&self, name: &str) -> i64 {
        let (status, body) = self.post("/item/", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK, "create item failed: {body}");
        body["item_id"].as_i64().expect("item id")
    }
}

#[fixture]
fn client() -> Client {
    let store = Arc::new(InMemoryStore::new());
    let service = OrderingService::new(store.clone(), store.clone(), store);
    Client {
        state: HttpState::from_service(Arc::new(service)),
    }
}

/// Seed User#1 and Items #1 to #4.
async fn seed_menu(client: &Client) {
    client.create_user("Ada", "ada@example.com").await;
    for name in ["Pizza", "Burger", "Salad", "Soda"] {
        client.create_item(name).await;
    }
}

#[rstest]
#[actix_rt::test]
async fn banner_is_plain_text(client: Client) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(client.state.clone()))
            .configure(configure_routes),
    )
    .await;
    let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body.as_ref(), b"TOGOHUB Food Ordering App.");
}

#[rstest]
#[actix_rt::test]
async fn new_user_starts_with_no_orders(client: Client) {
    let (status, body) = client
        .post("/user/", json!({ "name": "Ada", "email": "ada@example.com" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User Created", "user_id": 1 }));

    let (status, orders) = client.get("/orders/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders, json!([]));
}

#[rstest]
#[actix_rt::test]
async fn reused_email_conflicts(client: Client) {
    client.create_user("Ada", "ada@example.com").await;

    let (status, body) = client
        .post("/user/", json!({ "name": "Imposter", "email": "ada@example.com" }))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["details"]["field"], "email");
}

#[rstest]
#[actix_rt::test]
async fn placed_order_reads_back_with_item_names(client: Client) {
    seed_menu(&client).await;

    let (status, body) = client
        .post(
            "/order/",
            json!({
                "user_id": 1,
                "order_items": [
                    { "item_id": 1, "item_count": 3 },
                    { "item_id": 4, "item_count": 2 }
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Order Created", "order_id": 1 }));

    let (status, order) = client.get("/order/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        order,
        json!({
            "id": 1,
            "user_id": 1,
            "items": [
                { "item": { "id": 1, "name": "Pizza" }, "item_count": 3 },
                { "item": { "id": 4, "name": "Soda" }, "item_count": 2 }
            ]
        })
    );

    let (_, all) = client.get("/orders/").await;
    assert_eq!(all, json!([order.clone()]));
    let (_, mine) = client.get("/orders/1/").await;
    assert_eq!(mine, json!([order]));
}

#[rstest]
#[actix_rt::test]
async fn missing_order_is_not_found(client: Client) {
    let (status, body) = client.get("/order/99/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_rt::test]
async fn order_id_wider_than_storage_is_not_found(client: Client) {
    let (status, body) = client.get("/order/3000000000/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[case::unknown_user("/orders/42/")]
#[case::existing_user_without_orders("/orders/1/")]
#[case::user_id_wider_than_storage("/orders/3000000000/")]
#[actix_rt::test]
async fn users_without_orders_list_nothing(client: Client, #[case] uri: &str) {
    client.create_user("Ada", "ada@example.com").await;
    let (status, body) = client.get(uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_rt::test]
async fn created_item_is_listed_once(client: Client) {
    let id = client.create_item("Pizza").await;

    let (status, items) = client.get("/items/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items, json!([{ "id": id, "name": "Pizza" }]));
}

#[rstest]
#[actix_rt::test]
async fn order_for_unknown_user_is_rejected(client: Client) {
    client.create_item("Pizza").await;

    let (status, body) = client
        .post(
            "/order/",
            json!({ "user_id": 5, "order_items": [{ "item_id": 1, "item_count": 1 }] }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["code"], "unknown_user");
    let (_, orders) = client.get("/orders/").await;
    assert_eq!(orders, json!([]));
}

#[rstest]
#[actix_rt::test]
async fn unknown_item_leaves_an_empty_order_behind(client: Client) {
    seed_menu(&client).await;

    let (status, body) = client
        .post(
            "/order/",
            json!({
                "user_id": 1,
                "order_items": [
                    { "item_id": 1, "item_count": 1 },
                    { "item_id": 40, "item_count": 1 }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "invalid_reference");
    assert_eq!(body["details"]["orderId"], 1);

    let (status, order) = client.get("/order/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["items"], json!([]));
}

#[rstest]
#[case::missing_email(json!({ "name": "Ada" }), "/user/", "email")]
#[case::blank_name(json!({ "name": " ", "email": "a@b.c" }), "/user/", "name")]
#[case::missing_item_name(json!({}), "/item/", "name")]
#[case::missing_user_id(json!({ "order_items": [] }), "/order/", "user_id")]
#[actix_rt::test]
async fn missing_fields_are_reported(
    client: Client,
    #[case] payload: Value,
    #[case] uri: &str,
    #[case] field: &str,
) {
    let (status, body) = client.post(uri, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
}

#[rstest]
#[actix_rt::test]
async fn non_integer_order_id_is_invalid(client: Client) {
    let (status, body) = client.get("/order/abc/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}
