//! Order endpoints.
//!
//! ```text
//! GET  /orders/
//! GET  /orders/{user_id}/
//! GET  /order/{id}/
//! POST /order/ {"user_id": 1, "order_items": [{"item_id": 1, "item_count": 3}]}
//! ```
//!
//! Creating an order writes the order row before its lines. When the lines
//! are rejected the order row stays behind and its id is reported in
//! `details.orderId`.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, ItemId, NewOrder, NewOrderLine, Order, OrderId, OrderValidationError, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::documents::{OrderCreatedResponse, OrderDocument};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, duplicate_item_error, empty_list_error, missing_entry_field_error, required,
};

const USER_ID_FIELD: FieldName = FieldName::new("user_id");
const ORDER_ITEMS_FIELD: FieldName = FieldName::new("order_items");
const ITEM_ID_FIELD: FieldName = FieldName::new("item_id");
const ITEM_COUNT_FIELD: FieldName = FieldName::new("item_count");

/// One requested line of a new order.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct OrderItemRequest {
    #[schema(example = 1)]
    pub item_id: Option<i32>,
    #[schema(example = 3)]
    pub item_count: Option<i32>,
}

/// Request body for placing an order.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 1)]
    pub user_id: Option<i32>,
    pub order_items: Option<Vec<OrderItemRequest>>,
}

fn parse_line(index: usize, entry: OrderItemRequest) -> Result<NewOrderLine, Error> {
    let item_id = entry
        .item_id
        .ok_or_else(|| missing_entry_field_error(ITEM_ID_FIELD, index))?;
    let item_count = entry
        .item_count
        .ok_or_else(|| missing_entry_field_error(ITEM_COUNT_FIELD, index))?;
    Ok(NewOrderLine::new(ItemId::new(item_id), item_count))
}

fn map_order_validation_error(err: OrderValidationError) -> Error {
    match err {
        OrderValidationError::NoLines => empty_list_error(ORDER_ITEMS_FIELD),
        OrderValidationError::DuplicateItem { item_id } => {
            duplicate_item_error(ORDER_ITEMS_FIELD, item_id.get())
        }
    }
}

fn parse_create_order(payload: CreateOrderRequest) -> Result<NewOrder, Error> {
    let user_id = required(payload.user_id, USER_ID_FIELD)?;
    let entries = required(payload.order_items, ORDER_ITEMS_FIELD)?;
    let lines = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_line(index, entry))
        .collect::<Result<Vec<_>, _>>()?;
    NewOrder::try_new(UserId::new(user_id), lines).map_err(map_order_validation_error)
}

/// Narrow a path identifier to the store's key width. Values outside it can
/// never name a stored row.
fn stored_key(raw: i64) -> Option<i32> {
    i32::try_from(raw).ok()
}

fn to_documents(orders: &[Order]) -> Vec<OrderDocument> {
    orders.iter().map(OrderDocument::from).collect()
}

/// List every order with its lines.
#[utoipa::path(
    get,
    path = "/orders/",
    responses(
        (status = 200, description = "Orders ascending by id", body = [OrderDocument]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders/")]
pub async fn list_orders(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<OrderDocument>>> {
    let orders = state.ordering_query.list_orders().await?;
    Ok(web::Json(to_documents(&orders)))
}

/// List the orders of one customer. Unknown customers yield an empty list.
#[utoipa::path(
    get,
    path = "/orders/{user_id}/",
    params(("user_id" = i64, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Orders of the customer", body = [OrderDocument]),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listUserOrders"
)]
#[get("/orders/{user_id}/")]
pub async fn list_user_orders(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<OrderDocument>>> {
    let Some(raw) = stored_key(path.into_inner()) else {
        return Ok(web::Json(Vec::new()));
    };
    let user_id = UserId::new(raw);
    let orders = state.ordering_query.list_orders_for_user(user_id).await?;
    Ok(web::Json(to_documents(&orders)))
}

/// Fetch one order.
#[utoipa::path(
    get,
    path = "/order/{id}/",
    params(("id" = i64, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "The order", body = OrderDocument),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Order not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/order/{id}/")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<OrderDocument>> {
    let raw = path.into_inner();
    let order_id = stored_key(raw)
        .map(OrderId::new)
        .ok_or_else(|| Error::not_found(format!("order {raw} not found")))?;
    let order = state.ordering_query.fetch_order(order_id).await?;
    Ok(web::Json(OrderDocument::from(&order)))
}

/// Place an order and return its generated id.
#[utoipa::path(
    post,
    path = "/order/",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderCreatedResponse),
        (status = 400, description = "Missing or malformed fields", body = ErrorSchema),
        (status = 422, description = "Unknown user or item", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/order/")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<CreateOrderRequest>,
) -> ApiResult<web::Json<OrderCreatedResponse>> {
    let draft = parse_create_order(payload.into_inner())?;
    let order_id = state.ordering.place_order(draft).await?;
    Ok(web::Json(OrderCreatedResponse::from(order_id)))
}
