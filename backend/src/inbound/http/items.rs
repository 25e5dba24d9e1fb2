//! Menu endpoints.
//!
//! ```text
//! GET  /items/
//! POST /item/ {"name": "Pizza"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ItemValidationError, NewItem};
use crate::inbound::http::ApiResult;
use crate::inbound::http::documents::{ItemCreatedResponse, ItemDocument};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, required_text};

const NAME_FIELD: FieldName = FieldName::new("name");

/// Request body for adding a dish to the menu.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Pizza")]
    pub name: Option<String>,
}

fn parse_create_item(payload: CreateItemRequest) -> Result<NewItem, Error> {
    let name = required_text(payload.name, NAME_FIELD)?;
    NewItem::try_new(&name).map_err(|err| match err {
        ItemValidationError::EmptyName => missing_field_error(NAME_FIELD),
    })
}

/// List every menu item.
#[utoipa::path(
    get,
    path = "/items/",
    responses(
        (status = 200, description = "Menu items ascending by id", body = [ItemDocument]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items/")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ItemDocument>>> {
    let items = state.ordering_query.list_items().await?;
    Ok(web::Json(items.iter().map(ItemDocument::from).collect()))
}

/// Add a dish to the menu and return its generated id.
#[utoipa::path(
    post,
    path = "/item/",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemCreatedResponse),
        (status = 400, description = "Missing name", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/item/")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<CreateItemRequest>,
) -> ApiResult<web::Json<ItemCreatedResponse>> {
    let draft = parse_create_item(payload.into_inner())?;
    let item_id = state.ordering.create_item(draft).await?;
    Ok(web::Json(ItemCreatedResponse::from(item_id)))
}
