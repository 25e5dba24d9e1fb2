//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every ordering endpoint, the health probes, and the
//! request and response documents they exchange. Domain error types are
//! described through the wrappers in [`crate::inbound::http::schemas`] so the
//! domain stays free of utoipa.
//!
//! The generated document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::documents::{
    ItemCreatedResponse, ItemDocument, OrderCreatedResponse, OrderDocument, OrderItemDocument,
    UserCreatedResponse,
};
use crate::inbound::http::items::CreateItemRequest;
use crate::inbound::http::orders::{CreateOrderRequest, OrderItemRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::CreateUserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TOGOHUB food ordering API",
        description = "Register customers, publish menu items, and place and browse orders.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::home::banner,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::orders::list_user_orders,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::create_item,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ItemDocument,
        OrderItemDocument,
        OrderDocument,
        UserCreatedResponse,
        ItemCreatedResponse,
        OrderCreatedResponse,
        CreateUserRequest,
        CreateItemRequest,
        CreateOrderRequest,
        OrderItemRequest,
    )),
    tags(
        (name = "meta", description = "Service banner"),
        (name = "orders", description = "Placing and browsing orders"),
        (name = "items", description = "Menu items"),
        (name = "users", description = "Customer registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
