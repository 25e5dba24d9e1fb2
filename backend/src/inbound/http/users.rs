//! Customer registration endpoint.
//!
//! ```text
//! POST /user/ {"name": "Ada", "email": "ada@example.com"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::documents::UserCreatedResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, required_text};

const NAME_FIELD: FieldName = FieldName::new("name");
const EMAIL_FIELD: FieldName = FieldName::new("email");

/// Request body for registering a customer.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyName => missing_field_error(NAME_FIELD),
        UserValidationError::EmptyEmail => missing_field_error(EMAIL_FIELD),
    }
}

fn parse_create_user(payload: CreateUserRequest) -> Result<NewUser, Error> {
    let name = required_text(payload.name, NAME_FIELD)?;
    let email = required_text(payload.email, EMAIL_FIELD)?;
    NewUser::try_from_parts(&name, &email).map_err(map_user_validation_error)
}

/// Register a customer and return its generated id.
#[utoipa::path(
    post,
    path = "/user/",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Missing name or email", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserCreatedResponse>> {
    let draft = parse_create_user(payload.into_inner())?;
    let user_id = state.ordering.create_user(draft).await?;
    Ok(web::Json(UserCreatedResponse::from(user_id)))
}
