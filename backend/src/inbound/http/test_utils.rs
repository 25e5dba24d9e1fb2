//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::Trace;
use crate::inbound::http::configure_routes;
use crate::inbound::http::state::HttpState;

/// Build an application with every ordering route and the extractor
/// configuration used in production.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_routes)
}

async fn send(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, value)
}

/// Issue a GET request and decode the JSON body.
pub(crate) async fn get_json(state: HttpState, uri: &str) -> (StatusCode, Value) {
    send(state, actix_test::TestRequest::get().uri(uri)).await
}

/// Issue a POST request with a JSON body and decode the JSON response.
pub(crate) async fn post_json(state: HttpState, uri: &str, body: Value) -> (StatusCode, Value) {
    send(state, actix_test::TestRequest::post().uri(uri).set_json(body)).await
}
