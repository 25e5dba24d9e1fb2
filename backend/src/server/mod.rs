//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use togohub::Trace;
#[cfg(debug_assertions)]
use togohub::doc::ApiDoc;
use togohub::inbound::http::configure_routes;
use togohub::inbound::http::health::{HealthState, live, ready};
use togohub::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_routes)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The readiness probe flips to ready once the listener is bound. Actix's own
/// signal handling is disabled; `main` stops the server through its handle.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .disable_signals()
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;

    fn app_state() -> (web::Data<HealthState>, web::Data<HttpState>) {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        (web::Data::new(HealthState::new()), build_http_state(&config))
    }

    #[rstest]
    #[actix_rt::test]
    async fn serves_banner_and_probes() {
        let (health, http) = app_state();
        health.mark_ready();
        let app = test::init_service(build_app(health, http)).await;

        let banner = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(banner.status(), StatusCode::OK);
        assert!(banner.headers().contains_key("trace-id"));

        let readiness = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(readiness.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_rt::test]
    async fn readiness_reports_unavailable_before_start() {
        let (health, http) = app_state();
        let app = test::init_service(build_app(health, http)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[actix_rt::test]
    async fn created_items_are_listed() {
        let (health, http) = app_state();
        let app = test::init_service(build_app(health, http)).await;

        let create = test::TestRequest::post()
            .uri("/item/")
            .set_json(serde_json::json!({ "name": "Pizza" }))
            .to_request();
        let res = test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/items/").to_request(),
        )
        .await;
        assert_eq!(body, serde_json::json!([{ "id": 1, "name": "Pizza" }]));
    }
}
