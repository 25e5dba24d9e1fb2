//! Service banner.
//!
//! ```text
//! GET /
//! ```

use actix_web::{HttpResponse, get, http::header::ContentType};

/// Plain-text greeting served at the root path.
pub const BANNER: &str = "TOGOHUB Food Ordering App.";

/// Return the service banner.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = String, content_type = "text/plain")),
    tags = ["meta"],
    operation_id = "getBanner"
)]
#[get("/")]
pub async fn banner() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(BANNER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn banner_is_plain_text() {
        let app = test::init_service(App::new().service(banner)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());
        let content_type = res
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        assert!(content_type.is_some_and(|value| value.starts_with("text/plain")));
        let body = test::read_body(res).await;
        assert_eq!(body.as_ref(), BANNER.as_bytes());
    }
}
