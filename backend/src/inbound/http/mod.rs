//! HTTP inbound adapter exposing the ordering REST endpoints.

pub mod documents;
pub mod error;
pub mod health;
pub mod home;
pub mod items;
pub mod orders;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
pub(crate) mod validation;

use actix_web::web;

pub use error::{ApiResult, json_config, path_config};

/// Register the ordering endpoints and their extractor configuration.
///
/// Health probes and API docs are mounted separately by the server.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use togohub::domain::ports::{FixtureOrderingCommand, FixtureOrderingQuery};
/// use togohub::inbound::http::{configure_routes, state::HttpState};
///
/// let state = HttpState::new(Arc::new(FixtureOrderingCommand), Arc::new(FixtureOrderingQuery));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_routes);
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(home::banner)
        .service(orders::list_orders)
        .service(orders::list_user_orders)
        .service(orders::get_order)
        .service(orders::create_order)
        .service(items::list_items)
        .service(items::create_item)
        .service(users::create_user);
}
