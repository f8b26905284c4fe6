//! # Blog API
//!
//! Actix-web application serving the in-memory post store.
//! The binary in `main.rs` and the integration tests both build the
//! application through [`build_app`].

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use tracing_actix_web::TracingLogger;

use middleware::error::{json_config, path_config, query_config};
use observability::RequestIdMiddleware;
use state::AppState;

/// Build the application with all routes, extractor configs and middleware.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .configure(handlers::configure_routes)
        .default_service(web::to(handlers::not_found))
}
