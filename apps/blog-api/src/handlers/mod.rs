//! HTTP handlers and route configuration.

mod fallback;
mod health;
mod posts;

use actix_web::web;

pub use fallback::{method_not_allowed, not_found};

/// Configure all application routes.
///
/// `/posts/search` is registered ahead of `/posts/{id}` so it is never read
/// as an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/health")
                    .route(web::get().to(health::health_check))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/posts/search")
                    .route(web::get().to(posts::search_posts))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::get_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post))
                    .default_service(web::to(method_not_allowed)),
            ),
    );
}
