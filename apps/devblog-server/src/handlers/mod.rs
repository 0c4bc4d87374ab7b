//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;


use actix_web::web;

use crate::middleware::error::{
    api_path_error_handler, api_query_error_handler, form_error_handler, json_error_handler,
    page_path_error_handler, page_query_error_handler,
};

/// Request body limit shared by the JSON API and the create form.
/// Post content has no length limit of its own.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(
                web::JsonConfig::default()
                    .limit(MAX_BODY_BYTES)
                    .error_handler(json_error_handler),
            )
            .app_data(web::PathConfig::default().error_handler(api_path_error_handler))
            .app_data(web::QueryConfig::default().error_handler(api_query_error_handler))
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Posts
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::get_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post)),
            )
            .route("/search", web::get().to(posts::search_posts))
            .default_service(web::to(posts::not_found)),
    )
    .service(
        web::scope("")
            .app_data(web::PathConfig::default().error_handler(page_path_error_handler))
            .app_data(web::QueryConfig::default().error_handler(page_query_error_handler))
            .app_data(
                web::FormConfig::default()
                    .limit(MAX_BODY_BYTES)
                    .error_handler(form_error_handler),
            )
            .route("/", web::get().to(pages::index))
            .route("/post/{id}", web::get().to(pages::view_post))
            .service(
                web::resource("/create")
                    .route(web::get().to(pages::create_form))
                    .route(web::post().to(pages::create_submit)),
            )
            .route("/search", web::get().to(pages::search))
            .default_service(web::to(pages::not_found)),
    );
}
