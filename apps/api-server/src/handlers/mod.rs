//! HTTP handlers and route configuration.

mod blog_posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed or non-JSON bodies get the same problem-details shape as validation errors.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/blog-posts")
            .route(web::get().to(blog_posts::list_posts))
            .route(web::post().to(blog_posts::create_post)),
    )
    .service(
        web::resource("/blog-posts/{id}")
            .route(web::get().to(blog_posts::get_post))
            .route(web::put().to(blog_posts::update_post))
            .route(web::delete().to(blog_posts::delete_post)),
    );
}
