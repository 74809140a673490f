use crate::domain::model::{BlogPost, BlogPostPatch, NewBlogPost, Registration};
use crate::transport::http::handlers::{blogs, health, register};
use crate::transport::http::types::{AppState, BlogResponse, ErrorResponse, MessageResponse};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        register::register_handler,
        blogs::create_blog_handler,
        blogs::list_blogs_handler,
        blogs::get_blog_handler,
        blogs::update_blog_handler,
        blogs::delete_blog_handler
    ),
    components(schemas(
        Registration,
        NewBlogPost,
        BlogPostPatch,
        BlogPost,
        BlogResponse,
        MessageResponse,
        ErrorResponse,
        health::HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/register", post(register::register_handler))
        .route(
            "/blogs",
            post(blogs::create_blog_handler).get(blogs::list_blogs_handler),
        )
        .route(
            "/blogs/:id",
            get(blogs::get_blog_handler)
                .put(blogs::update_blog_handler)
                .delete(blogs::delete_blog_handler),
        )
        .with_state(app_state)
}
