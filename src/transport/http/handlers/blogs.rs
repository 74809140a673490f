use crate::app::error::AppError;
use crate::domain::model::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::transport::http::handlers::common::parse_id;
use crate::transport::http::types::{
    malformed_body, AppState, BlogResponse, ErrorResponse, MessageResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/blogs",
    request_body = NewBlogPost,
    responses(
        (status = 201, description = "Blog post created", body = BlogResponse),
        (status = 400, description = "Title, content or author missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_blog_handler(
    State(state): State<AppState>,
    request: Result<Json<NewBlogPost>, JsonRejection>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    let Json(post) = request.map_err(malformed_body)?;

    let blog = state.blogs.lock().await.create(post).await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse {
            message: "Blog post created successfully!".to_string(),
            blog,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/blogs",
    responses(
        (status = 200, description = "All blog posts in storage order", body = Vec<BlogPost>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_blogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    let blogs = state.blogs.lock().await.list().await?;
    Ok(Json(blogs))
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog post id (base 10)")
    ),
    responses(
        (status = 200, description = "Blog post", body = BlogPost),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    let blog = state.blogs.lock().await.get(parse_id(&id)).await?;
    Ok(Json(blog))
}

#[utoipa::path(
    put,
    path = "/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog post id (base 10)")
    ),
    request_body = BlogPostPatch,
    responses(
        (status = 200, description = "Blog post updated", body = BlogResponse),
        (status = 400, description = "No field supplied", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<BlogPostPatch>, JsonRejection>,
) -> Result<Json<BlogResponse>, AppError> {
    let Json(patch) = request.map_err(malformed_body)?;

    let blog = state
        .blogs
        .lock()
        .await
        .update(parse_id(&id), patch)
        .await?;

    Ok(Json(BlogResponse {
        message: "Blog post updated successfully!".to_string(),
        blog,
    }))
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog post id (base 10)")
    ),
    responses(
        (status = 200, description = "Blog post deleted", body = MessageResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.blogs.lock().await.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("Blog post deleted successfully.")))
}
