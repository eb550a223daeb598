//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /blog-posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    let body: Vec<BlogPostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /blog-posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /blog-posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewBlogPost::new(req.author, req.title, req.content)?;

    let post = state.posts.insert(input).await?;
    tracing::info!(post_id = %post.id, "Created blog post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /blog-posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                path.as_str(),
                body_id
            )));
        }
    }

    let patch = BlogPostPatch::new(req.author, req.title, req.content)?;
    state
        .posts
        .update_fields(id, patch)
        .await
        .map_err(|e| or_not_found(e, id))?;
    tracing::info!(post_id = %id, "Updated blog post");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blog-posts/{id}
///
/// Deleting an id that does not exist answers 404.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state
        .posts
        .delete_by_id(id)
        .await
        .map_err(|e| or_not_found(e, id))?;
    tracing::info!(post_id = %id, "Deleted blog post");

    Ok(HttpResponse::NoContent().finish())
}

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        author: post.author,
        title: post.title,
        content: post.content,
        publish_date: post.publish_date.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// An id that is not a UUID cannot name a stored post.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("BlogPost with id {} not found", raw)))
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id,
    }
}

fn or_not_found(err: RepoError, id: Uuid) -> AppError {
    match err {
        RepoError::NotFound => not_found(id).into(),
        other => other.into(),
    }
}
