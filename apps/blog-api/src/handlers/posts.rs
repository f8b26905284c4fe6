//! Post handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;

use blog_core::domain::{NewPost, Post, PostChanges, PostId};
use blog_shared::dto::{
    CreatePostRequest, MessageResponse, PostResponse, SearchQuery, UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        updated_at: post.updated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(to_response).collect()
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    Ok(HttpResponse::Ok().json(to_responses(posts)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
        })
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = request_id.as_str(), "Create rejected: {}", e)
        })?;

    tracing::info!(request_id = request_id.as_str(), post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id} - partial update
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<PostId>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let post = state
        .posts
        .update(
            id,
            PostChanges {
                title: req.title,
                content: req.content,
                author: req.author,
            },
        )
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = request_id.as_str(), post_id = id, "Update rejected: {}", e)
        })?;

    tracing::info!(request_id = request_id.as_str(), post_id = id, "Post updated");
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let removed = state.posts.delete(path.into_inner()).await?;

    tracing::info!(request_id = request_id.as_str(), post_id = removed.id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

/// GET /api/posts/search?q=...
pub async fn search_posts(
    state: web::Data<AppState>,
    request_id: RequestId,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let posts = state
        .posts
        .search(query.q.as_deref())
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = request_id.as_str(), "Search rejected: {}", e)
        })?;
    tracing::debug!(hits = posts.len(), "Search completed");

    Ok(HttpResponse::Ok().json(to_responses(posts)))
}
