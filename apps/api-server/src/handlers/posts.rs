//! Post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, NewPost, Post, PostChanges};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Public shape of a stored post.
pub fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        author: post.author.display_name(),
        content: post.content,
        created: post.created_at,
    }
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let input = new_post_from(body.into_inner())?;

    let post = state.posts.insert(input).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
///
/// Partial update: only fields present in the body change. Responds 201
/// with the updated post.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id {
        if body_id != id {
            return Err(DomainError::Validation(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            ))
            .into());
        }
    }

    let author = req.author.unwrap_or_default();
    let changes = PostChanges {
        title: req.title,
        author_first_name: author.first_name,
        author_last_name: author.last_name,
        content: req.content,
    };

    let post = state
        .posts
        .update(id, changes)
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::from(DomainError::post_not_found(id)),
            other => other.into(),
        })?;
    tracing::info!(post_id = %id, "Post updated");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// DELETE /posts/{id}
///
/// Idempotent: an unknown id still answers 204.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await {
        Ok(()) => tracing::info!(post_id = %id, "Post deleted"),
        Err(RepoError::NotFound) => tracing::debug!(post_id = %id, "Delete of unknown post"),
        Err(e) => return Err(e.into()),
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Check required fields and build the domain input.
fn new_post_from(req: CreatePostRequest) -> AppResult<NewPost> {
    let missing = req.missing_fields();
    let author = req.author.unwrap_or_default();

    match (req.title, author.first_name, author.last_name, req.content) {
        (Some(title), Some(first_name), Some(last_name), Some(content)) => Ok(NewPost {
            title,
            author: Author::new(first_name, last_name),
            content,
        }),
        _ => {
            tracing::warn!(?missing, "Rejected post with missing fields");
            Err(AppError::Validation(
                missing
                    .into_iter()
                    .map(|field| format!("Missing `{}` in request body", field))
                    .collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_shared::dto::AuthorRequest;

    #[test]
    fn response_flattens_author() {
        let post = Post::new(NewPost {
            title: "T".into(),
            author: Author::new("A", "B"),
            content: "C".into(),
        });
        let id = post.id;

        let response = to_response(post);
        assert_eq!(response.id, id);
        assert_eq!(response.author, "A B");
    }

    #[test]
    fn complete_request_builds_new_post() {
        let input = new_post_from(CreatePostRequest {
            title: Some("T".into()),
            author: Some(AuthorRequest {
                first_name: Some("A".into()),
                last_name: Some("B".into()),
            }),
            content: Some("C".into()),
        })
        .unwrap();

        assert_eq!(input.author.display_name(), "A B");
    }

    #[test]
    fn incomplete_request_lists_missing_fields() {
        let err = new_post_from(CreatePostRequest {
            title: Some("T".into()),
            ..Default::default()
        })
        .unwrap_err();

        match err {
            AppError::Validation(errors) => assert_eq!(
                errors,
                vec![
                    "Missing `author.firstName` in request body",
                    "Missing `author.lastName` in request body",
                    "Missing `content` in request body",
                ]
            ),
            other => panic!("unexpected error: {}", other),
        }
    }
}
