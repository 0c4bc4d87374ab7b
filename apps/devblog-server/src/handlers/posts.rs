//! JSON API handlers for posts.

use actix_web::{HttpResponse, web};

use devblog_core::domain::{DEFAULT_API_AUTHOR, NewPost, PostId, PostPatch};
use devblog_core::{DomainError, ValidationErrors};
use devblog_shared::{ApiResponse, ErrorResponse};
use devblog_shared::dto::{CreatePostRequest, SearchQuery, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Creation collapses the two "required" issues into one message.
fn create_validation_error(errors: ValidationErrors) -> AppError {
    if errors.issues().iter().any(|issue| issue.is_missing_field()) {
        AppError::BadRequest("Título y contenido son requeridos".to_string())
    } else {
        AppError::Validation(errors)
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(posts)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Option<CreatePostRequest>>,
) -> AppResult<HttpResponse> {
    let req = match body.into_inner() {
        Some(req) if !req.is_empty() => req,
        _ => {
            return Err(AppError::BadRequest(
                "No se proporcionaron datos JSON válidos".to_string(),
            ));
        }
    };

    let input = NewPost::validate(
        req.title.as_deref(),
        req.content.as_deref(),
        req.author.as_deref(),
        DEFAULT_API_AUTHOR,
    )
    .map_err(create_validation_error)?;

    let post = state.posts.create(input).await?;
    tracing::info!(post_id = post.id, "Post created via API");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        post,
        "Post creado exitosamente",
    )))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { id })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<Option<UpdatePostRequest>>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let Some(req) = body.into_inner() else {
        return Err(AppError::BadRequest(
            "No se proporcionaron datos JSON".to_string(),
        ));
    };

    let patch = PostPatch::validate(req.title.as_deref(), req.content.as_deref())
        .map_err(DomainError::from)?;
    if patch.is_empty() {
        return Err(AppError::BadRequest(
            "No se proporcionaron datos JSON".to_string(),
        ));
    }

    let post = state
        .posts
        .update(id, patch)
        .await?
        .ok_or(DomainError::NotFound { id })?;
    tracing::info!(post_id = id, "Post updated via API");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post,
        "Post actualizado exitosamente",
    )))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !state.posts.delete(id).await? {
        return Err(DomainError::NotFound { id }.into());
    }
    tracing::info!(post_id = id, "Post deleted via API");

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Post eliminado exitosamente")))
}

/// GET /api/search?q=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let Some(term) = query.term() else {
        return Err(AppError::BadRequest(
            r#"Parámetro de búsqueda "q" es requerido"#.to_string(),
        ));
    };

    let results = state.posts.search(term).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(results).with_query(term)))
}

/// Fallback for unknown `/api/...` paths.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Recurso no encontrado"))
}
