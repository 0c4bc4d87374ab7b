//! HTML page handlers.

use actix_web::{HttpResponse, http::StatusCode, http::header, web};

use devblog_core::DomainError;
use devblog_core::domain::{DEFAULT_FORM_AUTHOR, NewPost, PostId};
use devblog_shared::dto::{CreatePostForm, PostViewQuery, SearchQuery};

use crate::middleware::error::{PageError, PageResult};
use crate::observability::RequestId;
use crate::state::AppState;
use crate::views::{self, Flash, HTML_CONTENT_TYPE};

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(HTML_CONTENT_TYPE)
        .body(body)
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> PageResult<HttpResponse> {
    let posts = state.posts.get_all().await?;
    Ok(html(StatusCode::OK, views::index_page(&posts)?))
}

/// GET /post/{id}
pub async fn view_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    query: web::Query<PostViewQuery>,
) -> PageResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { id })?;

    let flashes = if query.is_created() {
        vec![Flash::success("¡Post creado exitosamente!")]
    } else {
        Vec::new()
    };

    Ok(html(StatusCode::OK, views::post_page(&post, &flashes)?))
}

/// GET /create
pub async fn create_form() -> PageResult<HttpResponse> {
    Ok(html(
        StatusCode::OK,
        views::create_page(&CreatePostForm::default(), &[])?,
    ))
}

/// POST /create
pub async fn create_submit(
    state: web::Data<AppState>,
    request_id: RequestId,
    form: web::Form<CreatePostForm>,
) -> PageResult<HttpResponse> {
    let form = form.into_inner();

    // Re-rendered forms show the trimmed input.
    let submitted = CreatePostForm {
        title: form.title.as_deref().map(|s| s.trim().to_string()),
        content: form.content.as_deref().map(|s| s.trim().to_string()),
        author: form.author.as_deref().map(|s| s.trim().to_string()),
    };

    let input = match NewPost::validate(
        form.title.as_deref(),
        form.content.as_deref(),
        form.author.as_deref(),
        DEFAULT_FORM_AUTHOR,
    ) {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(errors = %errors, "Rejected post form");
            let flashes: Vec<Flash> = errors.messages().into_iter().map(Flash::error).collect();
            return Ok(html(
                StatusCode::BAD_REQUEST,
                views::create_page(&submitted, &flashes)?,
            ));
        }
    };

    match state.posts.create(input).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post created via form");
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, format!("/post/{}?created=1", post.id)))
                .finish())
        }
        Err(e) => {
            tracing::error!(request_id = %request_id.as_str(), "Failed to create post: {}", e);
            let flash = Flash::error("Error al crear el post: inténtalo de nuevo más tarde");
            Ok(html(
                StatusCode::INTERNAL_SERVER_ERROR,
                views::create_page(&submitted, &[flash])?,
            ))
        }
    }
}

/// GET /search?q=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> PageResult<HttpResponse> {
    let Some(term) = query.term() else {
        return Ok(html(
            StatusCode::OK,
            views::search_page(None, &[], "Ingresa un término de búsqueda")?,
        ));
    };

    let results = state.posts.search(term).await?;
    let message = if results.is_empty() {
        format!("No se encontraron resultados para: \"{}\"", term)
    } else {
        format!("Resultados para: \"{}\"", term)
    };

    Ok(html(
        StatusCode::OK,
        views::search_page(Some(term), &results, &message)?,
    ))
}

/// Fallback for unknown site paths.
pub async fn not_found() -> PageResult<HttpResponse> {
    Err(PageError::NotFound)
}
