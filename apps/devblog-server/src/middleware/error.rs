//! Error handling - JSON envelopes for the API, HTML pages for the site.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use devblog_core::error::{DomainError, RepoError};
use devblog_core::ValidationErrors;
use devblog_shared::ErrorResponse;
use devblog_shared::dto::CreatePostForm;
use std::fmt;

use crate::views::{self, Flash};

/// API error type that converts to `{"success": false, "error": ...}` responses.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Validation(ValidationErrors),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound => ErrorResponse::not_found(),
            AppError::BadRequest(detail) => ErrorResponse::new(detail.clone()),
            AppError::Validation(errors) => ErrorResponse::new(errors.to_string()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound,
            DomainError::Validation(errors) => AppError::Validation(errors),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for API handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Error type for HTML page handlers - renders an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Page not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unreadable create form; the form is shown again with a flash.
    #[error("Rejected form: {detail}")]
    Form {
        status: StatusCode,
        flash: &'static str,
        detail: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::Form { status, .. } => *status,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            PageError::NotFound => views::not_found_page(),
            PageError::BadRequest(detail) => {
                tracing::debug!("Bad request: {}", detail);
                views::bad_request_page()
            }
            PageError::Form { flash, detail, .. } => {
                tracing::debug!("Rejected form: {}", detail);
                views::create_page(&CreatePostForm::default(), &[Flash::error(*flash)])
            }
            PageError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                views::error_page()
            }
        };

        match body {
            Ok(body) => HttpResponse::build(self.status_code())
                .content_type(views::HTML_CONTENT_TYPE)
                .body(body),
            Err(e) => {
                tracing::error!("Template rendering failed: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Error interno del servidor")
            }
        }
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => PageError::NotFound,
            DomainError::Validation(errors) => PageError::BadRequest(errors.to_string()),
        }
    }
}

impl From<RepoError> for PageError {
    fn from(err: RepoError) -> Self {
        PageError::Internal(err.to_string())
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError::Internal(format!("template rendering failed: {}", err))
    }
}

/// Result type alias for HTML page handlers.
pub type PageResult<T> = Result<T, PageError>;

/// Map JSON extractor failures to API errors with user-facing messages.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        error::JsonPayloadError::ContentType => "Content-Type debe ser application/json",
        _ => "JSON malformado",
    };
    tracing::debug!(error = %err, "Rejected JSON payload");
    AppError::BadRequest(message.to_string()).into()
}

/// Query strings the API cannot read are a 400 envelope.
pub fn api_query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::BadRequest("Parámetros de consulta inválidos".to_string()).into()
}

/// Query strings the site cannot read render the 400 page.
pub fn page_query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    PageError::BadRequest(err.to_string()).into()
}

/// Create form bodies that cannot be read re-render the form with a flash.
pub fn form_error_handler(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let (status, flash) = match &err {
        error::UrlencodedError::Overflow { .. } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            "El post es demasiado grande para publicarse",
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            "No se pudo leer el formulario enviado",
        ),
    };
    PageError::Form {
        status,
        flash,
        detail: err.to_string(),
    }
    .into()
}

/// Unparseable `{id}` segments on API routes behave like unknown posts.
pub fn api_path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected path parameter");
    AppError::NotFound.into()
}

/// Unparseable `{id}` segments on HTML routes render the 404 page.
pub fn page_path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected path parameter");
    PageError::NotFound.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use devblog_core::ValidationIssue;

    #[actix_web::test]
    async fn test_not_found_envelope() {
        let err: AppError = DomainError::NotFound { id: 3 }.into();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Post no encontrado");
    }

    #[actix_web::test]
    async fn test_internal_error_hides_detail() {
        let err: AppError = RepoError::Unavailable("disk on fire".to_string()).into();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("disk on fire"));
    }

    #[test]
    fn test_validation_is_bad_request() {
        let mut errors = ValidationErrors::default();
        errors.push(ValidationIssue::TitleRequired);
        let err: AppError = DomainError::from(errors).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_page_not_found_status() {
        let err: PageError = DomainError::NotFound { id: 1 }.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_page_validation_is_bad_request() {
        let mut errors = ValidationErrors::default();
        errors.push(ValidationIssue::ContentRequired);
        let err: PageError = DomainError::from(errors).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Solicitud inválida"));
    }

    #[actix_web::test]
    async fn test_oversized_form_renders_create_page() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let err = form_error_handler(
            error::UrlencodedError::Overflow {
                size: 20,
                limit: 10,
            },
            &req,
        );
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = to_bytes(response.into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Crear nuevo post"));
        assert!(text.contains("El post es demasiado grande para publicarse"));
    }
}
