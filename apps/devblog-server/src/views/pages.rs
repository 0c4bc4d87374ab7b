use askama::Template;
use chrono::{DateTime, Utc};
use devblog_core::domain::{Post, TITLE_MAX_CHARS};
use devblog_shared::dto::CreatePostForm;

use super::Flash;

const PREVIEW_CHARS: usize = 200;

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// Listing entry shared by the home and search pages.
struct PostSummary<'a> {
    id: u64,
    title: &'a str,
    author: &'a str,
    created: String,
    preview: String,
}

impl<'a> PostSummary<'a> {
    fn new(post: &'a Post) -> Self {
        let mut preview: String = post.content.chars().take(PREVIEW_CHARS).collect();
        if post.content.chars().count() > PREVIEW_CHARS {
            preview.push_str("...");
        }

        Self {
            id: post.id,
            title: &post.title,
            author: &post.author,
            created: format_date(&post.created_at),
            preview,
        }
    }
}

fn summaries(posts: &[Post]) -> Vec<PostSummary<'_>> {
    posts.iter().map(PostSummary::new).collect()
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    flashes: &'a [Flash],
    posts: Vec<PostSummary<'a>>,
}

#[derive(Template)]
#[template(path = "post.html")]
struct PostTemplate<'a> {
    flashes: &'a [Flash],
    title: &'a str,
    author: &'a str,
    content: &'a str,
    created: String,
    updated: Option<String>,
}

#[derive(Template)]
#[template(path = "create.html")]
struct CreateTemplate<'a> {
    flashes: &'a [Flash],
    max_title: usize,
    title: &'a str,
    author: &'a str,
    content: &'a str,
}

#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate<'a> {
    flashes: &'a [Flash],
    query: Option<&'a str>,
    message: &'a str,
    posts: Vec<PostSummary<'a>>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    flashes: &'a [Flash],
    page_title: &'a str,
    heading: &'a str,
    message: &'a str,
}

/// Home page listing every post.
pub fn index_page(posts: &[Post]) -> askama::Result<String> {
    IndexTemplate {
        flashes: &[],
        posts: summaries(posts),
    }
    .render()
}

/// Single post page.
pub fn post_page(post: &Post, flashes: &[Flash]) -> askama::Result<String> {
    PostTemplate {
        flashes,
        title: &post.title,
        author: &post.author,
        content: &post.content,
        created: format_date(&post.created_at),
        updated: (post.updated_at != post.created_at).then(|| format_date(&post.updated_at)),
    }
    .render()
}

/// Create form, optionally pre-filled with a rejected submission.
pub fn create_page(form: &CreatePostForm, flashes: &[Flash]) -> askama::Result<String> {
    CreateTemplate {
        flashes,
        max_title: TITLE_MAX_CHARS,
        title: form.title.as_deref().unwrap_or_default(),
        author: form.author.as_deref().unwrap_or_default(),
        content: form.content.as_deref().unwrap_or_default(),
    }
    .render()
}

/// Search page. `query` is `None` when no term was given.
pub fn search_page(query: Option<&str>, posts: &[Post], message: &str) -> askama::Result<String> {
    SearchTemplate {
        flashes: &[],
        query,
        message,
        posts: summaries(posts),
    }
    .render()
}

pub fn not_found_page() -> askama::Result<String> {
    ErrorTemplate {
        flashes: &[],
        page_title: "Página no encontrada",
        heading: "Post no encontrado",
        message: "La página que buscas no existe o fue eliminada.",
    }
    .render()
}

pub fn bad_request_page() -> askama::Result<String> {
    ErrorTemplate {
        flashes: &[],
        page_title: "Solicitud inválida",
        heading: "Solicitud inválida",
        message: "No pudimos entender tu solicitud. Revisa la dirección e inténtalo de nuevo.",
    }
    .render()
}

pub fn error_page() -> askama::Result<String> {
    ErrorTemplate {
        flashes: &[],
        page_title: "Error",
        heading: "Error interno",
        message: "Algo salió mal al procesar tu solicitud. Inténtalo de nuevo más tarde.",
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str) -> Post {
        let now = Utc::now();
        Post {
            id: 7,
            title: "Rust & <HTML>".to_string(),
            content: content.to_string(),
            author: "Ana".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_index_page_lists_posts_escaped() {
        let page = index_page(&[post("hola")]).unwrap();
        assert!(page.contains(r#"<a href="/post/7">Rust &amp; &lt;HTML&gt;</a>"#));
        assert!(page.contains("Por Ana"));
    }

    #[test]
    fn test_index_page_empty() {
        assert!(index_page(&[]).unwrap().contains("Todavía no hay posts"));
    }

    #[test]
    fn test_summary_truncates_long_content() {
        let long = "x".repeat(250);
        let page = index_page(&[post(&long)]).unwrap();
        assert!(page.contains(&format!("{}...", "x".repeat(200))));
        assert!(!page.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_post_page_shows_update_time_only_when_edited() {
        let mut edited = post("hola");
        assert!(!post_page(&edited, &[]).unwrap().contains("Actualizado"));

        edited.updated_at = edited.created_at + chrono::Duration::minutes(5);
        assert!(post_page(&edited, &[]).unwrap().contains("Actualizado"));
    }

    #[test]
    fn test_create_page_keeps_input() {
        let form = CreatePostForm {
            title: Some("Mi \"título\"".to_string()),
            content: Some("texto".to_string()),
            author: None,
        };
        let page = create_page(&form, &[Flash::error("El contenido es requerido")]).unwrap();
        assert!(page.contains(r#"value="Mi &quot;título&quot;""#));
        assert!(page.contains(">texto</textarea>"));
        assert!(page.contains(r#"maxlength="200""#));
        assert!(page.contains("El contenido es requerido"));
    }

    #[test]
    fn test_search_page_title() {
        let page = search_page(Some("rust"), &[], "No se encontraron resultados").unwrap();
        assert!(page.contains("<title>Búsqueda: rust</title>"));
        assert!(page.contains(r#"name="q" value="rust""#));

        let page = search_page(None, &[], "Ingresa un término de búsqueda").unwrap();
        assert!(page.contains("<title>Búsqueda - DevBlog</title>"));
    }

    #[test]
    fn test_error_pages() {
        assert!(not_found_page().unwrap().contains("Post no encontrado"));
        assert!(bad_request_page().unwrap().contains("Solicitud inválida"));
        assert!(error_page().unwrap().contains("Error interno"));
    }
}
