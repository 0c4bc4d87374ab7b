//! Askama templates for the blog pages.

mod pages;

pub use pages::{
    bad_request_page, create_page, error_page, index_page, not_found_page, post_page, search_page,
};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Severity of a flash banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "flash success",
            FlashKind::Error => "flash error",
        }
    }
}

/// One-shot status banner rendered at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_css_class() {
        assert_eq!(Flash::success("ok").kind.css_class(), "flash success");
        assert_eq!(Flash::error("no").kind.css_class(), "flash error");
    }

    #[test]
    fn test_flash_is_escaped() {
        let page = create_page(&Default::default(), &[Flash::error("<bad>")]).unwrap();
        assert!(page.contains(r#"<div class="flash error">&lt;bad&gt;</div>"#));
    }
}
