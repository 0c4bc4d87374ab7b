//! Input validation outcomes for post submissions.

use std::fmt;

/// A single reason a submission was rejected.
///
/// The display text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("El título es requerido")]
    TitleRequired,

    #[error("El contenido es requerido")]
    ContentRequired,

    #[error("El título no puede tener más de 200 caracteres")]
    TitleTooLong,
}

impl ValidationIssue {
    /// Whether the issue is a missing required field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::TitleRequired | Self::ContentRequired)
    }
}

/// Every issue found while validating one submission, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// User-facing messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// `Ok(value)` when no issue was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::default().into_result(7), Ok(7));

        let mut errors = ValidationErrors::default();
        errors.push(ValidationIssue::TitleTooLong);
        assert!(errors.clone().into_result(7).is_err());
        assert_eq!(
            errors.to_string(),
            "El título no puede tener más de 200 caracteres"
        );
    }
}
