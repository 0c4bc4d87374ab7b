//! Standardized JSON envelopes for the API.

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of items in `data`, for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Echo of the search term, for search responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
            query: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self::ok(data).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// List response carrying its item count.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        let mut response = Self::ok(items);
        response.count = Some(count);
        response
    }
}

impl ApiResponse<()> {
    /// Success with a message and no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            count: None,
            query: None,
        }
    }
}

/// Error envelope: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,

    /// A human-readable explanation specific to this occurrence.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Post no encontrado")
    }

    pub fn internal_error() -> Self {
        Self::new("Error interno del servidor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_shape() {
        let value = serde_json::to_value(ApiResponse::list(vec![1, 2])).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2], "count": 2}));
    }

    #[test]
    fn test_message_only_response_omits_data() {
        let value = serde_json::to_value(ApiResponse::<()>::message("done")).unwrap();
        assert_eq!(value, json!({"success": true, "message": "done"}));
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::not_found()).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Post no encontrado"}));
    }
}
