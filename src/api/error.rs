use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized - credentials rejected or token expired")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    /// Pull the human-readable message out of an error body.
    /// The backend answers with `{"error": ...}` or `{"detail": ...}`;
    /// anything else falls back to the (truncated) raw body.
    fn extract_message(body: &str) -> String {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<serde_json::Value>,
            detail: Option<String>,
        }

        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(detail) = parsed.detail {
                return detail;
            }
            if let Some(error) = parsed.error {
                return match error {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
            }
        }
        Self::truncate_body(body)
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::extract_message(body);
        match status.as_u16() {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(message),
            404 => ApiError::NotFound(message),
            500..=599 => ApiError::ServerError(message),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_codes() {
        let err = ApiError::from_status(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"error": "Email and password are required."}"#,
        );
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("required")));

        let err = ApiError::from_status(reqwest::StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, ApiError::Unauthorized));

        let err = ApiError::from_status(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"detail": "Invalid plan_id."}"#,
        );
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Invalid plan_id."));

        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(err, ApiError::ServerError(ref m) if m == "boom"));
    }

    #[test]
    fn test_extract_message_falls_back_to_body() {
        let err = ApiError::from_status(reqwest::StatusCode::BAD_REQUEST, "plain text failure");
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "plain text failure"));
    }
}
