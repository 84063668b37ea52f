use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the Gemini generateContent endpoint
#[derive(Debug, Error)]
pub enum GeminiApiError {
    #[error("Invalid request (400): {message}")]
    InvalidRequest { message: String },

    #[error("Authentication error (401): {message}")]
    Unauthenticated { message: String },

    #[error("Permission denied (403): {message}")]
    PermissionDenied { message: String },

    #[error("Not found (404): {message}")]
    NotFound { message: String },

    #[error("Rate limit exceeded (429): {message}")]
    ResourceExhausted { message: String },

    #[error("Internal API error (500): {message}")]
    Internal { message: String },

    #[error("Service unavailable (503): {message}")]
    Unavailable { message: String },

    /// Catch-all for unexpected status codes
    #[error("Unexpected API error ({status}): {message}")]
    Unexpected { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GeminiApiError {
    /// Builds an error from a non-2xx response, falling back to the raw body
    /// when it is not the usual `{"error": {...}}` envelope
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status.as_u16() {
            400 => Self::InvalidRequest { message },
            401 => Self::Unauthenticated { message },
            403 => Self::PermissionDenied { message },
            404 => Self::NotFound { message },
            429 => Self::ResourceExhausted { message },
            500 => Self::Internal { message },
            503 => Self::Unavailable { message },
            other => Self::Unexpected {
                status: other,
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_error_envelope() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = GeminiApiError::from_response(StatusCode::TOO_MANY_REQUESTS, body);
        assert!(matches!(err, GeminiApiError::ResourceExhausted { .. }));
        assert_eq!(err.to_string(), "Rate limit exceeded (429): Quota exceeded");
    }

    #[test]
    fn falls_back_to_the_raw_body() {
        let err = GeminiApiError::from_response(StatusCode::BAD_GATEWAY, "upstream died");
        assert_eq!(
            err.to_string(),
            "Unexpected API error (502): upstream died"
        );
    }
}
