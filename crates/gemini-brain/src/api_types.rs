//! Gemini API request and response types.

use serde::{Deserialize, Serialize};

/// A text fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text content (absent for non-text parts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A sequence of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Parts in order
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// `generateContent` request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn here
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A request carrying one text prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(text)],
            }],
        }
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Finish reason
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

/// `generateContent` response. Success and error bodies share this shape;
/// exactly one of the fields is normally present.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    /// Error details
    #[serde(default)]
    pub error: Option<ApiErrorDetails>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    #[serde(default)]
    pub message: String,
    /// HTTP-like code
    #[serde(default)]
    pub code: Option<u16>,
    /// Status string (e.g., "INVALID_ARGUMENT")
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::prompt("hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_first_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":" Breakout long "}],"role":"model"},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_text(), Some(" Breakout long "));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_error_body() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#,
        )
        .unwrap();
        assert_eq!(response.first_text(), None);
        let error = response.error.unwrap();
        assert_eq!(error.message, "API key not valid.");
        assert_eq!(error.code, Some(400));
    }

    #[test]
    fn test_missing_parts() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(response.first_text(), None);
    }
}
