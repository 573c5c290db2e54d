use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded response body handed to the hosting pipeline.
pub type Document = Map<String, Value>;

/// Fixed key under which a raw-token response body is wrapped.
pub const VALUE_TOKEN_KEY: &str = "valueToken";

/// How a successful response body should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// Parse the entity as a key-value document.
    StructuredObject,
    /// Read the entity as text and wrap it under [`VALUE_TOKEN_KEY`].
    RawToken,
}

/// Normalized outcome of one HTTP invocation.
///
/// Exactly one variant is populated: a decoded body on success, or the status
/// line on failure. Non-2xx outcomes are values, not errors; the caller
/// decides whether to escalate them.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    Success(Document),
    Failure { status_code: u16, reason_phrase: String },
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The decoded document, if this invocation succeeded.
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Success(document) => Some(document),
            Self::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_exposes_its_document() {
        let mut document = Document::new();
        document.insert("a".to_string(), json!(1));
        let result = InvocationResult::Success(document.clone());
        assert!(result.is_success());
        assert_eq!(result.into_document(), Some(document));
    }

    #[test]
    fn failure_has_no_document() {
        let result = InvocationResult::Failure {
            status_code: 404,
            reason_phrase: "Not Found".to_string(),
        };
        assert!(!result.is_success());
        assert_eq!(result.into_document(), None);
    }

    #[test]
    fn response_shape_round_trips_as_snake_case() {
        let json = serde_json::to_string(&ResponseShape::StructuredObject).unwrap();
        assert_eq!(json, "\"structured_object\"");
        let shape: ResponseShape = serde_json::from_str("\"raw_token\"").unwrap();
        assert_eq!(shape, ResponseShape::RawToken);
    }
}
