//! Response body decoding.

use serde_json::Value;
use stf_core::{Document, ResponseShape, VALUE_TOKEN_KEY};

/// Decode entity bytes per the requested response shape.
///
/// Structured parse failures are swallowed: the error is logged and an empty
/// mapping is substituted, so the invocation still completes as a success.
/// Existing pipelines depend on this soft-failure behavior.
pub fn decode(bytes: &[u8], shape: ResponseShape) -> Document {
    match shape {
        ResponseShape::StructuredObject => match serde_json::from_slice::<Document>(bytes) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!("failed to read REST response as a structured object: {}", err);
                Document::new()
            }
        },
        ResponseShape::RawToken => {
            let token = String::from_utf8_lossy(bytes).into_owned();
            let mut document = Document::new();
            document.insert(VALUE_TOKEN_KEY.to_string(), Value::String(token));
            document
        }
    }
}
