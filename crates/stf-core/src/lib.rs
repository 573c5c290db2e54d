//! Shared types, errors and host-facing seams for the STF connectors.

pub mod error;
pub mod sink;
pub mod types;

// Re-export commonly used types
pub use error::{ConnectorError, ConnectorResult, COMMON_RESOLUTION};
pub use sink::{Emitter, ErrorReporter, FailureReport};
pub use types::{Document, InvocationResult, ResponseShape, VALUE_TOKEN_KEY};
