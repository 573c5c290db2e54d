//! Host-facing output seams.
//!
//! The hosting pipeline owns document emission and error reporting; the
//! connectors only depend on these two narrow traits, keeping the core
//! decoupled from any specific hosting runtime.

use async_trait::async_trait;

use crate::types::Document;

/// An HTTP failure converted into something the host can surface: what went
/// wrong, the status line, and what the operator should do about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub message: String,
    pub reason: String,
    pub resolution: String,
}

/// Receives decoded documents from successful invocations.
#[async_trait]
pub trait Emitter: Send + Sync {
    async fn emit(&self, document: Document);
}

/// Receives failure reports for HTTP-level failures.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    async fn report(&self, failure: FailureReport);
}
