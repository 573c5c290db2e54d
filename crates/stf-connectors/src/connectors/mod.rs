//! Endpoint connectors built on the shared REST invocation layer.

mod generate_schema_from_file;
mod get;
mod get_analytics_query_results;
mod is_context_true;
mod is_entity_part_of_group;
mod map_entities_from_file;

pub use generate_schema_from_file::GenerateSchemaFromFile;
pub use get::Get;
pub use get_analytics_query_results::GetAnalyticsQueryResults;
pub use is_context_true::IsContextTrue;
pub use is_entity_part_of_group::IsEntityPartOfGroup;
pub use map_entities_from_file::MapEntitiesFromFile;

use async_trait::async_trait;

use stf_core::{
    ConnectorError, ConnectorResult, Emitter, ErrorReporter, FailureReport, InvocationResult,
    COMMON_RESOLUTION,
};

use crate::remote::RemoteFileStore;
use crate::rest::RestInvoker;

/// Shared execution surface for all endpoint connectors.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Validate the configuration; runs before any network activity.
    fn validate(&self) -> ConnectorResult<()>;

    /// Perform the remote call, emitting the decoded document on success and
    /// reporting HTTP failures through the error channel. Configuration,
    /// file-access and transport errors abort the call instead.
    async fn execute(
        &self,
        invoker: &RestInvoker,
        store: &dyn RemoteFileStore,
        emitter: &dyn Emitter,
        reporter: &dyn ErrorReporter,
    ) -> ConnectorResult<()>;
}

/// Route a normalized invocation outcome to the host: documents to the
/// emitter, status-line failures to the error reporter with the fixed
/// resolution hint.
pub(crate) async fn deliver(
    result: InvocationResult,
    failure_message: &str,
    emitter: &dyn Emitter,
    reporter: &dyn ErrorReporter,
) {
    match result {
        InvocationResult::Success(document) => emitter.emit(document).await,
        InvocationResult::Failure { status_code, reason_phrase } => {
            tracing::error!(
                "{} with HTTP response code {} and reason {}",
                failure_message,
                status_code,
                reason_phrase
            );
            reporter
                .report(FailureReport {
                    message: failure_message.to_string(),
                    reason: format!("HTTP code: {}, Reason: {}", status_code, reason_phrase),
                    resolution: COMMON_RESOLUTION.to_string(),
                })
                .await;
        }
    }
}

/// Reject blank required properties with a property-specific error.
pub(crate) fn require(value: &str, label: &str) -> ConnectorResult<()> {
    if value.trim().is_empty() {
        Err(ConnectorError::missing_property(label))
    } else {
        Ok(())
    }
}

/// Prefix a platform-managed file path with the locator scheme.
pub(crate) fn sldb_reference(path: &str) -> String {
    format!("sldb:///{}", path)
}
