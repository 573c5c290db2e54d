use thiserror::Error;

pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Resolution hint attached to failures the operator can act on.
pub const COMMON_RESOLUTION: &str =
    "Ensure that the account credentials are correct and try again";

/// Fatal errors raised by the connectors and their shared invocation layer.
///
/// Each variant carries a human reason; [`ConnectorError::resolution`] adds
/// the matching resolution hint. HTTP failures are not errors at this level,
/// they are the `Failure` arm of
/// [`InvocationResult`](crate::types::InvocationResult).
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String, resolution: String },

    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("file access failed: {0}")]
    FileAccess(String),

    #[error("network error: {0}")]
    Network(String),
}

impl ConnectorError {
    /// A required property is null, missing or blank.
    pub fn missing_property(label: &str) -> Self {
        Self::Configuration {
            reason: format!("Property {} is null or missing", label),
            resolution: format!(
                "Ensure that the property {} has a valid non-null value",
                label
            ),
        }
    }

    /// A configuration value is present but unusable.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
            resolution: COMMON_RESOLUTION.to_string(),
        }
    }

    /// Human resolution hint for this error.
    pub fn resolution(&self) -> &str {
        match self {
            Self::Configuration { resolution, .. } => resolution,
            // Programming defect, not an operational problem.
            Self::UnsupportedMethod(_) => {
                "Use one of the supported HTTP methods: GET, POST, PUT, DELETE, PATCH"
            }
            Self::FileAccess(_) | Self::Network(_) => COMMON_RESOLUTION,
        }
    }
}
