//! Request building: method mapping and the per-call request description.

use std::fmt;
use std::str::FromStr;

use stf_core::{ConnectorError, ConnectorResult};

use super::multipart::EntityBody;

/// The five HTTP methods the invocation layer supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl RestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Whether requests with this method carry an enclosed entity.
    /// Payloads on GET/DELETE are structurally discarded, never transmitted.
    pub fn supports_entity(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Patch => reqwest::Method::PATCH,
        }
    }
}

impl FromStr for RestMethod {
    type Err = ConnectorError;

    fn from_str(s: &str) -> ConnectorResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            other => {
                tracing::error!("unsupported HTTP method {} encountered", other);
                Err(ConnectorError::UnsupportedMethod(s.to_string()))
            }
        }
    }
}

impl fmt::Display for RestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One invocation's request description. Constructed fresh per call and
/// consumed by the invoker; never reused.
#[derive(Debug)]
pub struct RequestSpec {
    pub method: RestMethod,
    pub url: String,
    pub payload: Option<EntityBody>,
}

impl RequestSpec {
    pub fn new(method: RestMethod, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), payload: None }
    }

    pub fn with_payload(mut self, payload: Option<EntityBody>) -> Self {
        self.payload = payload;
        self
    }
}
