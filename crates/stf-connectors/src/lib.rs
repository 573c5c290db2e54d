//! Endpoint connectors for the STF schema and test-framework services.
//!
//! Each connector builds its URL (from a fixed endpoint template, or taken
//! verbatim from the caller), optionally packages a file-backed multipart
//! payload, and delegates the call to the shared
//! [`rest::RestInvoker`], which executes it under timeout constraints,
//! classifies the outcome by status code and decodes the body into a
//! normalized [`stf_core::InvocationResult`].

pub mod connectors;
pub mod endpoints;
pub mod remote;
pub mod rest;

// Re-export commonly used types
pub use connectors::{
    Connector, GenerateSchemaFromFile, Get, GetAnalyticsQueryResults, IsContextTrue,
    IsEntityPartOfGroup, MapEntitiesFromFile,
};
pub use endpoints::EndpointConfig;
pub use remote::{RemoteFileStore, SldbFileStore};
pub use rest::{EntityBody, RequestSpec, RestInvoker, RestMethod, TimeoutConfig};
