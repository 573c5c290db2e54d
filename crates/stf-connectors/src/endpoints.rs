//! Fixed endpoint URL templates.
//!
//! Each connector formats one of these templates with caller-supplied
//! identifiers; the invocation layer treats the produced URL as an opaque
//! string.

use serde::{Deserialize, Serialize};
use urlencoding::encode;

/// Base URLs of the two backend services the connectors talk to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Mapping service handling schema generation and entity mapping.
    pub mapping_service_url: String,
    /// Test-framework service handling group, context and analytics lookups.
    pub tfw_service_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            mapping_service_url: "http://qa.mappingservice.gaian.com".to_string(),
            tfw_service_url: "http://192.168.28.37:8282/TFW".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn generate_schema_from_file(
        &self,
        entity_id: &str,
        tenant_id: &str,
        version: &str,
    ) -> String {
        format!(
            "{}/generate/schema/file?entityId={}&tenantId={}&version={}",
            self.mapping_service_url,
            encode(entity_id),
            encode(tenant_id),
            encode(version)
        )
    }

    pub fn map_entities_from_file(&self, mapping_id: &str) -> String {
        format!(
            "{}/entity/mapping/file?mappingId={}",
            self.mapping_service_url,
            encode(mapping_id)
        )
    }

    pub fn is_entity_part_of_group(
        &self,
        tenant_id: &str,
        schema_id: &str,
        entity_id: &str,
    ) -> String {
        format!(
            "{}/v1/{}/entity/groups/{}/{}",
            self.tfw_service_url,
            encode(tenant_id),
            encode(schema_id),
            encode(entity_id)
        )
    }

    pub fn is_context_true(&self, tenant_id: &str, context_id: &str) -> String {
        format!(
            "{}/v1/{}/context/evaluation/{}",
            self.tfw_service_url,
            encode(tenant_id),
            encode(context_id)
        )
    }

    pub fn analytics_query_results(&self, tenant_id: &str, query_id: &str) -> String {
        format!(
            "{}/v1/{}/analytics/query/data/{}",
            self.tfw_service_url,
            encode(tenant_id),
            encode(query_id)
        )
    }
}
