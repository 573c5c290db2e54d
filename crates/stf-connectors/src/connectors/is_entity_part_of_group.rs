//! Checks whether an entity belongs to a group.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stf_core::{ConnectorResult, Emitter, ErrorReporter, ResponseShape};

use super::{deliver, require, Connector};
use crate::endpoints::EndpointConfig;
use crate::remote::RemoteFileStore;
use crate::rest::{RestInvoker, RestMethod};

const ERR_FETCHING_DATA: &str = "Unable to fetch data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsEntityPartOfGroup {
    #[serde(default)]
    pub endpoints: EndpointConfig,
    pub tenant_id: String,
    pub schema_id: String,
    pub entity_id: String,
}

#[async_trait]
impl Connector for IsEntityPartOfGroup {
    fn validate(&self) -> ConnectorResult<()> {
        require(&self.tenant_id, "Tenant Id")?;
        require(&self.schema_id, "Schema Id")?;
        require(&self.entity_id, "Entity Id")
    }

    async fn execute(
        &self,
        invoker: &RestInvoker,
        _store: &dyn RemoteFileStore,
        emitter: &dyn Emitter,
        reporter: &dyn ErrorReporter,
    ) -> ConnectorResult<()> {
        self.validate()?;
        let url = self.endpoints.is_entity_part_of_group(
            &self.tenant_id,
            &self.schema_id,
            &self.entity_id,
        );
        tracing::debug!(%url, "checking entity group membership");
        let result = invoker
            .invoke(RestMethod::Get, None, &url, ResponseShape::StructuredObject)
            .await?;
        deliver(result, ERR_FETCHING_DATA, emitter, reporter).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_blank_property_is_reported_by_name() {
        let base = IsEntityPartOfGroup {
            endpoints: EndpointConfig::default(),
            tenant_id: "t1".to_string(),
            schema_id: "s1".to_string(),
            entity_id: "e1".to_string(),
        };

        let mut connector = base.clone();
        connector.tenant_id.clear();
        assert!(connector.validate().unwrap_err().to_string().contains("Tenant Id"));

        let mut connector = base.clone();
        connector.schema_id.clear();
        assert!(connector.validate().unwrap_err().to_string().contains("Schema Id"));

        let mut connector = base;
        connector.entity_id.clear();
        assert!(connector.validate().unwrap_err().to_string().contains("Entity Id"));
    }
}
