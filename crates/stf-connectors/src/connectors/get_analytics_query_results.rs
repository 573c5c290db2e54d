//! Fetches the results of a stored analytics query.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stf_core::{ConnectorResult, Emitter, ErrorReporter, ResponseShape};

use super::{deliver, require, Connector};
use crate::endpoints::EndpointConfig;
use crate::remote::RemoteFileStore;
use crate::rest::{RestInvoker, RestMethod};

const ERR_FETCHING_DATA: &str = "Unable to fetch data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAnalyticsQueryResults {
    #[serde(default)]
    pub endpoints: EndpointConfig,
    pub tenant_id: String,
    pub query_id: String,
}

#[async_trait]
impl Connector for GetAnalyticsQueryResults {
    fn validate(&self) -> ConnectorResult<()> {
        require(&self.tenant_id, "Tenant Id")?;
        require(&self.query_id, "Query Id")
    }

    async fn execute(
        &self,
        invoker: &RestInvoker,
        _store: &dyn RemoteFileStore,
        emitter: &dyn Emitter,
        reporter: &dyn ErrorReporter,
    ) -> ConnectorResult<()> {
        self.validate()?;
        let url = self
            .endpoints
            .analytics_query_results(&self.tenant_id, &self.query_id);
        tracing::debug!(%url, "fetching analytics query results");
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
    fn blank_query_id_fails_validation() {
        let connector = GetAnalyticsQueryResults {
            endpoints: EndpointConfig::default(),
            tenant_id: "t1".to_string(),
            query_id: String::new(),
        };
        let err = connector.validate().unwrap_err();
        assert!(err.to_string().contains("Query Id"));
    }
}
